//! Lumberjack - fell a whole tree by breaking one of its logs
//!
//! The host world is reached only through the traits in [`world`]; the
//! tree rules live in [`felling`].

pub mod core;
pub mod config;
pub mod world;
pub mod felling;
pub mod events;

pub use config::{LumberjackConfig, ToolMode};
pub use events::LumberjackPlugin;
pub use felling::{FellOutcome, Lumberjack, SkipReason};
