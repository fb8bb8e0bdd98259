//! Host world seam.
//!
//! The felling rules never touch storage directly. A host supplies block
//! lookups, neighbor resolution and block destruction through [`BlockSource`],
//! and the breaking player through [`Requester`]. [`GridWorld`] is a small
//! in-memory host used by the `fell` tool, tests and benches.

pub mod direction;
pub mod host;
pub mod grid;
pub mod player;
pub mod scene;

pub use direction::Direction;
pub use host::{BlockSource, Requester};
pub use grid::GridWorld;
pub use player::Player;
pub use scene::{Scene, SceneBlock};
