//! Tree felling rules.
//!
//! Leaf-first: [`material`] classifies blocks, [`adjacency`] looks at
//! neighbors, [`validate`] decides what is rooted and what is a tree,
//! [`destroyer`] removes a tree, [`gatekeeper`] ties it to a block break.

pub mod material;
pub mod adjacency;
pub mod validate;
pub mod destroyer;
pub mod gatekeeper;

pub use material::{MaterialKind, MaterialRules};
pub use adjacency::{Neighbor, NeighborSet};
pub use validate::{is_part_of_tree, is_rooted_in_soil};
pub use destroyer::destroy;
pub use gatekeeper::{FellOutcome, Lumberjack, SkipReason};
