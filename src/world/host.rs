//! Traits a host environment implements to run the felling rules.

use std::fmt;

use super::direction::Direction;

/// Block storage owned by the host.
///
/// Lookups are assumed total: every position has a block and every
/// direction resolves to a neighbor. Reads and destroys are interleaved
/// within a single felling, so implementations must not cache.
pub trait BlockSource {
    /// Opaque cell identifier. Never derived arithmetically by the caller.
    type Position: Copy + Eq + fmt::Debug;

    /// Stable descriptor id of the block currently at `pos` (e.g. `tile.log`).
    fn block_id(&self, pos: Self::Position) -> &str;

    /// Position adjacent to `pos` across the given face.
    fn neighbor(&self, pos: Self::Position, direction: Direction) -> Self::Position;

    /// Irreversibly destroy the block at `pos`, optionally dropping its items.
    fn destroy_block(&mut self, pos: Self::Position, drop_items: bool);
}

/// The actor that broke the block.
pub trait Requester {
    /// Whether the requester is currently sneaking.
    fn is_sneaking(&self) -> bool;

    /// Identifier of the item currently held.
    fn held_item_id(&self) -> &str;

    /// Damage the held item by `amount` uses.
    fn apply_tool_wear(&mut self, amount: u32);
}
