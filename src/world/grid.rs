//! Sparse in-memory block grid

use std::collections::HashMap;

use glam::IVec3;

use super::direction::Direction;
use super::host::BlockSource;

/// Default identifier for unoccupied cells
pub const AIR: &str = "tile.air";

/// A world of named blocks on an integer grid.
///
/// Only occupied cells are stored; everything else reads as the empty id.
/// Destroy calls are recorded so callers can inspect what a felling removed.
pub struct GridWorld {
    /// Occupied cells
    blocks: HashMap<IVec3, String>,
    /// Identifier reported for cells not in `blocks`
    empty_id: String,
    /// Every destroy call in order: position and whether items dropped
    destroyed: Vec<(IVec3, bool)>,
}

impl GridWorld {
    /// Create an empty world where absent cells read as `tile.air`
    pub fn new() -> Self {
        Self::with_empty_id(AIR)
    }

    /// Create an empty world with a custom empty identifier
    pub fn with_empty_id(empty_id: impl Into<String>) -> Self {
        Self {
            blocks: HashMap::new(),
            empty_id: empty_id.into(),
            destroyed: Vec::new(),
        }
    }

    /// Place a block. Placing the empty id clears the cell.
    pub fn set_block(&mut self, pos: IVec3, id: impl Into<String>) {
        let id = id.into();
        if id == self.empty_id {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, id);
        }
    }

    /// Stack `height` copies of `id` upward starting at `base`
    pub fn fill_column(&mut self, base: IVec3, height: u32, id: &str) {
        for dy in 0..height as i32 {
            self.set_block(base + IVec3::new(0, dy, 0), id);
        }
    }

    /// Identifier of the block at `pos`
    pub fn block(&self, pos: IVec3) -> &str {
        self.blocks
            .get(&pos)
            .map(String::as_str)
            .unwrap_or(self.empty_id.as_str())
    }

    /// Clear a cell without recording it as destroyed
    pub fn remove_block(&mut self, pos: IVec3) -> Option<String> {
        self.blocks.remove(&pos)
    }

    /// Number of occupied cells
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of occupied cells holding exactly `id`
    pub fn count_of(&self, id: &str) -> usize {
        self.blocks.values().filter(|b| b.as_str() == id).count()
    }

    /// Destroy calls recorded so far
    pub fn destroyed(&self) -> &[(IVec3, bool)] {
        &self.destroyed
    }
}

impl Default for GridWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockSource for GridWorld {
    type Position = IVec3;

    fn block_id(&self, pos: IVec3) -> &str {
        self.block(pos)
    }

    fn neighbor(&self, pos: IVec3, direction: Direction) -> IVec3 {
        pos + direction.offset()
    }

    fn destroy_block(&mut self, pos: IVec3, drop_items: bool) {
        log::trace!("destroy {:?} (drop items: {})", pos, drop_items);
        self.blocks.remove(&pos);
        self.destroyed.push((pos, drop_items));
    }
}
