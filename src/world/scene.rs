//! JSON scene files describing a [`GridWorld`].
//!
//! ```json
//! { "blocks": [ { "pos": [0, 0, 0], "id": "tile.dirt" },
//!               { "pos": [0, 1, 0], "id": "tile.log" } ] }
//! ```

use std::collections::HashSet;
use std::path::Path;

use glam::IVec3;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use super::grid::{GridWorld, AIR};

/// A single placed block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneBlock {
    pub pos: IVec3,
    pub id: String,
}

/// A list of placed blocks
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Scene {
    pub blocks: Vec<SceneBlock>,
}

impl Scene {
    /// Parse and validate a scene from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Load a scene file (sync)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Save to file (sync)
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Blocks must have a non-empty id and a position of their own
    fn validate(&self) -> Result<()> {
        let mut seen: HashSet<IVec3> = HashSet::with_capacity(self.blocks.len());
        for block in &self.blocks {
            if block.id.trim().is_empty() {
                return Err(Error::Scene(format!("empty block id at {}", block.pos)));
            }
            if !seen.insert(block.pos) {
                return Err(Error::Scene(format!("duplicate block at {}", block.pos)));
            }
        }
        Ok(())
    }

    /// Build a world where absent cells read as `tile.air`
    pub fn to_world(&self) -> GridWorld {
        self.to_world_with_empty_id(AIR)
    }

    /// Build a world where absent cells read as `empty_id`
    pub fn to_world_with_empty_id(&self, empty_id: &str) -> GridWorld {
        let mut world = GridWorld::with_empty_id(empty_id);
        for block in &self.blocks {
            world.set_block(block.pos, block.id.clone());
        }
        world
    }
}
