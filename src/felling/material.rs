//! Block material classification.
//!
//! Every block id maps to exactly one [`MaterialKind`]. Classification is
//! recomputed on each query because felling mutates the world between
//! lookups.

use serde::{Deserialize, Serialize};

/// What a cell holds, as far as tree felling is concerned
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Tree wood, plain or stripped
    Trunk,
    /// Ground a tree can be rooted in
    Soil,
    /// Leaves
    Foliage,
    /// Air
    Empty,
    /// Anything else. Stops every walk.
    Other,
}

impl MaterialKind {
    /// Foliage and empty cells are passed through during felling
    pub fn is_pass_through(self) -> bool {
        matches!(self, MaterialKind::Foliage | MaterialKind::Empty)
    }
}

/// Identifier matching rules for each material
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialRules {
    /// Plain logs: id starts with this
    pub trunk_prefix: String,
    /// Stripped logs: id starts with this...
    pub stripped_prefix: String,
    /// ...and ends with this
    pub stripped_suffix: String,
    pub soil_prefix: String,
    pub foliage_prefix: String,
    pub empty_prefix: String,
    /// Held items containing this are axes (pickaxes excluded)
    pub axe_keyword: String,
}

impl Default for MaterialRules {
    fn default() -> Self {
        Self {
            trunk_prefix: "tile.log".to_string(),
            stripped_prefix: "tile.stripped_".to_string(),
            stripped_suffix: "_log".to_string(),
            soil_prefix: "tile.dirt".to_string(),
            foliage_prefix: "tile.leaves".to_string(),
            empty_prefix: "tile.air".to_string(),
            axe_keyword: "axe".to_string(),
        }
    }
}

impl MaterialRules {
    /// Classify a block id. Trunk wins over the other kinds.
    pub fn classify(&self, id: &str) -> MaterialKind {
        if self.is_trunk(id) {
            MaterialKind::Trunk
        } else if self.is_soil(id) {
            MaterialKind::Soil
        } else if self.is_foliage(id) {
            MaterialKind::Foliage
        } else if self.is_empty(id) {
            MaterialKind::Empty
        } else {
            MaterialKind::Other
        }
    }

    /// Plain logs, or stripped logs (prefix and suffix both required)
    pub fn is_trunk(&self, id: &str) -> bool {
        if id.starts_with(&self.trunk_prefix) {
            return true;
        }
        id.starts_with(&self.stripped_prefix) && id.ends_with(&self.stripped_suffix)
    }

    pub fn is_soil(&self, id: &str) -> bool {
        id.starts_with(&self.soil_prefix)
    }

    pub fn is_foliage(&self, id: &str) -> bool {
        id.starts_with(&self.foliage_prefix)
    }

    pub fn is_empty(&self, id: &str) -> bool {
        id.starts_with(&self.empty_prefix)
    }

    /// Whether a held item counts as an axe
    pub fn is_axe(&self, item_id: &str) -> bool {
        item_id.contains(&self.axe_keyword) && !item_id.contains("pickaxe")
    }

    /// Name of the first rule that is empty, if any
    pub(crate) fn first_empty_rule(&self) -> Option<&'static str> {
        [
            ("trunk_prefix", &self.trunk_prefix),
            ("stripped_prefix", &self.stripped_prefix),
            ("stripped_suffix", &self.stripped_suffix),
            ("soil_prefix", &self.soil_prefix),
            ("foliage_prefix", &self.foliage_prefix),
            ("empty_prefix", &self.empty_prefix),
            ("axe_keyword", &self.axe_keyword),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }
}
