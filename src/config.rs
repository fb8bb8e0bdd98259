//! Lumberjack configuration.
//!
//! Built once at startup and never changed afterwards. Loaded from JSON;
//! missing fields take their defaults.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};
use crate::felling::MaterialRules;

/// Which held items may fell a whole tree. Stored as an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ToolMode {
    /// 0: only axes fell trees; other tools leave the logs floating
    #[default]
    AxeOnly,
    /// 1: any held item fells trees. Tool wear is never applied.
    AnyTool,
}

impl TryFrom<u8> for ToolMode {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0 => Ok(ToolMode::AxeOnly),
            1 => Ok(ToolMode::AnyTool),
            other => Err(format!("unknown tool mode {} (expected 0 or 1)", other)),
        }
    }
}

impl From<ToolMode> for u8 {
    fn from(mode: ToolMode) -> u8 {
        match mode {
            ToolMode::AxeOnly => 0,
            ToolMode::AnyTool => 1,
        }
    }
}

impl fmt::Display for ToolMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolMode::AxeOnly => write!(f, "axe only"),
            ToolMode::AnyTool => write!(f, "any tool"),
        }
    }
}

/// Felling behaviour toggles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LumberjackConfig {
    /// Which tools can fell a tree
    pub tool_mode: ToolMode,
    /// Wear the tool by one use per felled block
    pub damage_per_block: bool,
    /// Only fell while sneaking
    pub only_on_sneak: bool,
    /// Block and item identifier matching
    pub materials: MaterialRules,
}

impl Default for LumberjackConfig {
    fn default() -> Self {
        Self {
            tool_mode: ToolMode::AxeOnly,
            damage_per_block: true,
            only_on_sneak: false,
            materials: MaterialRules::default(),
        }
    }
}

impl LumberjackConfig {
    /// Parse and validate from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let config: LumberjackConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from file (sync)
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Reject matching rules that would match everything
    pub fn validate(&self) -> Result<()> {
        match self.materials.first_empty_rule() {
            Some(rule) => Err(Error::Config(format!("materials.{} must not be empty", rule))),
            None => Ok(()),
        }
    }

    /// Wear is applied only when axes are required and per-block damage is on.
    pub fn wear_enabled(&self) -> bool {
        self.tool_mode == ToolMode::AxeOnly && self.damage_per_block
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = LumberjackConfig::default();
        assert_eq!(config.tool_mode, ToolMode::AxeOnly);
        assert!(config.damage_per_block);
        assert!(!config.only_on_sneak);
        assert!(config.wear_enabled());
    }

    #[test]
    fn test_wear_disabled_for_any_tool() {
        let config = LumberjackConfig {
            tool_mode: ToolMode::AnyTool,
            ..Default::default()
        };
        assert!(!config.wear_enabled());

        let config = LumberjackConfig {
            damage_per_block: false,
            ..Default::default()
        };
        assert!(!config.wear_enabled());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = LumberjackConfig::from_json(r#"{ "tool_mode": 1, "only_on_sneak": true }"#)
            .expect("parse failed");
        assert_eq!(config.tool_mode, ToolMode::AnyTool);
        assert!(config.only_on_sneak);
        assert!(config.damage_per_block);
        assert_eq!(config.materials, MaterialRules::default());
    }

    #[test]
    fn test_material_overrides() {
        let json = r#"{ "materials": { "trunk_prefix": "minecraft:oak_log" } }"#;
        let config = LumberjackConfig::from_json(json).expect("parse failed");
        assert_eq!(config.materials.trunk_prefix, "minecraft:oak_log");
        assert_eq!(config.materials.soil_prefix, "tile.dirt");
    }

    #[test]
    fn test_unknown_tool_mode_rejected() {
        let result = LumberjackConfig::from_json(r#"{ "tool_mode": 2 }"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_empty_rule_rejected() {
        let result = LumberjackConfig::from_json(r#"{ "materials": { "empty_prefix": "" } }"#);
        match result {
            Err(Error::Config(msg)) => assert!(msg.contains("empty_prefix")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_tool_mode_serializes_as_integer() {
        let json = serde_json::to_string(&ToolMode::AnyTool).expect("serialize failed");
        assert_eq!(json, "1");
    }

    #[test]
    fn test_config_file_round_trip() {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("lumberjack.json");

        let config = LumberjackConfig {
            only_on_sneak: true,
            ..Default::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).expect("serialize failed"))
            .expect("write failed");

        let loaded = LumberjackConfig::load(&path).expect("load failed");
        assert_eq!(loaded, config);
    }
}
