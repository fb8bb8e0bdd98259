//! Host event hooks.
//!
//! The host calls [`LumberjackPlugin::on_server_open`] once when it starts
//! and [`LumberjackPlugin::on_block_destroy`] for every block a player
//! breaks, before the block is removed.

use crate::config::LumberjackConfig;
use crate::felling::{FellOutcome, Lumberjack};
use crate::world::{BlockSource, Requester};

/// Default plugin display name
pub const PLUGIN_NAME: &str = "Lumberjack";

/// The plugin as registered with a host
pub struct LumberjackPlugin {
    name: String,
    lumberjack: Lumberjack,
}

impl LumberjackPlugin {
    pub fn new(config: LumberjackConfig) -> Self {
        Self::with_name(PLUGIN_NAME, config)
    }

    pub fn with_name(name: impl Into<String>, config: LumberjackConfig) -> Self {
        Self {
            name: name.into(),
            lumberjack: Lumberjack::new(config),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lumberjack(&self) -> &Lumberjack {
        &self.lumberjack
    }

    /// Line logged when the host opens, e.g. `[plugin:Lumberjack] Enabled`
    pub fn enabled_message(&self) -> String {
        format!("[plugin:{}] Enabled", self.name)
    }

    /// Announce the plugin and its settings
    pub fn on_server_open(&self) {
        let config = self.lumberjack.config();
        log::info!("{}", self.enabled_message());
        log::debug!(
            "[plugin:{}] tool mode: {}, damage per block: {}, only on sneak: {}",
            self.name,
            config.tool_mode,
            config.damage_per_block,
            config.only_on_sneak
        );
    }

    /// Forward a block break to the lumberjack
    pub fn on_block_destroy<W, R>(
        &self,
        world: &mut W,
        requester: &mut R,
        position: W::Position,
    ) -> FellOutcome
    where
        W: BlockSource,
        R: Requester,
    {
        self.lumberjack.on_block_destroyed(world, requester, position)
    }
}

impl Default for LumberjackPlugin {
    fn default() -> Self {
        Self::new(LumberjackConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::felling::SkipReason;
    use crate::world::{GridWorld, Player};
    use glam::IVec3;

    /// A 5-log tree on soil with leaves above, as a player would chop it
    fn five_log_tree() -> GridWorld {
        let mut world = GridWorld::new();
        world.set_block(IVec3::ZERO, "tile.dirt");
        world.fill_column(IVec3::Y, 5, "tile.log");
        world.set_block(IVec3::new(0, 6, 0), "tile.leaves");
        world
    }

    #[test]
    fn test_plugin_fells_tree() {
        let plugin = LumberjackPlugin::default();
        assert_eq!(plugin.name(), PLUGIN_NAME);

        let mut world = five_log_tree();
        let mut player = Player::holding("golden_axe");
        let outcome = plugin.on_block_destroy(&mut world, &mut player, IVec3::Y);
        assert_eq!(outcome, FellOutcome::Felled { destroyed: 4, wear: Some(4) });

        // the host then removes the broken block itself
        world.remove_block(IVec3::Y);
        assert_eq!(world.count_of("tile.log"), 0);
        assert_eq!(world.block(IVec3::new(0, 6, 0)), "tile.leaves");
    }

    #[test]
    fn test_second_break_after_felling_is_not_a_trunk() {
        let plugin = LumberjackPlugin::default();
        let mut world = five_log_tree();
        let mut player = Player::holding("golden_axe");

        plugin.on_block_destroy(&mut world, &mut player, IVec3::Y);
        let outcome = plugin.on_block_destroy(&mut world, &mut player, IVec3::new(0, 3, 0));
        assert_eq!(outcome, FellOutcome::Skipped(SkipReason::NotATrunk));
        assert_eq!(player.wear, 4);
    }

    #[test]
    fn test_custom_name() {
        let plugin = LumberjackPlugin::with_name("Timber", LumberjackConfig::default());
        assert_eq!(plugin.name(), "Timber");
        assert_eq!(plugin.enabled_message(), "[plugin:Timber] Enabled");
        assert!(plugin.lumberjack().config().wear_enabled());
    }
}
