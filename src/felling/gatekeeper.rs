//! Decides whether a broken block fells its tree.
//!
//! Checks run in a fixed order and the first failure declines silently:
//! the break then behaves like any other block break.
//!
//! 1. sneaking, when required
//! 2. holding an axe, when required
//! 3. the broken block is a trunk
//! 4. no horizontal neighbor is a soil-rooted trunk of its own
//! 5. the block below is air or rooted in soil
//! 6. the column above ends in leaves or air
//!
//! Then the tree above the broken block is destroyed and the tool worn.

use std::fmt;

use crate::config::{LumberjackConfig, ToolMode};
use crate::world::{BlockSource, Direction, Requester};
use super::adjacency;
use super::destroyer;
use super::material::MaterialKind;
use super::validate::{is_part_of_tree, is_rooted_in_soil};

/// The first check that declined a break
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    NotSneaking,
    NotAnAxe,
    NotATrunk,
    /// A soil-rooted trunk stands next to the broken block
    SupportedByNeighbor(Direction),
    NotRootedInSoil,
    NotATree,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotSneaking => write!(f, "requester is not sneaking"),
            SkipReason::NotAnAxe => write!(f, "held item is not an axe"),
            SkipReason::NotATrunk => write!(f, "broken block is not a trunk"),
            SkipReason::SupportedByNeighbor(dir) => {
                write!(f, "soil-rooted trunk adjacent to the {:?}", dir)
            }
            SkipReason::NotRootedInSoil => write!(f, "trunk is not rooted in soil"),
            SkipReason::NotATree => write!(f, "no leaves or air above the trunk"),
        }
    }
}

/// Result of handling one block-destroyed notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FellOutcome {
    /// Normal block break, nothing else happened
    Skipped(SkipReason),
    /// The tree above the broken block was felled
    Felled {
        /// Blocks destroyed, not counting the broken one
        destroyed: u32,
        /// Wear applied to the held tool, if any
        wear: Option<u32>,
    },
}

impl FellOutcome {
    /// Number of blocks felled (0 when skipped)
    pub fn destroyed(&self) -> u32 {
        match self {
            FellOutcome::Skipped(_) => 0,
            FellOutcome::Felled { destroyed, .. } => *destroyed,
        }
    }

    pub fn is_felled(&self) -> bool {
        matches!(self, FellOutcome::Felled { .. })
    }
}

/// Block-destroyed handler that fells whole trees
pub struct Lumberjack {
    config: LumberjackConfig,
}

impl Lumberjack {
    pub fn new(config: LumberjackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LumberjackConfig {
        &self.config
    }

    /// Handle a block broken by `requester` at `broken`.
    ///
    /// Must run before the host removes the broken block: its material is
    /// read to confirm it was a trunk.
    pub fn on_block_destroyed<W, R>(
        &self,
        world: &mut W,
        requester: &mut R,
        broken: W::Position,
    ) -> FellOutcome
    where
        W: BlockSource,
        R: Requester,
    {
        let start = match self.check(&*world, &*requester, broken) {
            Ok(start) => start,
            Err(reason) => {
                log::debug!("not felling at {:?}: {}", broken, reason);
                return FellOutcome::Skipped(reason);
            }
        };

        let destroyed = destroyer::destroy(world, &self.config.materials, start);

        let wear = if self.config.wear_enabled() && destroyed > 0 {
            requester.apply_tool_wear(destroyed);
            Some(destroyed)
        } else {
            None
        };

        log::info!(
            "felled {} blocks above {:?} with {} (wear: {})",
            destroyed,
            broken,
            requester.held_item_id(),
            wear.unwrap_or(0)
        );
        FellOutcome::Felled { destroyed, wear }
    }

    /// Run every check; on success returns the position to fell from
    fn check<W, R>(
        &self,
        world: &W,
        requester: &R,
        broken: W::Position,
    ) -> Result<W::Position, SkipReason>
    where
        W: BlockSource,
        R: Requester,
    {
        let rules = &self.config.materials;

        if self.config.only_on_sneak && !requester.is_sneaking() {
            return Err(SkipReason::NotSneaking);
        }

        if self.config.tool_mode == ToolMode::AxeOnly && !rules.is_axe(requester.held_item_id()) {
            return Err(SkipReason::NotAnAxe);
        }

        if adjacency::material_at(world, rules, broken) != MaterialKind::Trunk {
            return Err(SkipReason::NotATrunk);
        }

        let around = adjacency::neighbors(world, rules, broken);

        for side in around.horizontal() {
            if side.material == MaterialKind::Trunk
                && is_rooted_in_soil(world, rules, side.position)
            {
                return Err(SkipReason::SupportedByNeighbor(side.direction));
            }
        }

        if around.down.material != MaterialKind::Empty
            && !is_rooted_in_soil(world, rules, around.down.position)
        {
            return Err(SkipReason::NotRootedInSoil);
        }

        if !is_part_of_tree(world, rules, around.up.position) {
            return Err(SkipReason::NotATree);
        }

        Ok(around.up.position)
    }
}
