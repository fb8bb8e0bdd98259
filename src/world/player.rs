//! Minimal requester used alongside [`GridWorld`](super::GridWorld)

use super::host::Requester;

/// A player holding one item.
#[derive(Clone, Debug, Default)]
pub struct Player {
    /// Identifier of the held item (e.g. `iron_axe`)
    pub held_item: String,
    /// Whether the player is sneaking
    pub sneaking: bool,
    /// Total wear applied to the held item so far
    pub wear: u32,
    /// Number of separate wear applications
    pub wear_events: u32,
}

impl Player {
    /// Create a standing player holding `held_item`
    pub fn holding(held_item: impl Into<String>) -> Self {
        Self {
            held_item: held_item.into(),
            ..Default::default()
        }
    }

    /// Same player, sneaking
    pub fn sneaking(self) -> Self {
        Self { sneaking: true, ..self }
    }
}

impl Requester for Player {
    fn is_sneaking(&self) -> bool {
        self.sneaking
    }

    fn held_item_id(&self) -> &str {
        &self.held_item
    }

    fn apply_tool_wear(&mut self, amount: u32) {
        self.wear = self.wear.saturating_add(amount);
        self.wear_events += 1;
    }
}
