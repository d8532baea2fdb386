//! Reward grants - Applying quest payouts to a character
//!
//! Only experience and items touch character state. Gold and unlocks belong
//! to the economy and world systems and are passed back untouched.

use crate::character::Character;
use crate::item::ItemRef;
use serde::{Deserialize, Serialize};

/// One item line in a reward payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardItem {
    pub id: String,
    pub name: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

/// Payload granted on completing a quest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardGrant {
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub items: Vec<RewardItem>,
    #[serde(default)]
    pub unlock_quests: Vec<String>,
    #[serde(default)]
    pub unlock_locations: Vec<String>,
}

/// What applying a reward did
#[derive(Debug, Clone, Default)]
pub struct RewardOutcome {
    pub leveled_up: bool,
    /// Items now in the inventory
    pub items_added: Vec<ItemRef>,
    /// Items built but refused by the inventory; still owned by the caller
    pub items_rejected: Vec<ItemRef>,
    /// Units never built because the inventory was full, per reward line
    pub items_undelivered: Vec<RewardItem>,
    /// Reward lines the item factory could not build
    pub unknown_items: Vec<String>,
    /// Left for the economy system
    pub gold: u32,
    pub unlock_quests: Vec<String>,
    pub unlock_locations: Vec<String>,
}

impl Character {
    /// Grant a reward's experience and items
    ///
    /// `item_factory` builds one item instance per unit of quantity and may
    /// return `None` for ids it does not know. Once the inventory is full no
    /// more items are built; the leftover units are reported per line.
    pub fn apply_reward<F>(&mut self, reward: &RewardGrant, mut item_factory: F) -> RewardOutcome
    where
        F: FnMut(&RewardItem) -> Option<ItemRef>,
    {
        let mut outcome = RewardOutcome {
            gold: reward.gold,
            unlock_quests: reward.unlock_quests.clone(),
            unlock_locations: reward.unlock_locations.clone(),
            ..Default::default()
        };

        if reward.xp > 0 {
            outcome.leveled_up = self.gain_experience(reward.xp);
        }

        for line in &reward.items {
            let mut remaining = line.quantity;
            while remaining > 0 && !self.inventory().is_full() {
                let Some(item) = item_factory(line) else {
                    tracing::warn!(character = %self.name(), "No item definition for reward {}", line.id);
                    outcome.unknown_items.push(line.id.clone());
                    remaining = 0;
                    break;
                };
                remaining -= 1;
                if self.add_to_inventory(item.clone()) {
                    outcome.items_added.push(item);
                } else {
                    outcome.items_rejected.push(item);
                }
            }

            if remaining > 0 {
                tracing::warn!(
                    character = %self.name(),
                    "Inventory full, {} of {} {} not delivered",
                    remaining,
                    line.quantity,
                    line.id
                );
                outcome.items_undelivered.push(RewardItem {
                    quantity: remaining,
                    ..line.clone()
                });
            }
        }

        outcome
    }
}
