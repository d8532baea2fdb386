//! StatSource - Trait and implementations for stat providers
//!
//! Every bonus a character carries (race, class, level-ups, gear) is granted
//! through a source so it shows up as tagged modifiers and can be revoked.

mod class;
mod gear;
mod race;

pub use class::{ClassBonus, LevelBonus};
pub use gear::GearSource;
pub use race::RacialBonus;

use crate::stat_block::StatBlock;
use crate::types::StatKind;

/// Trait for anything that contributes permanent modifiers to a StatBlock
pub trait StatSource: Send + Sync {
    /// Source tag written on every modifier this source grants
    fn id(&self) -> &str;

    /// Stat deltas granted by this source
    fn bonuses(&self) -> Vec<(StatKind, i32)>;

    /// Add this source's bonuses as permanent modifiers
    fn apply(&self, stats: &mut StatBlock) {
        for (kind, value) in self.bonuses() {
            stats.get_mut(kind).add_modifier(value, self.id(), None);
        }
    }

    /// Remove every modifier tagged with this source's id
    fn revoke(&self, stats: &mut StatBlock) -> usize {
        stats.remove_source(self.id())
    }
}
