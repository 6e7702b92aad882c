/*!
The lifesteal decision procedure.

`resolve` is a pure, total function from a damage event plus the attacker's
held item to a heal amount. Every inapplicable input degrades to a zero heal;
nothing in here can fail, block, or panic, because it sits on the per-hit hot
path of the damage pipeline.
*/

use bevy::prelude::*;
use crate::ecs::plugins::combat::components::DamageEvent;
use crate::ecs::plugins::lifesteal::rules::{LifestealRules, DEFAULT_DAGGER_LIFESTEAL};

/// Borrowed view of what an attacker is holding.
#[derive(Debug, Clone, Copy)]
pub struct EquippedItem<'a> {
    pub item_id: &'a str,
    pub categories: &'a [String],
}

/// Result of asking the host world what an entity holds.
#[derive(Debug, Clone, Copy)]
pub enum EquippedLookup<'a> {
    /// The host cannot answer equipment queries at all.
    Unsupported,
    /// The reference does not resolve to a living entity.
    NotLiving,
    /// A living entity holding nothing.
    Empty,
    Held(EquippedItem<'a>),
}

/// The one capability the resolver needs from the host world.
pub trait EquipmentSource {
    fn equipped_item(&self, attacker: Entity) -> EquippedLookup<'_>;
}

/// Compute the heal an attacker earns from a damage event.
///
/// Checks run in a fixed order, each an early exit to a zero heal:
/// cancelled event, non-positive damage, damage not attributable to an
/// entity, attacker not living (or equipment unsupported), nothing held.
/// The fraction is then the explicit rule for the item id, else the item's
/// category default, else the dagger-substring heuristic, else zero.
///
/// The returned heal is unrounded and unclamped; capping against the
/// attacker's max health is the applicator's job.
pub fn resolve(
    event: &DamageEvent,
    equipment: &impl EquipmentSource,
    rules: &LifestealRules,
) -> f32 {
    if event.cancelled {
        return 0.0;
    }
    if event.amount <= 0.0 {
        return 0.0;
    }
    let Some(attacker) = event.source.attacker() else {
        return 0.0;
    };
    let item = match equipment.equipped_item(attacker) {
        EquippedLookup::Unsupported | EquippedLookup::NotLiving | EquippedLookup::Empty => {
            return 0.0;
        }
        EquippedLookup::Held(item) => item,
    };
    let fraction = rules
        .rule(item.item_id)
        .or_else(|| rules.category_default(item.categories))
        .or_else(|| id_mentions_dagger(item.item_id).then_some(DEFAULT_DAGGER_LIFESTEAL))
        .unwrap_or(0.0);
    if fraction <= 0.0 {
        return 0.0;
    }
    let heal = event.amount * fraction;
    if heal <= 0.0 {
        return 0.0;
    }
    heal
}

/// Last-resort heuristic for dagger-family items that never made it into the
/// catalog: any id mentioning "dagger" gets the stock dagger fraction.
fn id_mentions_dagger(item_id: &str) -> bool {
    item_id.to_ascii_lowercase().contains("dagger")
}
