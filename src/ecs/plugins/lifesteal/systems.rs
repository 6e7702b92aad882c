use bevy::prelude::*;
use crate::ecs::plugins::combat::components::{DamageEvent, Health};
use crate::ecs::plugins::items::catalog::ItemCatalog;
use crate::ecs::plugins::items::components::Equipment;
use crate::ecs::plugins::lifesteal::resolver::{
    resolve, EquipmentSource, EquippedItem, EquippedLookup,
};
use crate::ecs::plugins::lifesteal::rules::LifestealRules;

/// `EquipmentSource` backed by the live world: "living" means the entity has
/// a `Health` component, the held item comes from the active hotbar slot and
/// its categories from the item catalog.
struct WorldEquipment<'a, 'w, 's> {
    living: &'a Query<'w, 's, Option<&'static Equipment>, With<Health>>,
    catalog: &'a ItemCatalog,
}

impl EquipmentSource for WorldEquipment<'_, '_, '_> {
    fn equipped_item(&self, attacker: Entity) -> EquippedLookup<'_> {
        let Ok(equipment) = self.living.get(attacker) else {
            return EquippedLookup::NotLiving;
        };
        let Some(stack) = equipment.and_then(Equipment::active_item) else {
            return EquippedLookup::Empty;
        };
        EquippedLookup::Held(EquippedItem {
            item_id: &stack.item_id,
            categories: self.catalog.categories(&stack.item_id),
        })
    }
}

/// Heal attackers for qualifying damage they deal.
///
/// Runs once per damage event, after damage application. The heal is capped
/// at the attacker's max health here; the resolver itself never clamps.
pub fn lifesteal_system(
    mut damage_events: EventReader<DamageEvent>,
    attackers: Query<Option<&'static Equipment>, With<Health>>,
    catalog: Res<ItemCatalog>,
    rules: Res<LifestealRules>,
    mut healths: Query<&mut Health>,
) {
    for event in damage_events.read() {
        let equipment = WorldEquipment {
            living: &attackers,
            catalog: &catalog,
        };
        let heal = resolve(event, &equipment, &rules);
        if heal <= 0.0 {
            continue;
        }
        // resolve only returns a positive heal for entity-attributed damage
        let Some(attacker) = event.source.attacker() else {
            continue;
        };
        let Ok(mut health) = healths.get_mut(attacker) else {
            continue;
        };
        health.current = (health.current + heal).min(health.max);
        info!(
            "lifesteal: entity {:?} healed {:.1} from {:.1} damage ({:.1}/{:.1})",
            attacker, heal, event.amount, health.current, health.max
        );
    }
}

/// Rebuild the explicit rules from the item catalog and swap the table in one
/// assignment, so no reader can ever observe a half-populated table. Returns
/// the number of items registered. Calling it twice against an unchanged
/// catalog yields the same table.
pub fn populate_from_catalog(rules: &mut LifestealRules, catalog: &ItemCatalog) -> usize {
    let mut next = LifestealRules::default();
    for (item_id, fraction) in catalog.lifesteal_entries() {
        next.set_rule(item_id, fraction);
    }
    let count = next.len();
    *rules = next;
    count
}

/// Initial rule population, mirrored later by the admin reload command.
pub fn populate_rules_on_startup(mut rules: ResMut<LifestealRules>, catalog: Res<ItemCatalog>) {
    let count = populate_from_catalog(&mut rules, &catalog);
    println!("⚔️  Lifesteal rules populated for {} items", count);
}
