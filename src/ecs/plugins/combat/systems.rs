use bevy::prelude::*;
use crate::ecs::plugins::combat::components::*;
use crate::ecs::plugins::items::catalog::ItemCatalog;
use crate::ecs::plugins::items::components::Equipment;

/// Damage dealt with nothing (or nothing known) in hand.
pub const UNARMED_DAMAGE: f32 = 2.0;

/// Turn attack intents into damage events using the attacker's held weapon.
pub fn attack_system(
    mut attack_events: EventReader<AttackEvent>,
    mut damage_events: EventWriter<DamageEvent>,
    attackers: Query<Option<&Equipment>, With<Health>>,
    catalog: Res<ItemCatalog>,
) {
    for event in attack_events.read() {
        // Attacks from despawned or non-living entities just fizzle
        let Ok(equipment) = attackers.get(event.attacker) else {
            continue;
        };
        let amount = equipment
            .and_then(|equipment| equipment.active_item())
            .and_then(|stack| catalog.get(&stack.item_id))
            .map(|def| def.stats.damage)
            .unwrap_or(UNARMED_DAMAGE);
        damage_events.send(DamageEvent {
            target: event.target,
            amount,
            cancelled: false,
            source: DamageSource::Entity(event.attacker),
        });
    }
}

/// Apply incoming damage to target health, floored at zero.
pub fn apply_damage_system(
    mut damage_events: EventReader<DamageEvent>,
    mut targets: Query<&mut Health>,
) {
    for event in damage_events.read() {
        if event.cancelled || event.amount <= 0.0 {
            continue;
        }
        let Ok(mut health) = targets.get_mut(event.target) else {
            continue;
        };
        health.current = (health.current - event.amount).max(0.0);
        info!(
            "entity {:?} took {:.1} damage ({:.1}/{:.1})",
            event.target, event.amount, health.current, health.max
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combat_app() -> App {
        let mut app = App::new();
        app.add_event::<AttackEvent>()
            .add_event::<DamageEvent>()
            .insert_resource(ItemCatalog::builtin())
            .add_systems(Update, (attack_system, apply_damage_system).chain());
        app
    }

    #[test]
    fn attack_deals_weapon_damage() {
        let mut app = combat_app();
        let attacker = app
            .world_mut()
            .spawn((Health::full(100.0), Equipment::holding("items/dagger_basic")))
            .id();
        let target = app.world_mut().spawn(Health::full(100.0)).id();

        app.world_mut().send_event(AttackEvent { attacker, target });
        app.update();

        // builtin dagger deals 6.0
        let health = app.world().get::<Health>(target).unwrap();
        assert_eq!(health.current, 94.0);
    }

    #[test]
    fn barehanded_attack_falls_back_to_unarmed_damage() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn(Health::full(100.0)).id();
        let target = app.world_mut().spawn(Health::full(100.0)).id();

        app.world_mut().send_event(AttackEvent { attacker, target });
        app.update();

        let health = app.world().get::<Health>(target).unwrap();
        assert_eq!(health.current, 100.0 - UNARMED_DAMAGE);
    }

    #[test]
    fn attack_from_despawned_entity_fizzles() {
        let mut app = combat_app();
        let attacker = app.world_mut().spawn(Health::full(10.0)).id();
        let target = app.world_mut().spawn(Health::full(100.0)).id();
        app.world_mut().despawn(attacker);

        app.world_mut().send_event(AttackEvent { attacker, target });
        app.update();

        let health = app.world().get::<Health>(target).unwrap();
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn cancelled_damage_leaves_health_alone() {
        let mut app = combat_app();
        let target = app.world_mut().spawn(Health::full(100.0)).id();

        app.world_mut().send_event(DamageEvent {
            target,
            amount: 50.0,
            cancelled: true,
            source: DamageSource::Environment,
        });
        app.update();

        let health = app.world().get::<Health>(target).unwrap();
        assert_eq!(health.current, 100.0);
    }

    #[test]
    fn damage_floors_at_zero() {
        let mut app = combat_app();
        let target = app.world_mut().spawn(Health::full(30.0)).id();

        app.world_mut().send_event(DamageEvent {
            target,
            amount: 500.0,
            cancelled: false,
            source: DamageSource::Environment,
        });
        app.update();

        let health = app.world().get::<Health>(target).unwrap();
        assert_eq!(health.current, 0.0);
    }
}
