use bevy::prelude::*;
use crate::ecs::plugins::combat::components::{AttackEvent, DamageEvent};
use crate::ecs::plugins::combat::systems::*;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AttackEvent>()
            .add_event::<DamageEvent>()
            .add_systems(FixedUpdate, (attack_system, apply_damage_system).chain());
    }
}
