use bevy::prelude::*;
use crate::ecs::plugins::lifesteal::rules::LifestealRules;
use crate::ecs::plugins::lifesteal::systems::*;

pub struct LifestealPlugin;

impl Plugin for LifestealPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LifestealRules>()
            .add_systems(Startup, populate_rules_on_startup)
            .add_systems(
                FixedUpdate,
                lifesteal_system.after(crate::ecs::plugins::combat::systems::apply_damage_system),
            );
    }
}
