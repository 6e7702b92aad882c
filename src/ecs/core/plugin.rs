use bevy::prelude::*;
use crate::ecs::core::resources::ServerConfig;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ServerConfig::default());
    }
}
