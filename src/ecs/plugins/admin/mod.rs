pub mod components;
pub mod systems;

use bevy::prelude::*;
use components::AdminConnections;
use systems::{admin_command_system, setup_admin_server};

/// WebSocket operator channel: lifesteal rule management plus a handful of
/// world commands for exercising the combat pipeline.
pub struct AdminPlugin {
    pub port: u16,
}

impl Default for AdminPlugin {
    fn default() -> Self {
        Self { port: 5001 }
    }
}

impl Plugin for AdminPlugin {
    fn build(&self, app: &mut App) {
        let port = self.port;
        app.insert_resource(AdminConnections::default())
            .add_systems(Startup, move |connections: Res<AdminConnections>| {
                setup_admin_server(connections, port);
            })
            .add_systems(
                FixedUpdate,
                admin_command_system
                    .before(crate::ecs::plugins::player::systems::player_spawn_system),
            );
    }
}
