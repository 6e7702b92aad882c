use bevy::prelude::*;
use crate::ecs::core::ServerConfig;
use crate::ecs::plugins::player::components::*;

pub fn player_spawn_system(
    mut commands: Commands,
    mut spawn_events: EventReader<PlayerSpawnEvent>,
    mut player_registry: ResMut<PlayerRegistry>,
    config: Res<ServerConfig>,
) {
    for event in spawn_events.read() {
        if player_registry.get_player_entity(event.player_id).is_some() {
            warn!("player {} is already spawned, ignoring", event.player_id);
            continue;
        }
        let entity = commands
            .spawn(PlayerBundle::new(
                event.player_id,
                event.held.as_deref(),
                &config,
            ))
            .id();
        player_registry.register_player(event.player_id, entity);
        info!(
            "spawned player {} -> {:?} (held: {:?})",
            event.player_id, entity, event.held
        );
    }
}

pub fn player_despawn_system(
    mut commands: Commands,
    mut despawn_events: EventReader<PlayerDespawnEvent>,
    mut player_registry: ResMut<PlayerRegistry>,
) {
    for event in despawn_events.read() {
        if let Some(entity) = player_registry.unregister_player(event.player_id) {
            commands.entity(entity).despawn();
            info!("despawned player {} -> {:?}", event.player_id, entity);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ecs::plugins::combat::components::Health;
    use crate::ecs::plugins::items::components::Equipment;

    fn player_app() -> App {
        let mut app = App::new();
        app.add_event::<PlayerSpawnEvent>()
            .add_event::<PlayerDespawnEvent>()
            .insert_resource(PlayerRegistry::default())
            .insert_resource(ServerConfig::default())
            .add_systems(Update, (player_spawn_system, player_despawn_system));
        app
    }

    #[test]
    fn spawn_registers_player_with_loadout() {
        let mut app = player_app();
        app.world_mut().send_event(PlayerSpawnEvent {
            player_id: 7,
            held: Some("items/dagger_basic".into()),
        });
        app.update();

        let entity = app
            .world()
            .resource::<PlayerRegistry>()
            .get_player_entity(7)
            .unwrap();
        let health = app.world().get::<Health>(entity).unwrap();
        assert_eq!(health.current, health.max);
        let equipment = app.world().get::<Equipment>(entity).unwrap();
        assert_eq!(
            equipment.active_item().map(|stack| stack.item_id.as_str()),
            Some("items/dagger_basic")
        );
    }

    #[test]
    fn duplicate_spawn_is_ignored() {
        let mut app = player_app();
        app.world_mut().send_event(PlayerSpawnEvent {
            player_id: 7,
            held: None,
        });
        app.update();
        let first = app
            .world()
            .resource::<PlayerRegistry>()
            .get_player_entity(7)
            .unwrap();

        app.world_mut().send_event(PlayerSpawnEvent {
            player_id: 7,
            held: None,
        });
        app.update();
        let second = app
            .world()
            .resource::<PlayerRegistry>()
            .get_player_entity(7)
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn despawn_unregisters_and_removes_entity() {
        let mut app = player_app();
        app.world_mut().send_event(PlayerSpawnEvent {
            player_id: 7,
            held: None,
        });
        app.update();
        let entity = app
            .world()
            .resource::<PlayerRegistry>()
            .get_player_entity(7)
            .unwrap();

        app.world_mut()
            .send_event(PlayerDespawnEvent { player_id: 7 });
        app.update();

        assert!(app
            .world()
            .resource::<PlayerRegistry>()
            .get_player_entity(7)
            .is_none());
        assert!(app.world().get::<Health>(entity).is_none());
    }
}
