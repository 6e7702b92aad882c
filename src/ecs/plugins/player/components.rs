use bevy::prelude::*;
use std::collections::HashMap;
use crate::ecs::core::ServerConfig;
use crate::ecs::plugins::combat::components::Health;
use crate::ecs::plugins::items::components::Equipment;

#[derive(Component, Debug, Clone, Copy)]
pub struct Player {
    pub id: u32,
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: Player,
    pub health: Health,
    pub equipment: Equipment,
}

impl PlayerBundle {
    pub fn new(player_id: u32, held: Option<&str>, config: &ServerConfig) -> Self {
        Self {
            player: Player { id: player_id },
            health: Health::full(config.player_max_health),
            equipment: held.map(Equipment::holding).unwrap_or_default(),
        }
    }
}

#[derive(Event)]
pub struct PlayerSpawnEvent {
    pub player_id: u32,
    /// Item id to place in the spawned player's hand, if any.
    pub held: Option<String>,
}

#[derive(Event)]
pub struct PlayerDespawnEvent {
    pub player_id: u32,
}

#[derive(Resource, Default)]
pub struct PlayerRegistry {
    pub players: HashMap<u32, Entity>,
}

impl PlayerRegistry {
    pub fn register_player(&mut self, player_id: u32, entity: Entity) {
        self.players.insert(player_id, entity);
    }

    pub fn unregister_player(&mut self, player_id: u32) -> Option<Entity> {
        self.players.remove(&player_id)
    }

    pub fn get_player_entity(&self, player_id: u32) -> Option<Entity> {
        self.players.get(&player_id).copied()
    }
}
