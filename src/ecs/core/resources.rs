use bevy::prelude::*;
use std::path::PathBuf;

#[derive(Resource, Debug, Clone)]
pub struct ServerConfig {
    /// Optional JSON item manifest merged over the builtin catalog at startup.
    pub item_manifest: PathBuf,
    /// Health every freshly spawned player starts with.
    pub player_max_health: f32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            item_manifest: PathBuf::from("assets/items.json"),
            player_max_health: 100.0,
        }
    }
}
