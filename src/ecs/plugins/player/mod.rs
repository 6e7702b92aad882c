pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{Player, PlayerDespawnEvent, PlayerRegistry, PlayerSpawnEvent};
pub use plugin::PlayerPlugin;
