pub mod core;
pub mod plugins;

pub use self::core::CorePlugin;
pub use plugins::{AdminPlugin, CombatPlugin, ItemsPlugin, LifestealPlugin, PlayerPlugin};
