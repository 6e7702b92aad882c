pub mod admin;
pub mod combat;
pub mod items;
pub mod lifesteal;
pub mod player;

pub use admin::AdminPlugin;
pub use combat::CombatPlugin;
pub use items::ItemsPlugin;
pub use lifesteal::LifestealPlugin;
pub use player::PlayerPlugin;
