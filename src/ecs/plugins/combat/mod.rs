pub mod components;
pub mod plugin;
pub mod systems;

pub use components::{AttackEvent, DamageEvent, DamageSource, Health};
pub use plugin::CombatPlugin;
