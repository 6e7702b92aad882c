pub mod plugin;
pub mod resolver;
pub mod rules;
pub mod systems;

pub use plugin::LifestealPlugin;
pub use resolver::{resolve, EquipmentSource, EquippedItem, EquippedLookup};
pub use rules::LifestealRules;
