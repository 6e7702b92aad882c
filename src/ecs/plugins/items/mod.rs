pub mod catalog;
pub mod components;
pub mod plugin;
pub mod systems;

pub use catalog::{ItemCatalog, ItemDef, ItemStats};
pub use components::{Equipment, ItemStack};
pub use plugin::ItemsPlugin;
