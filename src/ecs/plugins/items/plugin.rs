use bevy::prelude::*;
use crate::ecs::plugins::items::catalog::ItemCatalog;
use crate::ecs::plugins::items::systems::load_item_manifest;

pub struct ItemsPlugin;

impl Plugin for ItemsPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ItemCatalog::builtin())
            // PreStartup so the catalog is complete before rule population runs
            .add_systems(PreStartup, load_item_manifest);
    }
}
