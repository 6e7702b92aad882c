use bevy::prelude::*;
use crate::ecs::core::ServerConfig;
use crate::ecs::plugins::items::catalog::ItemCatalog;

/// Merge the optional item manifest over the builtin catalog.
///
/// A missing manifest is normal; a malformed one is logged and skipped so a
/// bad asset file can never take the combat pipeline down with it.
pub fn load_item_manifest(config: Res<ServerConfig>, mut catalog: ResMut<ItemCatalog>) {
    let path = &config.item_manifest;
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(_) => {
            info!(
                "no item manifest at {}, using builtin items only",
                path.display()
            );
            return;
        }
    };
    match catalog.merge_manifest(&json) {
        Ok(count) => println!(
            "📦 Merged {} item definitions from {} ({} items total)",
            count,
            path.display(),
            catalog.len()
        ),
        Err(error) => warn!(
            "ignoring malformed item manifest {}: {}",
            path.display(),
            error
        ),
    }
}
