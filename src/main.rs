/*!
# Lifesteal Game Server

A headless combat game server built with Bevy ECS (Entity Component System).

## Architecture Overview

This server uses a plugin-based architecture where each major system is implemented as a plugin:

- **CorePlugin**: Server configuration (item manifest path, spawn health)
- **ItemsPlugin**: Item catalog and equipment model (hotbar, held item, item stats)
- **PlayerPlugin**: Player lifecycle management (spawn/despawn, id registry)
- **CombatPlugin**: Attack resolution and the damage event pipeline
- **LifestealPlugin**: Heal-on-damage mechanic driven by a runtime rule table
- **AdminPlugin**: WebSocket operator channel (reload/set/clear lifesteal rules,
  spawn players, trigger attacks)

## How Lifesteal Works

1. An attack produces a `DamageEvent` attributed to the attacking entity
2. The lifesteal resolver checks the attacker's held item against the rule table
3. A matching item converts a fraction of the damage into healing for the attacker
4. Anything that doesn't qualify simply heals nothing - a bad swing never faults

Rules are populated from the item catalog at startup and can be reloaded or
overridden at runtime through the admin channel on `ws://localhost:5001`.
*/

use bevy::log::LogPlugin;
use bevy::prelude::*;

mod ecs;

use ecs::{AdminPlugin, CombatPlugin, CorePlugin, ItemsPlugin, LifestealPlugin, PlayerPlugin};

/// Main entry point for the lifesteal game server.
///
/// Startup is a single deterministic sequence: item catalog, then the lifesteal
/// rule table, then the combat/lifesteal systems, then the admin command channel.
fn main() {
    println!("🚀 Starting Lifesteal Game Server...");
    println!("⚔️  Combat mechanic: lifesteal (heal on damage dealt)");

    App::new()
        // Bevy's minimal plugins (no graphics/audio needed for server)
        .add_plugins(MinimalPlugins)
        .add_plugins(LogPlugin::default())
        // Add plugins
        .add_plugins(CorePlugin)
        .add_plugins(ItemsPlugin)
        .add_plugins(PlayerPlugin)
        .add_plugins(CombatPlugin)
        .add_plugins(LifestealPlugin)
        .add_plugins(AdminPlugin::default())
        // Simulation tick rate
        .insert_resource(Time::<Fixed>::from_hz(10.0))
        // Print operator hints once the world is up
        .add_systems(Startup, print_server_info)
        // Start the game loop
        .run();
}

/// Print startup information for operators.
fn print_server_info() {
    println!("🌍 Game world initialized!");
    println!("🛠️  Admin channel: ws://localhost:5001");
    println!();
    println!("💡 Commands are JSON, e.g.:");
    println!("   {{\"Spawn\": {{\"player_id\": 1, \"held\": \"items/dagger_basic\"}}}}");
    println!("   {{\"Attack\": {{\"attacker\": 1, \"target\": 2}}}}");
    println!("   \"ReloadLifesteal\"");
}
