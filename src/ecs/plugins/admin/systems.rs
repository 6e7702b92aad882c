use bevy::prelude::*;
use tokio_tungstenite::{accept_async, tungstenite::Message};
use tokio::net::{TcpListener, TcpStream};
use futures_util::{SinkExt, StreamExt};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use crossbeam_channel::Sender;
use std::thread;

use crate::ecs::plugins::admin::components::*;
use crate::ecs::plugins::combat::components::AttackEvent;
use crate::ecs::plugins::items::catalog::ItemCatalog;
use crate::ecs::plugins::lifesteal::rules::LifestealRules;
use crate::ecs::plugins::lifesteal::systems::populate_from_catalog;
use crate::ecs::plugins::player::components::{
    PlayerDespawnEvent, PlayerRegistry, PlayerSpawnEvent,
};

static NEXT_CLIENT_ID: AtomicU32 = AtomicU32::new(1);

// Setup admin WebSocket server in a dedicated async runtime
pub fn setup_admin_server(connections: Res<AdminConnections>, port: u16) {
    let clients = connections.clients.clone();
    let command_sender = connections.command_sender.clone();
    let reply_receiver = connections.reply_receiver.clone();

    // Spawn a dedicated thread for the admin server
    thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();
            println!("🛠️  Admin channel listening on ws://localhost:{}", port);

            // Spawn task to route ECS replies back to the issuing operator
            let clients_for_replies = clients.clone();
            tokio::spawn(async move {
                loop {
                    // Use try_recv to avoid blocking the async runtime
                    match reply_receiver.try_recv() {
                        Ok((client_id, response)) => {
                            let json = serde_json::to_string(&response).unwrap_or_default();
                            let clients = clients_for_replies.lock().await;
                            if let Some(sender) = clients.get(&client_id) {
                                let _ = sender.send(Message::Text(json.into()));
                            }
                        }
                        Err(_) => {
                            // No replies pending, sleep briefly to avoid busy waiting
                            tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
                        }
                    }
                }
            });

            // Accept incoming operator connections
            while let Ok((stream, addr)) = listener.accept().await {
                println!("🛠️  Admin connection from: {}", addr);
                tokio::spawn(handle_operator(
                    stream,
                    clients.clone(),
                    command_sender.clone(),
                ));
            }
        });
    });
}

// Handle an individual operator connection
async fn handle_operator(
    stream: TcpStream,
    clients: Arc<Mutex<HashMap<u32, tokio::sync::mpsc::UnboundedSender<Message>>>>,
    command_sender: Sender<(u32, AdminCommand)>,
) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            println!("❌ Admin handshake failed: {}", e);
            return;
        }
    };

    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();

    let client_id = NEXT_CLIENT_ID.fetch_add(1, Ordering::Relaxed);
    clients.lock().await.insert(client_id, tx.clone());
    println!("✅ Admin client {} connected", client_id);

    // Spawn task to push outgoing frames for this client
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if ws_sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    // Handle incoming frames
    while let Some(msg) = ws_receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => match serde_json::from_str::<AdminCommand>(&text) {
                Ok(command) => {
                    let _ = command_sender.send((client_id, command));
                }
                Err(error) => {
                    // Malformed commands are answered directly, never forwarded
                    let response = AdminResponse::error(format!("invalid command: {}", error));
                    let json = serde_json::to_string(&response).unwrap_or_default();
                    let _ = tx.send(Message::Text(json.into()));
                }
            },
            Ok(Message::Close(_)) => {
                println!("🔌 Admin client {} disconnected", client_id);
                break;
            }
            Ok(Message::Ping(data)) => {
                let _ = tx.send(Message::Pong(data));
            }
            _ => {}
        }
    }

    // Clean up connection
    clients.lock().await.remove(&client_id);
    println!("🧹 Cleaned up admin client {}", client_id);
}

/// Execute queued operator commands against the world and queue replies.
pub fn admin_command_system(
    connections: Res<AdminConnections>,
    mut rules: ResMut<LifestealRules>,
    catalog: Res<ItemCatalog>,
    registry: Res<PlayerRegistry>,
    mut spawn_events: EventWriter<PlayerSpawnEvent>,
    mut despawn_events: EventWriter<PlayerDespawnEvent>,
    mut attack_events: EventWriter<AttackEvent>,
) {
    while let Ok((client_id, command)) = connections.incoming_commands.try_recv() {
        let response = match command {
            AdminCommand::ReloadLifesteal => {
                let count = populate_from_catalog(&mut rules, &catalog);
                info!("admin reload: {} lifesteal rules from item catalog", count);
                AdminResponse::ok(format!("reloaded lifesteal rules for {} items", count))
            }
            AdminCommand::SetLifesteal { item_id, fraction } => {
                if item_id.is_empty() {
                    AdminResponse::error("item_id must not be empty")
                } else {
                    rules.set_rule(&item_id, fraction);
                    AdminResponse::ok(format!(
                        "set lifesteal for {} -> {:?}",
                        item_id,
                        rules.rule(&item_id)
                    ))
                }
            }
            AdminCommand::ClearLifesteal => {
                rules.clear();
                AdminResponse::ok("cleared all explicit lifesteal rules")
            }
            AdminCommand::Spawn { player_id, held } => {
                spawn_events.send(PlayerSpawnEvent { player_id, held });
                AdminResponse::ok(format!("spawn queued for player {}", player_id))
            }
            AdminCommand::Despawn { player_id } => {
                despawn_events.send(PlayerDespawnEvent { player_id });
                AdminResponse::ok(format!("despawn queued for player {}", player_id))
            }
            AdminCommand::Attack { attacker, target } => {
                match (
                    registry.get_player_entity(attacker),
                    registry.get_player_entity(target),
                ) {
                    (Some(attacker), Some(target)) => {
                        attack_events.send(AttackEvent { attacker, target });
                        AdminResponse::ok("attack queued")
                    }
                    _ => AdminResponse::error("unknown attacker or target player id"),
                }
            }
        };
        let _ = connections.reply_sender.send((client_id, response));
    }
}
