use bevy::prelude::*;
use tokio_tungstenite::tungstenite::Message;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use crossbeam_channel::{Receiver, Sender};

/// Operator commands, sent as JSON text frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AdminCommand {
    /// Re-derive all explicit lifesteal rules from the item catalog.
    ReloadLifesteal,
    /// Register or overwrite the lifesteal fraction for one item id.
    SetLifesteal { item_id: String, fraction: f32 },
    /// Drop every explicit lifesteal rule.
    ClearLifesteal,
    Spawn {
        player_id: u32,
        #[serde(default)]
        held: Option<String>,
    },
    Despawn { player_id: u32 },
    Attack { attacker: u32, target: u32 },
}

/// Reply to the issuing operator, also a JSON text frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminResponse {
    pub ok: bool,
    pub message: String,
}

impl AdminResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Channels between the ECS and the admin websocket thread.
#[derive(Resource)]
pub struct AdminConnections {
    pub clients: Arc<Mutex<HashMap<u32, tokio::sync::mpsc::UnboundedSender<Message>>>>,
    pub incoming_commands: Receiver<(u32, AdminCommand)>,
    pub command_sender: Sender<(u32, AdminCommand)>,
    pub reply_sender: Sender<(u32, AdminResponse)>,
    pub reply_receiver: Receiver<(u32, AdminResponse)>,
}

impl Default for AdminConnections {
    fn default() -> Self {
        let (command_tx, command_rx) = crossbeam_channel::unbounded();
        let (reply_tx, reply_rx) = crossbeam_channel::unbounded();
        Self {
            clients: Arc::new(Mutex::new(HashMap::new())),
            incoming_commands: command_rx,
            command_sender: command_tx,
            reply_sender: reply_tx,
            reply_receiver: reply_rx,
        }
    }
}
