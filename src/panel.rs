//! Side-panel toolbar controls. The panel itself is rendered by the host;
//! controls here only post structured messages back to it.

use crate::utils::error::{Result, ZosmfError};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Message envelope posted to the host process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelMessage {
    pub command: String,
    pub attrs: MessageAttrs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAttrs {
    #[serde(rename = "type")]
    pub item_type: String,
}

/// Channel the host hands to panel controls for posting messages. Sends are
/// fire-and-forget; no acknowledgement comes back.
pub trait HostChannel: Send + Sync {
    fn post_message(&self, message: PanelMessage) -> Result<()>;
}

/// [`HostChannel`] backed by an unbounded tokio channel.
#[derive(Debug, Clone)]
pub struct MpscHostChannel {
    tx: mpsc::UnboundedSender<PanelMessage>,
}

impl MpscHostChannel {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<PanelMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl HostChannel for MpscHostChannel {
    fn post_message(&self, message: PanelMessage) -> Result<()> {
        self.tx
            .send(message)
            .map_err(|_| ZosmfError::ResponseError {
                message: "host channel is closed".to_string(),
            })
    }
}

/// Toolbar button that asks the host to add a new item of a fixed type.
#[derive(Debug, Clone)]
pub struct AddItemButton {
    item_type: String,
}

impl AddItemButton {
    pub fn new(item_type: impl Into<String>) -> Self {
        Self {
            item_type: item_type.into(),
        }
    }

    pub fn item_type(&self) -> &str {
        &self.item_type
    }

    /// Post the add-item message for this button's type.
    pub fn click(&self, channel: &dyn HostChannel) -> Result<()> {
        channel.post_message(PanelMessage {
            command: "add-item".to_string(),
            attrs: MessageAttrs {
                item_type: self.item_type.clone(),
            },
        })
    }
}
