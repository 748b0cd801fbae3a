//! Wire-side input bundles
//!
//! Mirrors the message shapes the transport layer delivers: three IPC
//! buffers, an optional styler bundle, and an outer frame carrying the
//! requested display size. Field names follow the wire (camelCase for
//! `displayValues`).

use serde::{Deserialize, Serialize};

/// Style metadata accompanying a table payload
///
/// Arrives as a unit or not at all; `display_values` is itself an Arrow IPC
/// buffer of pre-formatted strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylerPayload {
    pub caption: Option<String>,
    #[serde(rename = "displayValues")]
    pub display_values: Vec<u8>,
    pub styles: Option<String>,
    pub uuid: String,
}

/// The three IPC buffers plus optional style metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePayload {
    pub data: Vec<u8>,
    pub index: Vec<u8>,
    pub columns: Vec<u8>,
    #[serde(default)]
    pub styler: Option<StylerPayload>,
}

/// A table payload with its requested display size
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FramePayload {
    pub data: TablePayload,
    pub height: String,
    pub width: String,
}
