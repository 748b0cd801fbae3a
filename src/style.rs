//! Decoded style metadata

use crate::error::DecodeError;
use crate::model::ColumnarTable;
use crate::payload::StylerPayload;

/// Decoded per-view style metadata
///
/// Present as a whole or not at all: a view without a styler renders raw
/// data values and generates ids with an empty uuid segment.
#[derive(Debug, Clone)]
pub struct Styler {
    caption: Option<String>,
    display_values: ColumnarTable,
    styles: Option<String>,
    uuid: String,
}

impl Styler {
    /// Decode a styler bundle, parsing its display-values buffer
    pub fn from_payload(payload: &StylerPayload) -> Result<Self, DecodeError> {
        Ok(Self {
            caption: payload.caption.clone(),
            display_values: ColumnarTable::decode(&payload.display_values)?,
            styles: payload.styles.clone(),
            uuid: payload.uuid.clone(),
        })
    }

    /// Table caption, if one was supplied
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Pre-formatted display values, used in place of raw data values
    pub fn display_values(&self) -> &ColumnarTable {
        &self.display_values
    }

    /// Free-form style text
    pub fn styles(&self) -> Option<&str> {
        self.styles.as_deref()
    }

    /// Identifier namespacing generated cell ids
    pub fn uuid(&self) -> &str {
        &self.uuid
    }
}
