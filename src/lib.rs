//! arrowgrid - Grid view adapter for Arrow-encoded tabular data
//!
//! Decodes three Arrow IPC buffers (data, row index, column index) plus
//! optional style metadata, and answers per-coordinate cell queries for a
//! rendering layer.

pub mod error;
pub mod model;
pub mod payload;
pub mod style;
pub mod view;

pub use error::DecodeError;
pub use model::{CellValue, ColumnarTable};
pub use payload::{FramePayload, StylerPayload, TablePayload};
pub use style::Styler;
pub use view::{Cell, CellKind, TableView};
