//! Error types for buffer decoding

use thiserror::Error;

/// Failure to decode a supplied byte buffer into a columnar table
///
/// Raised only during view construction; every query on a constructed view
/// is total and never returns an error.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The buffer could not be parsed as an Arrow IPC stream
    #[error("invalid Arrow IPC stream: {0}")]
    Ipc(#[from] arrow::error::ArrowError),
}
