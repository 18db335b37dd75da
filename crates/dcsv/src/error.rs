use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[cfg(feature = "json")]
    #[error("serde_json error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[error("invalid delimiter configuration: {message}")]
    Config { message: String },

    #[error("position [{row},{column}] is beyond the largest addressable index")]
    IndexOverflow { row: usize, column: usize },

    #[error("invalid position [{row},{column}]: table is {rows}x{columns}")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Whether this error came from a [`get`](crate::CellStore::get) outside the table extents.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Error::OutOfRange { .. })
    }
}

pub type Result<T> = core::result::Result<T, Error>;
