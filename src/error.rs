//! Error types.
//!
//! Container operations never fail: an empty deque or a tag miss is reported
//! through `Option`. The errors here cover the conversion edges of the
//! crate: parsing a render format, decoding a value kind or a raw datum, and
//! loading configuration.

use crate::value::ValueKind;
use thiserror::Error;

/// Errors produced at the conversion boundaries of the crate.
#[derive(Debug, Error)]
pub enum DequeError {
    /// The render format name is not `json` or `text`.
    #[error("unknown render format: {0:?}")]
    UnknownFormat(String),
    /// The numeric value kind code does not name a [`ValueKind`].
    #[error("unknown value kind code: {0}")]
    UnknownKind(u8),
    /// The kind owns heap data and cannot be built from a word-sized datum.
    #[error("value kind {kind} cannot be built from a raw datum")]
    NotPrimitive {
        /// The requested kind.
        kind: ValueKind,
    },
    /// The datum does not fit in the requested kind.
    #[error("datum {datum:#x} is out of range for {kind}")]
    DatumOutOfRange {
        /// The requested kind.
        kind: ValueKind,
        /// The rejected datum.
        datum: u64,
    },
    /// The configuration document could not be parsed.
    #[error("invalid deque configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl DequeError {
    /// Returns `true` if this error came from configuration loading.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type for fallible conversions.
pub type Result<T> = std::result::Result<T, DequeError>;
