//! Crate error type.
//!
//! Every fallible operation in this crate returns [`Error`] instead of
//! swallowing the failure, so callers can tell a missing file apart
//! from a corrupt one or a bad argument.

use thiserror::Error;

/// Errors that can occur in keyboard encoding, storage, or bot calls.
#[derive(Error, Debug)]
pub enum Error {
    /// Standard I/O error (store file missing, unreadable, unwritable).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error during JSON serialization or deserialization of a store file.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored keyboard record could not be parsed.
    #[error("malformed keyboard record {record:?}: {reason}")]
    MalformedRecord {
        /// The offending record text.
        record: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An argument outside the accepted range (zero page size, label
    /// containing a reserved delimiter, and similar).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation needs a debug bot but none was configured.
    #[error("no debug bot configured")]
    NoDebugBot,

    /// Error returned by the Telegram API.
    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
}

impl Error {
    pub(crate) fn malformed(record: &str, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            record: record.to_string(),
            reason: reason.into(),
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
