use std::fmt;

use serde::{Deserialize, Serialize};

/// Failure classes a caller can see.
///
/// `NotFound` is not worth retrying; `StoreWriteFailure` and
/// `StoreReadFailure` may be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The request body could not be read as the operation's message.
    InvalidRequest,
    InvalidIdentifier,
    NotFound,
    DecodeFailure,
    StoreWriteFailure,
    StoreReadFailure,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidIdentifier => "invalid_identifier",
            Self::NotFound => "not_found",
            Self::DecodeFailure => "decode_failure",
            Self::StoreWriteFailure => "store_write_failure",
            Self::StoreReadFailure => "store_read_failure",
        }
    }

    /// Whether repeating the same request could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreWriteFailure | Self::StoreReadFailure)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of every failed operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
