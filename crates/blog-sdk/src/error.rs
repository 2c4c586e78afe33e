use thiserror::Error;

use blog_protocol::{ErrorKind, Operation};

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("invalid server url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{op} failed ({kind}, HTTP {status}): {message}")]
    Remote {
        op: Operation,
        status: u16,
        kind: ErrorKind,
        message: String,
    },

    #[error("{op} returned HTTP {status}: {body}")]
    UnexpectedStatus {
        op: Operation,
        status: u16,
        body: String,
    },
}

impl SdkError {
    /// The structured error kind, when the server sent one.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Remote { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Whether repeating the call could succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Remote { kind, .. } => kind.is_retryable(),
            Self::InvalidUrl { .. } | Self::UnexpectedStatus { .. } => false,
        }
    }
}

pub type SdkResult<T> = Result<T, SdkError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_kind() {
        let err = SdkError::Remote {
            op: Operation::ReadBlog,
            status: 404,
            kind: ErrorKind::NotFound,
            message: "blog not found: x".into(),
        };
        assert_eq!(err.kind(), Some(ErrorKind::NotFound));
        assert!(!err.is_retryable());
        assert_eq!(err.to_string(), "ReadBlog failed (not_found, HTTP 404): blog not found: x");
    }

    #[test]
    fn write_failure_is_retryable() {
        let err = SdkError::Remote {
            op: Operation::UpdateBlog,
            status: 500,
            kind: ErrorKind::StoreWriteFailure,
            message: "write failed".into(),
        };
        assert!(err.is_retryable());
    }
}
