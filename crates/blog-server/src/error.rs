use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

use blog_protocol::{ErrorKind, ErrorResponse, Operation};
use blog_store::StoreError;

/// Process-level failures of configuring, binding or serving, and of
/// closing the store.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Failure of a single operation, as returned to the caller.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{op} failed ({kind}): {message}")]
pub struct ServiceError {
    pub op: Operation,
    pub kind: ErrorKind,
    pub message: String,
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    pub fn new(op: Operation, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            op,
            kind,
            message: message.into(),
        }
    }

    /// A request body that could not be read as the operation's message.
    pub fn rejected(op: Operation, rejection: JsonRejection) -> Self {
        Self::new(op, ErrorKind::InvalidRequest, rejection.body_text())
    }

    /// Translate a store outcome into the caller-facing taxonomy.
    pub fn from_store(op: Operation, err: StoreError) -> Self {
        let kind = match &err {
            StoreError::InvalidIdentifier { .. } => ErrorKind::InvalidIdentifier,
            StoreError::NotFound(_) => ErrorKind::NotFound,
            StoreError::DecodeFailure { .. } => ErrorKind::DecodeFailure,
            StoreError::WriteFailure(_) => ErrorKind::StoreWriteFailure,
            StoreError::ReadFailure(_) => ErrorKind::StoreReadFailure,
            StoreError::Connection(_) => match op {
                Operation::ReadBlog => ErrorKind::StoreReadFailure,
                _ => ErrorKind::StoreWriteFailure,
            },
        };
        Self::new(op, kind, err.to_string())
    }

    /// HTTP status for this failure. A malformed id on read is reported as
    /// not found since no blog can have it.
    pub fn status(&self) -> StatusCode {
        match (self.kind, self.op) {
            (ErrorKind::InvalidRequest, _) => StatusCode::BAD_REQUEST,
            (ErrorKind::InvalidIdentifier, Operation::ReadBlog) => StatusCode::NOT_FOUND,
            (ErrorKind::InvalidIdentifier, _) => StatusCode::BAD_REQUEST,
            (ErrorKind::NotFound, _) => StatusCode::NOT_FOUND,
            (ErrorKind::DecodeFailure, _)
            | (ErrorKind::StoreWriteFailure, _)
            | (ErrorKind::StoreReadFailure, _) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(
                op = %self.op,
                kind = %self.kind,
                message = %self.message,
                "operation failed"
            );
        } else {
            warn!(
                op = %self.op,
                kind = %self.kind,
                message = %self.message,
                "operation rejected"
            );
        }
        let body = ErrorResponse::new(self.kind, self.message);
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_translate_one_to_one() {
        let cases = [
            (
                StoreError::InvalidIdentifier {
                    id: "x".into(),
                    reason: "bad".into(),
                },
                ErrorKind::InvalidIdentifier,
            ),
            (StoreError::NotFound("x".into()), ErrorKind::NotFound),
            (
                StoreError::DecodeFailure {
                    id: "x".into(),
                    reason: "bad".into(),
                },
                ErrorKind::DecodeFailure,
            ),
            (StoreError::WriteFailure("w".into()), ErrorKind::StoreWriteFailure),
            (StoreError::ReadFailure("r".into()), ErrorKind::StoreReadFailure),
        ];
        for (err, kind) in cases {
            assert_eq!(ServiceError::from_store(Operation::UpdateBlog, err).kind, kind);
        }
    }

    #[test]
    fn connection_error_follows_operation() {
        let lost = || StoreError::Connection("c".into());
        let read = ServiceError::from_store(Operation::ReadBlog, lost());
        assert_eq!(read.kind, ErrorKind::StoreReadFailure);
        let write = ServiceError::from_store(Operation::DeleteBlog, lost());
        assert_eq!(write.kind, ErrorKind::StoreWriteFailure);
    }

    #[test]
    fn invalid_identifier_status_depends_on_operation() {
        let read = ServiceError::new(Operation::ReadBlog, ErrorKind::InvalidIdentifier, "bad");
        assert_eq!(read.status(), StatusCode::NOT_FOUND);
        let update =
            ServiceError::new(Operation::UpdateBlog, ErrorKind::InvalidIdentifier, "bad");
        assert_eq!(update.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn store_failures_are_server_errors() {
        let kinds = [
            ErrorKind::DecodeFailure,
            ErrorKind::StoreWriteFailure,
            ErrorKind::StoreReadFailure,
        ];
        for kind in kinds {
            let err = ServiceError::new(Operation::CreateBlog, kind, "boom");
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn invalid_request_is_bad_request_for_every_operation() {
        for op in Operation::ALL {
            let err = ServiceError::new(op, ErrorKind::InvalidRequest, "bad body");
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn display_names_operation_and_kind() {
        let err =
            ServiceError::new(Operation::DeleteBlog, ErrorKind::NotFound, "blog not found: x");
        assert_eq!(err.to_string(), "DeleteBlog failed (not_found): blog not found: x");
    }
}
