/// Errors from persistence operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The id string is not a valid ObjectId encoding.
    #[error("invalid identifier {id:?}: {reason}")]
    InvalidIdentifier { id: String, reason: String },

    /// No record with this id, or the operation matched zero records.
    #[error("blog not found: {0}")]
    NotFound(String),

    /// The record exists but does not have the blog shape.
    #[error("cannot decode blog {id}: {reason}")]
    DecodeFailure { id: String, reason: String },

    /// The store rejected a write.
    #[error("write failed: {0}")]
    WriteFailure(String),

    /// The store rejected a read.
    #[error("read failed: {0}")]
    ReadFailure(String),

    /// Connecting to or disconnecting from the store failed.
    #[error("connection error: {0}")]
    Connection(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
