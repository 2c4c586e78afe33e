use async_trait::async_trait;

use crate::document::{BlogDocument, BlogFields};
use crate::error::StoreResult;
use crate::mapper::NativeId;

/// Single-collection persistence for blogs.
///
/// Implementations must satisfy these invariants:
/// - Each call performs exactly one operation against the store, with no
///   internal retry.
/// - Operations on one id are atomic; there is no multi-document
///   transaction and concurrent updates are last-write-wins.
/// - Implementations hold no state besides the store handle and must be
///   safe to share across concurrent requests.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// Short backend name for logs.
    fn backend(&self) -> &'static str;

    /// Insert a new blog and return the id the store assigned.
    ///
    /// Any underlying error is `WriteFailure`.
    async fn insert(&self, document: &BlogDocument) -> StoreResult<NativeId>;

    /// Fetch a blog by id.
    ///
    /// Returns `NotFound` when no record exists, `ReadFailure` when the store
    /// rejects the read, and `DecodeFailure` when the record is not a blog.
    async fn find_by_id(&self, id: &NativeId) -> StoreResult<BlogDocument>;

    /// Replace the mutable fields of a blog.
    ///
    /// Returns `NotFound` when zero records matched and `WriteFailure` when
    /// the store rejects the write.
    async fn update_by_id(&self, id: &NativeId, fields: &BlogFields) -> StoreResult<()>;

    /// Permanently remove a blog.
    ///
    /// Returns `NotFound` when zero records were deleted and `WriteFailure`
    /// when the store rejects the write.
    async fn delete_by_id(&self, id: &NativeId) -> StoreResult<()>;

    /// Release the store connection. Called once, after the server has
    /// stopped serving.
    async fn close(&self) -> StoreResult<()> {
        Ok(())
    }
}
