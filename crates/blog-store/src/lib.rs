//! Persistence adapter for the blog service.
//!
//! Blogs live in a single MongoDB collection, one document per blog:
//!
//! ```text
//! { _id: ObjectId, author_id: string, content: string, title: string }
//! ```
//!
//! # Layers
//!
//! - [`mapper`] -- translates between [`blog_types::Blog`] and the persisted
//!   [`BlogDocument`], and between the 24-hex-digit string id and the
//!   native [`NativeId`]
//! - [`BlogStore`] -- one store call per operation, with store outcomes
//!   translated into [`StoreError`]
//!
//! # Backends
//!
//! - [`MongoBlogStore`] -- the production backend
//! - [`InMemoryBlogStore`] -- raw BSON documents in a `HashMap`, for tests
//!
//! # Rules
//!
//! 1. Every call performs exactly one operation against the store. No
//!    retries, buffering or batching.
//! 2. Zero matched/deleted records is `NotFound`, never a write failure.
//! 3. Store errors are always translated, never passed through raw.

pub mod config;
pub mod document;
pub mod error;
pub mod mapper;
pub mod memory;
pub mod mongo;
pub mod traits;

pub use config::MongoConfig;
pub use document::{BlogDocument, BlogFields, IdFilter, SetFields};
pub use error::{StoreError, StoreResult};
pub use mapper::NativeId;
pub use memory::InMemoryBlogStore;
pub use mongo::MongoBlogStore;
pub use traits::BlogStore;
