//! Client SDK for the blog service.
//!
//! [`BlogClient`] issues the four remote operations and returns every
//! failure as an [`SdkError`]; what to do about it is the caller's call.

pub mod client;
pub mod error;

pub use client::BlogClient;
pub use error::{SdkError, SdkResult};

// Re-export key types
pub use blog_protocol::{ErrorKind, Operation};
pub use blog_types::{Blog, BlogDraft};
