//! Foundation types for the blog service.
//!
//! Every other crate in the workspace depends on `blog-types`.
//!
//! # Key Types
//!
//! - [`Blog`] -- the wire representation of a blog, always carrying its id
//!   once it has been stored
//! - [`BlogDraft`] -- a blog that has not been stored yet (no id)

pub mod blog;

pub use blog::{Blog, BlogDraft};
