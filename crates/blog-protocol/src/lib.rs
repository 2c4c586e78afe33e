//! Wire protocol for the blog service.
//!
//! Defines the request and response messages of the four operations, the
//! HTTP paths they are served on, and the structured error body returned
//! on failure.

pub mod endpoint;
pub mod error;
pub mod message;

pub use endpoint::{endpoints, HealthResponse, Operation};
pub use error::{ErrorKind, ErrorResponse};
pub use message::{
    CreateBlogRequest, CreateBlogResponse, DeleteBlogRequest, DeleteBlogResponse,
    ReadBlogRequest, ReadBlogResponse, UpdateBlogRequest, UpdateBlogResponse,
};
