//! HTTP server for the blog service.
//!
//! Serves the four blog operations as JSON-over-HTTP calls, backed by any
//! [`blog_store::BlogStore`].

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod service;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult, ServiceError, ServiceResult};
pub use server::{shutdown_signal, BlogServer};
pub use service::BlogService;
