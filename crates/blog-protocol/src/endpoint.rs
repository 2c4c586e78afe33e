use std::fmt;

use serde::{Deserialize, Serialize};

/// HTTP paths of the blog service. Every operation is a `POST` with a JSON body.
pub mod endpoints {
    pub const CREATE_BLOG: &str = "/v1/blog/create";
    pub const READ_BLOG: &str = "/v1/blog/read";
    pub const UPDATE_BLOG: &str = "/v1/blog/update";
    pub const DELETE_BLOG: &str = "/v1/blog/delete";
    pub const HEALTH: &str = "/v1/health";
}

/// The four remote operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    CreateBlog,
    ReadBlog,
    UpdateBlog,
    DeleteBlog,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::CreateBlog,
        Operation::ReadBlog,
        Operation::UpdateBlog,
        Operation::DeleteBlog,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Self::CreateBlog => endpoints::CREATE_BLOG,
            Self::ReadBlog => endpoints::READ_BLOG,
            Self::UpdateBlog => endpoints::UPDATE_BLOG,
            Self::DeleteBlog => endpoints::DELETE_BLOG,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateBlog => "CreateBlog",
            Self::ReadBlog => "ReadBlog",
            Self::UpdateBlog => "UpdateBlog",
            Self::DeleteBlog => "DeleteBlog",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Health check response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}
