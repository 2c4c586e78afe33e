use serde::{Deserialize, Serialize};

use blog_types::{Blog, BlogDraft};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlogRequest {
    pub blog: BlogDraft,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateBlogResponse {
    pub blog: Blog,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadBlogRequest {
    pub blog_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadBlogResponse {
    pub blog: Blog,
}

/// Full replacement of a blog's fields. Omitted fields are written empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBlogRequest {
    pub blog: Blog,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateBlogResponse {
    pub blog: Blog,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBlogRequest {
    pub blog_id: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteBlogResponse {
    pub blog_id: String,
}

impl CreateBlogRequest {
    pub fn new(blog: BlogDraft) -> Self {
        Self { blog }
    }
}

impl ReadBlogRequest {
    pub fn new(blog_id: impl Into<String>) -> Self {
        Self {
            blog_id: blog_id.into(),
        }
    }
}

impl UpdateBlogRequest {
    pub fn new(blog: Blog) -> Self {
        Self { blog }
    }
}

impl DeleteBlogRequest {
    pub fn new(blog_id: impl Into<String>) -> Self {
        Self {
            blog_id: blog_id.into(),
        }
    }
}
