use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use blog_protocol::{
    endpoints, CreateBlogRequest, CreateBlogResponse, DeleteBlogRequest, DeleteBlogResponse,
    ErrorResponse, HealthResponse, Operation, ReadBlogRequest, ReadBlogResponse,
    UpdateBlogRequest, UpdateBlogResponse,
};
use blog_types::{Blog, BlogDraft};

use crate::error::{SdkError, SdkResult};

/// Remote client for the blog service.
///
/// Cheap to clone; clones share one connection pool.
#[derive(Clone, Debug)]
pub struct BlogClient {
    http: Client,
    base_url: Url,
}

impl BlogClient {
    /// Client for the server at `base_url`, e.g. `http://127.0.0.1:50051`.
    pub fn new(base_url: &str) -> SdkResult<Self> {
        Self::with_http_client(Client::new(), base_url)
    }

    /// Use a preconfigured `reqwest` client (timeouts, TLS, proxies).
    pub fn with_http_client(http: Client, base_url: &str) -> SdkResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| SdkError::InvalidUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(SdkError::InvalidUrl {
                url: base_url.to_string(),
                reason: "not a base url".into(),
            });
        }
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Create a blog; returns it with its assigned id.
    pub async fn create_blog(&self, draft: BlogDraft) -> SdkResult<Blog> {
        let response: CreateBlogResponse = self
            .call(Operation::CreateBlog, &CreateBlogRequest::new(draft))
            .await?;
        Ok(response.blog)
    }

    pub async fn read_blog(&self, blog_id: &str) -> SdkResult<Blog> {
        let response: ReadBlogResponse = self
            .call(Operation::ReadBlog, &ReadBlogRequest::new(blog_id))
            .await?;
        Ok(response.blog)
    }

    /// Replace all fields of `blog.id`. Returns the blog as submitted.
    pub async fn update_blog(&self, blog: Blog) -> SdkResult<Blog> {
        let response: UpdateBlogResponse = self
            .call(Operation::UpdateBlog, &UpdateBlogRequest::new(blog))
            .await?;
        Ok(response.blog)
    }

    /// Delete a blog; returns the deleted id.
    pub async fn delete_blog(&self, blog_id: &str) -> SdkResult<String> {
        let response: DeleteBlogResponse = self
            .call(Operation::DeleteBlog, &DeleteBlogRequest::new(blog_id))
            .await?;
        Ok(response.blog_id)
    }

    pub async fn health(&self) -> SdkResult<HealthResponse> {
        let url = self.url(endpoints::HEALTH)?;
        let response = self.http.get(url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn url(&self, path: &str) -> SdkResult<Url> {
        self.base_url.join(path).map_err(|e| SdkError::InvalidUrl {
            url: format!("{}{}", self.base_url, path),
            reason: e.to_string(),
        })
    }

    async fn call<Req, Resp>(&self, op: Operation, request: &Req) -> SdkResult<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.url(op.path())?;
        debug!(op = %op, %url, "calling blog service");

        let response = self.http.post(url).json(request).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<Resp>().await?);
        }

        let body = response.bytes().await?;
        match serde_json::from_slice::<ErrorResponse>(&body) {
            Ok(error) => Err(SdkError::Remote {
                op,
                status: status.as_u16(),
                kind: error.kind,
                message: error.message,
            }),
            Err(_) => Err(SdkError::UnexpectedStatus {
                op,
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            }),
        }
    }
}
