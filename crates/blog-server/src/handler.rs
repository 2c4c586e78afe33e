use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;

use blog_protocol::{
    CreateBlogRequest, CreateBlogResponse, DeleteBlogRequest, DeleteBlogResponse, HealthResponse,
    Operation, ReadBlogRequest, ReadBlogResponse, UpdateBlogRequest, UpdateBlogResponse,
};

use crate::error::{ServiceError, ServiceResult};
use crate::service::BlogService;

/// Health check handler.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Unwrap a JSON body, reporting a bad one as `invalid_request` so every
/// failure carries the `{kind, message}` body.
fn body<T>(op: Operation, request: Result<Json<T>, JsonRejection>) -> ServiceResult<T> {
    request
        .map(|Json(request)| request)
        .map_err(|rejection| ServiceError::rejected(op, rejection))
}

pub async fn create_blog(
    State(service): State<BlogService>,
    request: Result<Json<CreateBlogRequest>, JsonRejection>,
) -> ServiceResult<Json<CreateBlogResponse>> {
    let request = body(Operation::CreateBlog, request)?;
    service.create_blog(request).await.map(Json)
}

pub async fn read_blog(
    State(service): State<BlogService>,
    request: Result<Json<ReadBlogRequest>, JsonRejection>,
) -> ServiceResult<Json<ReadBlogResponse>> {
    let request = body(Operation::ReadBlog, request)?;
    service.read_blog(request).await.map(Json)
}

pub async fn update_blog(
    State(service): State<BlogService>,
    request: Result<Json<UpdateBlogRequest>, JsonRejection>,
) -> ServiceResult<Json<UpdateBlogResponse>> {
    let request = body(Operation::UpdateBlog, request)?;
    service.update_blog(request).await.map(Json)
}

pub async fn delete_blog(
    State(service): State<BlogService>,
    request: Result<Json<DeleteBlogRequest>, JsonRejection>,
) -> ServiceResult<Json<DeleteBlogResponse>> {
    let request = body(Operation::DeleteBlog, request)?;
    service.delete_blog(request).await.map(Json)
}
