use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use blog_protocol::endpoints;

use crate::handler;
use crate::service::BlogService;

/// Build the axum router with all blog endpoints.
pub fn build_router(service: BlogService) -> Router {
    Router::new()
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::CREATE_BLOG, post(handler::create_blog))
        .route(endpoints::READ_BLOG, post(handler::read_blog))
        .route(endpoints::UPDATE_BLOG, post(handler::update_blog))
        .route(endpoints::DELETE_BLOG, post(handler::delete_blog))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
