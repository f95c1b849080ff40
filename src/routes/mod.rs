//! Router assembly: book API, operational routes, and the shared middleware stack.

mod books;
mod common;

pub use books::book_routes;
pub use common::common_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Every response gets `Access-Control-Allow-Origin: *`; preflight is answered by the CORS layer.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The body limit is enforced by the `Json` extractor, so an oversized body is an `AppError` like any other.
pub fn build_router(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(book_routes(state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer())
                .layer(DefaultBodyLimit::max(settings.body_limit_bytes)),
        )
}
