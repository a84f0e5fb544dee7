use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};

/// `GET /` and `GET /{domain}`; every other method or path gets the 404
/// handler, including wrong methods on the two known paths.
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::root_prompt).fallback(handlers::not_found),
        )
        .route(
            "/{domain}",
            get(handlers::lookup_domain).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found)
        .with_state(state)
}
