//! Route tables and the assembled application router.

mod pet;
mod pets;
pub use pet::pet_routes;
pub use pets::pets_routes;

use crate::handlers::root::{method_not_allowed, not_found, welcome};
use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::TraceLayer;

/// Full application: `/`, `/api/pet`, `/api/pets`, JSON fallbacks, body limit and request tracing.
/// The body limit surfaces as a JSON rejection inside the create extractor.
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(welcome).fallback(method_not_allowed))
        .nest("/api/pet", pet_routes(state.clone()))
        .nest("/api/pets", pets_routes(state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
