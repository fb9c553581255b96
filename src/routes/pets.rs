//! `/api/pets`: collection routes.

use crate::handlers::pets::{delete_pets, list_pets, seed_pets, truncate_pets};
use crate::handlers::root::method_not_allowed;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn pets_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_pets).fallback(method_not_allowed))
        .route("/seed-pets", post(seed_pets).fallback(method_not_allowed))
        .route("/delete-pets", delete(delete_pets).fallback(method_not_allowed))
        .route("/truncate-pets", delete(truncate_pets).fallback(method_not_allowed))
        .with_state(state)
}
