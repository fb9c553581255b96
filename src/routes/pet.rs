//! `/api/pet`: single-resource routes.

use crate::handlers::pet::{create_pet, delete_pet, get_pet};
use crate::handlers::root::method_not_allowed;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};

pub fn pet_routes(state: AppState) -> Router {
    Router::new()
        .route("/create", post(create_pet).fallback(method_not_allowed))
        .route("/:id", get(get_pet).fallback(method_not_allowed))
        .route("/:id/delete", delete(delete_pet).fallback(method_not_allowed))
        .with_state(state)
}
