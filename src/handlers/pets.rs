//! Collection handlers: list, seed, delete all, truncate.

use crate::error::ApiError;
use crate::response::{created, ok, STATUS_UPPER};
use crate::service::seed_catalog;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn list_pets(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let rows = state.pets.list().await?;
    Ok(ok(STATUS_UPPER, "All Pets fetched Successfully", rows))
}

pub async fn seed_pets(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let catalog = seed_catalog();
    let rows = state.pets.insert_many(&catalog).await?;
    tracing::info!(count = rows.len(), "pets seeded");
    Ok(created(format!("{} Pets seeded successfully", catalog.len()), rows))
}

pub async fn delete_pets(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let deleted = state.pets.delete_all().await?;
    tracing::info!(deleted, "all pets deleted");
    Ok(ok(STATUS_UPPER, "All Pets Delete successfully", Option::<()>::None))
}

pub async fn truncate_pets(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.pets.truncate().await?;
    tracing::info!("pets table truncated");
    Ok(ok(STATUS_UPPER, "Pets table truncated successfully", Option::<()>::None))
}
