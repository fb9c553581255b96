//! Single-resource handlers: get, delete and create one pet.

use crate::error::ApiError;
use crate::extractors::PetBody;
use crate::response::{created, ok, STATUS_LOWER};
use crate::service::PetId;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

pub async fn get_pet(
    State(state): State<AppState>,
    id: PetId,
) -> Result<impl IntoResponse, ApiError> {
    let rows = match id.row_id() {
        Some(row_id) => state.pets.find_by_id(row_id).await?,
        None => Vec::new(),
    };
    if rows.is_empty() {
        return Err(ApiError::pet_not_found(id));
    }
    Ok(ok(STATUS_LOWER, "Pet found Successfully", rows))
}

pub async fn delete_pet(
    State(state): State<AppState>,
    id: PetId,
) -> Result<impl IntoResponse, ApiError> {
    let rows = match id.row_id() {
        Some(row_id) => state.pets.delete_by_id(row_id).await?,
        None => Vec::new(),
    };
    if rows.is_empty() {
        return Err(ApiError::pet_not_found(id));
    }
    tracing::info!(%id, "pet deleted");
    Ok(ok(STATUS_LOWER, "Pet remove Successfully", rows))
}

pub async fn create_pet(
    State(state): State<AppState>,
    PetBody(input): PetBody,
) -> Result<impl IntoResponse, ApiError> {
    let message = format!("Your Pet with name {} created Successfully", input.name);
    let rows = state.pets.insert(&input.into_new_pet()).await?;
    tracing::info!(ids = ?rows.iter().map(|p| p.id).collect::<Vec<_>>(), "pet created");
    Ok(created(message, rows))
}
