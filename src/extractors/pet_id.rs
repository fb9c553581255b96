//! Extract and validate the `:id` path segment.

use crate::error::ApiError;
use crate::service::{parse_pet_id, PetId};
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

#[async_trait]
impl<S> FromRequestParts<S> for PetId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::id_required())?;
        parse_pet_id(&raw)
    }
}
