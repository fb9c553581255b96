//! Extract the create body. An over-limit body is 413, any other JSON rejection is `INVALID JSON FORMAT`.

use crate::error::ApiError;
use crate::service::CreatePetInput;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
    Json,
};
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct PetBody(pub CreatePetInput);

#[async_trait]
impl<S> FromRequest<S> for PetBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(%rejection, "create body rejected");
            if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                ApiError::payload_too_large(rejection.body_text())
            } else {
                ApiError::invalid_json()
            }
        })?;
        CreatePetInput::from_json(body).map(PetBody)
    }
}
