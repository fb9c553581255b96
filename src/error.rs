//! Typed errors and the central HTTP error responder.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::borrow::Cow;
use thiserror::Error;

/// Kind used when an `ApiError` is built without one.
pub const DEFAULT_KIND: &str = "INTERNAL SERVER ERROR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}'")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Db(#[from] sqlx::Error),
    #[error("invalid DATABASE_URL: {0}")]
    InvalidUrl(String),
}

/// A failed request: HTTP status, machine-readable kind and a human message.
/// Rendered only by its `IntoResponse` impl.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub kind: Cow<'static, str>,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            kind: Cow::Borrowed(DEFAULT_KIND),
            message: message.into(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<Cow<'static, str>>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn id_required() -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "Id is not provided inside URL")
            .with_kind("ID IN PARAMS REQUIRED")
    }

    pub fn id_not_a_number() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "ID should be a natural number")
            .with_kind("ID SHOULD BE A NUMBER")
    }

    pub fn pet_not_found(id: impl std::fmt::Display) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("None of the Pet belongs to this id #{}", id),
        )
        .with_kind("PET NOT FOUND")
    }

    pub fn invalid_json() -> Self {
        Self::new(StatusCode::BAD_REQUEST, "The JSON data is not well format")
            .with_kind("INVALID JSON FORMAT")
    }

    pub fn name_required() -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Name property is required to create Pet",
        )
        .with_kind("NAME PROPERTY REQUIRED")
    }

    pub fn route_not_found(method: &str, path: &str) -> Self {
        Self::new(StatusCode::NOT_FOUND, format!("No route for {} {}", method, path))
            .with_kind("ROUTE NOT FOUND")
    }

    pub fn method_not_allowed(method: &str, path: &str) -> Self {
        Self::new(
            StatusCode::METHOD_NOT_ALLOWED,
            format!("Method {} is not allowed on {}", method, path),
        )
        .with_kind("METHOD NOT ALLOWED")
    }

    pub fn payload_too_large(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, detail).with_kind("PAYLOAD TOO LARGE")
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, format!("details {}", e))
            .with_kind("SERVER INTERNAL ERROR")
    }
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub success: bool,
    pub error: &'a str,
    pub message: &'a str,
    pub data: Option<()>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, kind = %self.kind, message = %self.message, "request failed");
        } else {
            tracing::debug!(status = %self.status, kind = %self.kind, message = %self.message, "request rejected");
        }
        let body = ErrorBody {
            success: false,
            error: &self.kind,
            message: &self.message,
            data: None,
        };
        (self.status, Json(body)).into_response()
    }
}
