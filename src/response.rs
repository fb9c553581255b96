//! Success envelope helpers.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// `{status, message, data, error: null}`. The `status` text differs per endpoint.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
    pub error: Option<()>,
}

pub const STATUS_LOWER: &str = "ok";
pub const STATUS_UPPER: &str = "OK";

pub fn envelope<T: Serialize>(
    code: StatusCode,
    status: &'static str,
    message: impl Into<String>,
    data: T,
) -> (StatusCode, Json<Envelope<T>>) {
    (
        code,
        Json(Envelope {
            status,
            message: message.into(),
            data,
            error: None,
        }),
    )
}

pub fn ok<T: Serialize>(status: &'static str, message: impl Into<String>, data: T) -> (StatusCode, Json<Envelope<T>>) {
    envelope(StatusCode::OK, status, message, data)
}

pub fn created<T: Serialize>(message: impl Into<String>, data: T) -> (StatusCode, Json<Envelope<T>>) {
    envelope(StatusCode::CREATED, STATUS_UPPER, message, data)
}
