//! Welcome payload and the JSON fallbacks for unknown routes and methods.

use crate::error::ApiError;
use axum::{extract::OriginalUri, http::Method, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct WelcomeBody {
    message: &'static str,
}

pub async fn welcome() -> Json<WelcomeBody> {
    tracing::info!("Page Root Accessed");
    Json(WelcomeBody {
        message: "Home Page Accesssed and Served Successfully!",
    })
}

pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::route_not_found(method.as_str(), uri.path())
}

/// Known path, unsupported method. Nested routers see a stripped URI, so read the original.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::method_not_allowed(method.as_str(), uri.path())
}
