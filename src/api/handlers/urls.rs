//! Handlers for URL create, lookup, and delete endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::url::{CreateUrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a URL.
///
/// # Endpoint
///
/// `POST /urls`
///
/// # Request Body
///
/// ```json
/// { "original": "https://example.com" }
/// ```
///
/// # Response
///
/// `201 Created` with the stored record:
///
/// ```json
/// {
///   "id": 1,
///   "original": "https://example.com",
///   "short": "abc123",
///   "createdAt": "2025-10-30T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `original` is empty or missing.
pub async fn create_url_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    let record = state.store.create(&payload.original).await?;

    Ok((StatusCode::CREATED, Json(record.into())))
}

/// Returns the record behind a short code.
///
/// # Endpoint
///
/// `GET /urls/{short}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown.
pub async fn get_url_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<UrlResponse>, AppError> {
    let record = state.store.get(&short).await?;

    Ok(Json(record.into()))
}

/// Deletes a short code. The code may be issued again afterwards.
///
/// # Endpoint
///
/// `DELETE /urls/{short}`
///
/// # Errors
///
/// Returns 404 Not Found if the code is unknown or already deleted.
pub async fn delete_url_handler(
    Path(short): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.store.delete(&short).await?;

    Ok(StatusCode::NO_CONTENT)
}
