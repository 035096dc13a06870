//! API route configuration.

use crate::api::handlers::{create_url_handler, delete_url_handler, get_url_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// URL management routes.
///
/// # Endpoints
///
/// - `POST   /urls`          - Create a short code
/// - `GET    /urls/{short}`  - Look up a short code
/// - `DELETE /urls/{short}`  - Delete a short code
pub fn url_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", post(create_url_handler))
        .route("/urls/{short}", get(get_url_handler).delete(delete_url_handler))
}
