//! API route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use royalty_core::ledger::LedgerError;
use royalty_shared::{AppError, types::AuthorId};
use serde_json::json;

use crate::AppState;

pub mod authors;
pub mod health;
pub mod withdrawals;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(authors::routes())
        .merge(withdrawals::routes())
}

/// Parses a path segment as an author id.
///
/// Anything that is not an integer can never name an author.
pub(crate) fn parse_author_id(raw: &str) -> Result<AuthorId, LedgerError> {
    raw.parse().map_err(|_| LedgerError::AuthorNotFound)
}

/// Renders a ledger error as `{ "error": message }` with its status code.
pub(crate) fn error_response(err: LedgerError) -> Response {
    app_error_response(&AppError::from(err))
}

/// Renders an application error as `{ "error": message }`.
pub(crate) fn app_error_response(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.message() }))).into_response()
}
