//! Author routes: listings, detail, sales and withdrawal history.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::SecondsFormat;
use royalty_core::ledger::{AuthorSummary, BookSummary, SaleLine, Withdrawal, WithdrawalStatus};
use royalty_db::{AuthorDetail, AuthorRepository};
use royalty_shared::types::{AuthorId, Money, WithdrawalId};
use serde::Serialize;
use tracing::{debug, warn};

use super::{error_response, parse_author_id};
use crate::AppState;

/// Creates the author routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/authors", get(list_authors))
        .route("/authors/{id}", get(get_author))
        .route("/authors/{id}/sales", get(list_author_sales))
        .route("/authors/{id}/withdrawals", get(list_author_withdrawals))
}

/// Response for the author detail.
#[derive(Debug, Serialize)]
pub struct AuthorDetailResponse {
    /// Author ID.
    pub id: AuthorId,
    /// Author name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Amount still available to withdraw.
    pub current_balance: Money,
    /// All royalties ever earned.
    pub total_earnings: Money,
    /// Number of books.
    pub total_books: usize,
    /// Per-book totals.
    pub books: Vec<BookSummary>,
}

impl From<AuthorDetail> for AuthorDetailResponse {
    fn from(detail: AuthorDetail) -> Self {
        Self {
            id: detail.author.id,
            name: detail.author.name,
            email: detail.author.email,
            current_balance: detail.financials.current_balance,
            total_earnings: detail.financials.total_earnings,
            total_books: detail.books.len(),
            books: detail.books,
        }
    }
}

/// Response for one withdrawal in an author's history.
#[derive(Debug, Serialize)]
pub struct WithdrawalResponse {
    /// Withdrawal ID.
    pub id: WithdrawalId,
    /// Amount requested.
    pub amount: Money,
    /// Always `pending`.
    pub status: WithdrawalStatus,
    /// RFC 3339 UTC timestamp with milliseconds.
    pub created_at: String,
}

impl From<Withdrawal> for WithdrawalResponse {
    fn from(w: Withdrawal) -> Self {
        Self {
            id: w.id,
            amount: w.amount,
            status: w.status,
            created_at: w.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

fn repository(state: &AppState) -> AuthorRepository {
    AuthorRepository::new(Arc::clone(&state.store))
}

/// GET `/authors` - List authors with earnings and balance.
async fn list_authors(State(state): State<AppState>) -> Json<Vec<AuthorSummary>> {
    let authors = repository(&state).list_authors().await;
    debug!(count = authors.len(), "Listed authors");
    Json(authors)
}

/// GET `/authors/{id}` - Author detail with per-book totals.
async fn get_author(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_author_id(&id) {
        Ok(author_id) => repository(&state).find_detail(author_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(detail) => (StatusCode::OK, Json(AuthorDetailResponse::from(detail))).into_response(),
        Err(e) => {
            warn!(author_id = %id, error = %e, "Author lookup failed");
            error_response(e)
        }
    }
}

/// GET `/authors/{id}/sales` - Every sale of the author's books, newest first.
async fn list_author_sales(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let result = match parse_author_id(&id) {
        Ok(author_id) => repository(&state).list_sales(author_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(sales) => (StatusCode::OK, Json::<Vec<SaleLine>>(sales)).into_response(),
        Err(e) => {
            warn!(author_id = %id, error = %e, "Sales lookup failed");
            error_response(e)
        }
    }
}

/// GET `/authors/{id}/withdrawals` - The author's withdrawals, newest first.
async fn list_author_withdrawals(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let result = match parse_author_id(&id) {
        Ok(author_id) => repository(&state).list_withdrawals(author_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(withdrawals) => {
            let response: Vec<WithdrawalResponse> =
                withdrawals.into_iter().map(WithdrawalResponse::from).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            warn!(author_id = %id, error = %e, "Withdrawal lookup failed");
            error_response(e)
        }
    }
}
