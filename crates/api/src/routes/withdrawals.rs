//! Withdrawal submission route.

use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use royalty_core::ledger::WithdrawalStatus;
use royalty_db::WithdrawalRepository;
use royalty_shared::AppError;
use royalty_shared::types::{AuthorRef, Money, WithdrawalId};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::{app_error_response, error_response};
use crate::AppState;

/// Creates the withdrawal routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/withdrawals", post(create_withdrawal))
}

/// Request body for a withdrawal.
///
/// Fields are loosely typed: numeric strings are accepted and coerced.
#[derive(Debug, Default)]
pub struct CreateWithdrawalRequest {
    /// Requesting author.
    pub author_id: Option<Value>,
    /// Amount to withdraw.
    pub amount: Option<Value>,
}

impl CreateWithdrawalRequest {
    /// Reads the request from raw headers and body.
    ///
    /// Bodies that are empty or not JSON-typed yield an empty request, so
    /// the ledger reports the missing fields.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a JSON-typed body is not a JSON object.
    pub fn from_parts(headers: &HeaderMap, body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) || !is_json_content(headers) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => Ok(Self {
                author_id: fields.remove("author_id"),
                amount: fields.remove("amount"),
            }),
            _ => Err(AppError::Validation(
                "Request body must be a JSON object".to_string(),
            )),
        }
    }
}

fn is_json_content(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}

/// Response for an admitted withdrawal.
#[derive(Debug, Serialize)]
pub struct CreateWithdrawalResponse {
    /// Confirmation text.
    pub message: &'static str,
    /// Assigned withdrawal ID.
    pub withdrawal_id: WithdrawalId,
    /// Amount withdrawn.
    pub amount: Money,
    /// Balance after the withdrawal.
    pub new_balance: Money,
    /// Always `pending`.
    pub status: WithdrawalStatus,
}

/// POST `/withdrawals` - Request a payout against the author's balance.
async fn create_withdrawal(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let payload = match CreateWithdrawalRequest::from_parts(&headers, &body) {
        Ok(payload) => payload,
        Err(e) => {
            debug!(error = %e, "Unreadable withdrawal body");
            return app_error_response(&e);
        }
    };

    let author = AuthorRef::from_json(payload.author_id.as_ref());
    let amount = Money::from_json(payload.amount.as_ref());

    let repo = WithdrawalRepository::new(Arc::clone(&state.store));
    match repo.submit(author, amount).await {
        Ok(receipt) => {
            let withdrawal = receipt.withdrawal;
            info!(
                withdrawal_id = %withdrawal.id,
                author_id = %withdrawal.author_id,
                amount = %withdrawal.amount,
                new_balance = %receipt.new_balance,
                "Withdrawal requested"
            );

            (
                StatusCode::CREATED,
                Json(CreateWithdrawalResponse {
                    message: "Withdrawal requested successfully",
                    withdrawal_id: withdrawal.id,
                    amount: withdrawal.amount,
                    new_balance: receipt.new_balance,
                    status: withdrawal.status,
                }),
            )
                .into_response()
        }
        Err(e) => {
            if e.is_invalid_input() {
                debug!(author = ?author, amount = ?amount, code = e.error_code(), "Malformed withdrawal");
            } else {
                warn!(
                    author = ?author,
                    amount = ?amount,
                    code = e.error_code(),
                    error = %e,
                    "Withdrawal rejected"
                );
            }
            error_response(e)
        }
    }
}
