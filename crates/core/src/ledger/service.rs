//! Ledger service for withdrawal admission.
//!
//! This module decides whether a withdrawal request may be recorded. It is
//! pure: the caller supplies a snapshot, and on success appends the record
//! while still holding whatever guard produced that snapshot.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use royalty_shared::types::{AmountInput, AuthorId, AuthorRef, Money, WithdrawalId};

use super::error::LedgerError;
use super::snapshot::LedgerSnapshot;
use super::types::{Withdrawal, WithdrawalReceipt};

/// Smallest amount an author may withdraw in one request.
pub const MINIMUM_WITHDRAWAL: Money = Money::new(Decimal::from_parts(500, 0, 0, false, 0));

/// A request that passed every admission rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedWithdrawal {
    /// Requesting author (known to exist).
    pub author_id: AuthorId,
    /// Requested amount (at least the minimum, at most the balance).
    pub amount: Money,
    /// Balance before this withdrawal.
    pub balance_before: Money,
}

impl ValidatedWithdrawal {
    /// Builds the record and receipt for this request.
    #[must_use]
    pub fn into_receipt(self, id: WithdrawalId, created_at: DateTime<Utc>) -> WithdrawalReceipt {
        WithdrawalReceipt {
            withdrawal: Withdrawal::pending(id, self.author_id, self.amount, created_at),
            new_balance: self.balance_before - self.amount,
        }
    }
}

/// Ledger service for withdrawal validation.
///
/// This service contains pure business logic with no storage dependencies.
pub struct LedgerService;

impl LedgerService {
    /// Validate a withdrawal request against the current ledger.
    ///
    /// Checks, in order:
    /// 1. Both fields are present
    /// 2. The author exists
    /// 3. The amount is numeric
    /// 4. The amount does not exceed the current balance
    /// 5. The amount is at least [`MINIMUM_WITHDRAWAL`]
    ///
    /// # Errors
    ///
    /// Returns the first rule the request breaks.
    pub fn validate_withdrawal(
        snapshot: &LedgerSnapshot<'_>,
        author: AuthorRef,
        amount: AmountInput,
    ) -> Result<ValidatedWithdrawal, LedgerError> {
        let author_id = match (author, amount) {
            (AuthorRef::Missing, _) | (_, AmountInput::Missing) => {
                return Err(LedgerError::MissingFields);
            }
            (AuthorRef::Unresolvable, _) => return Err(LedgerError::AuthorNotFound),
            (AuthorRef::Id(id), _) => id,
        };

        if snapshot.author(author_id).is_none() {
            return Err(LedgerError::AuthorNotFound);
        }

        let AmountInput::Value(amount) = amount else {
            return Err(LedgerError::InvalidAmount);
        };

        Self::validate_amount(amount, snapshot.financials(author_id).current_balance).map(
            |balance_before| ValidatedWithdrawal {
                author_id,
                amount,
                balance_before,
            },
        )
    }

    /// Check a numeric amount against the available balance, then the minimum.
    ///
    /// A request that breaks both rules is reported as `InsufficientBalance`.
    /// Returns the balance unchanged on success.
    ///
    /// # Errors
    ///
    /// `InsufficientBalance` or `BelowMinimum`.
    pub fn validate_amount(amount: Money, balance: Money) -> Result<Money, LedgerError> {
        if amount > balance {
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                available: balance,
            });
        }
        if amount < MINIMUM_WITHDRAWAL {
            return Err(LedgerError::BelowMinimum {
                minimum: MINIMUM_WITHDRAWAL,
            });
        }
        Ok(balance)
    }
}
