//! Ledger domain types.
//!
//! Raw entities as held by the store, plus the derived views the API
//! presents. Derived views are always recomputed from raw sales and
//! withdrawals; nothing here caches a total.

use chrono::{DateTime, NaiveDate, Utc};
use royalty_shared::types::{AuthorId, BookId, Money, WithdrawalId};
use serde::{Deserialize, Serialize};

/// An author receiving royalties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Stable identifier.
    pub id: AuthorId,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Payout bank account number. Stored only.
    pub bank_account: String,
    /// Payout bank routing code. Stored only.
    pub routing_code: String,
}

/// A book owned by exactly one author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Stable identifier.
    pub id: BookId,
    /// Owning author.
    pub author_id: AuthorId,
    /// Title.
    pub title: String,
    /// Fixed royalty paid per unit sold.
    pub royalty_per_sale: Money,
}

/// `quantity` units of one book sold on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    /// Book sold.
    pub book_id: BookId,
    /// Units sold.
    pub quantity: u64,
    /// Day of sale.
    pub date: NaiveDate,
}

/// Withdrawal status.
///
/// Only `Pending` exists; withdrawals are recorded but never settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalStatus {
    /// Requested, awaiting payout.
    Pending,
}

impl WithdrawalStatus {
    /// Returns the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded payout request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    /// Identifier assigned by the store.
    pub id: WithdrawalId,
    /// Requesting author.
    pub author_id: AuthorId,
    /// Amount requested.
    pub amount: Money,
    /// Always `Pending`.
    pub status: WithdrawalStatus,
    /// When the request was admitted.
    pub created_at: DateTime<Utc>,
}

impl Withdrawal {
    /// Creates a freshly admitted withdrawal.
    #[must_use]
    pub fn pending(
        id: WithdrawalId,
        author_id: AuthorId,
        amount: Money,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author_id,
            amount,
            status: WithdrawalStatus::Pending,
            created_at,
        }
    }
}

/// Earnings and balance for one author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuthorFinancials {
    /// All royalties ever earned.
    pub total_earnings: Money,
    /// Earnings minus everything withdrawn.
    pub current_balance: Money,
}

/// One row of the author listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorSummary {
    /// Author id.
    pub id: AuthorId,
    /// Author name.
    pub name: String,
    /// All royalties ever earned.
    pub total_earnings: Money,
    /// Amount still available to withdraw.
    pub current_balance: Money,
}

/// Per-book totals shown on the author detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSummary {
    /// Book id.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Royalty per unit sold.
    pub royalty_per_sale: Money,
    /// Units sold across all sales.
    pub total_sold: u64,
    /// `total_sold * royalty_per_sale`.
    pub total_royalty: Money,
}

/// A sale joined with its book, as listed for an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SaleLine {
    /// Title of the book sold.
    pub book_title: String,
    /// Units sold.
    pub quantity: u64,
    /// Royalty earned by this sale.
    pub royalty_earned: Money,
    /// Day of sale.
    pub sale_date: NaiveDate,
}

/// Result of an admitted withdrawal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalReceipt {
    /// The appended record.
    pub withdrawal: Withdrawal,
    /// Balance after the withdrawal.
    pub new_balance: Money,
}
