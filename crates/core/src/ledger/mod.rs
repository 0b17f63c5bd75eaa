//! Royalty ledger logic.
//!
//! This module implements the core ledger functionality:
//! - Domain entities (authors, books, sales, withdrawals)
//! - Derived figures (earnings, withdrawn to date, balance)
//! - Withdrawal admission rules
//! - Error types for ledger operations

pub mod error;
pub mod service;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod service_props;
#[cfg(test)]
mod snapshot_props;

pub use error::LedgerError;
pub use service::{LedgerService, MINIMUM_WITHDRAWAL, ValidatedWithdrawal};
pub use snapshot::LedgerSnapshot;
pub use types::{
    Author, AuthorFinancials, AuthorSummary, Book, BookSummary, Sale, SaleLine, Withdrawal,
    WithdrawalReceipt, WithdrawalStatus,
};
