//! Storage layer for the royalty ledger.
//!
//! This crate provides:
//! - The in-memory `LedgerStore` and its submission critical section
//! - Fixed seed data loaded at startup
//! - Repository abstractions used by the API

pub mod repositories;
pub mod seed;
pub mod store;

pub use repositories::{AuthorDetail, AuthorRepository, WithdrawalRepository};
pub use store::{LedgerStore, StoreCounts};

/// Builds the process-wide store from the fixed seed.
#[must_use]
pub fn connect() -> LedgerStore {
    LedgerStore::new(seed::authors(), seed::books(), seed::sales())
}
