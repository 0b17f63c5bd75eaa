//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface over the shared `LedgerStore`,
//! hiding the locking details from the rest of the application.

pub mod author;
pub mod withdrawal;

pub use author::{AuthorDetail, AuthorRepository};
pub use withdrawal::WithdrawalRepository;
