//! Author repository: read-only views over authors and their ledger.

use std::sync::Arc;

use royalty_core::ledger::{
    Author, AuthorFinancials, AuthorSummary, BookSummary, LedgerError, SaleLine, Withdrawal,
};
use royalty_shared::types::AuthorId;

use crate::store::LedgerStore;

/// Everything shown on an author's detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetail {
    /// The author.
    pub author: Author,
    /// Earnings and balance.
    pub financials: AuthorFinancials,
    /// Per-book totals, in insertion order.
    pub books: Vec<BookSummary>,
}

/// Author repository for ledger reads.
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    store: Arc<LedgerStore>,
}

impl AuthorRepository {
    /// Creates a new author repository.
    #[must_use]
    pub const fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Lists every author with earnings and balance.
    pub async fn list_authors(&self) -> Vec<AuthorSummary> {
        self.store.read(|s| s.author_summaries()).await
    }

    /// Finds an author with financials and per-book totals.
    ///
    /// # Errors
    ///
    /// Returns `AuthorNotFound` if the author does not exist.
    pub async fn find_detail(&self, author_id: AuthorId) -> Result<AuthorDetail, LedgerError> {
        self.store
            .read(|s| -> Result<AuthorDetail, LedgerError> {
                let author = s.author(author_id).ok_or(LedgerError::AuthorNotFound)?;
                Ok(AuthorDetail {
                    author: author.clone(),
                    financials: s.financials(author_id),
                    books: s.book_summaries(author_id),
                })
            })
            .await
    }

    /// Lists the author's sales, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AuthorNotFound` if the author does not exist.
    pub async fn list_sales(&self, author_id: AuthorId) -> Result<Vec<SaleLine>, LedgerError> {
        self.store
            .read(|s| -> Result<Vec<SaleLine>, LedgerError> {
                s.author(author_id).ok_or(LedgerError::AuthorNotFound)?;
                Ok(s.author_sales(author_id))
            })
            .await
    }

    /// Lists the author's withdrawals, newest first.
    ///
    /// # Errors
    ///
    /// Returns `AuthorNotFound` if the author does not exist.
    pub async fn list_withdrawals(
        &self,
        author_id: AuthorId,
    ) -> Result<Vec<Withdrawal>, LedgerError> {
        self.store
            .read(|s| -> Result<Vec<Withdrawal>, LedgerError> {
                s.author(author_id).ok_or(LedgerError::AuthorNotFound)?;
                Ok(s.author_withdrawals(author_id)
                    .into_iter()
                    .cloned()
                    .collect())
            })
            .await
    }
}
