//! Process-lifetime in-memory ledger store.
//!
//! All collections sit behind one `RwLock`. Reads derive figures from a
//! snapshot taken under the read guard; withdrawal submission holds the write
//! guard across read-balance, validate and append, so concurrent requests
//! can never both spend the same balance.

use chrono::Utc;
use royalty_core::ledger::{
    Author, Book, LedgerError, LedgerService, LedgerSnapshot, Sale, Withdrawal, WithdrawalReceipt,
};
use royalty_shared::types::{AmountInput, AuthorRef, WithdrawalId};
use tokio::sync::RwLock;
use tracing::debug;

/// Entity counts, for startup logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreCounts {
    /// Number of authors.
    pub authors: usize,
    /// Number of books.
    pub books: usize,
    /// Number of sales.
    pub sales: usize,
    /// Number of withdrawals.
    pub withdrawals: usize,
}

#[derive(Debug)]
struct LedgerState {
    authors: Vec<Author>,
    books: Vec<Book>,
    sales: Vec<Sale>,
    withdrawals: Vec<Withdrawal>,
    /// Last assigned withdrawal id. Never reused.
    last_withdrawal_id: u64,
}

impl LedgerState {
    fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            authors: &self.authors,
            books: &self.books,
            sales: &self.sales,
            withdrawals: &self.withdrawals,
        }
    }

    fn next_withdrawal_id(&mut self) -> WithdrawalId {
        self.last_withdrawal_id += 1;
        WithdrawalId(self.last_withdrawal_id)
    }
}

/// In-memory store shared by every request handler.
#[derive(Debug)]
pub struct LedgerStore {
    state: RwLock<LedgerState>,
}

impl LedgerStore {
    /// Creates a store with fixed authors, books and sales and no withdrawals.
    #[must_use]
    pub fn new(authors: Vec<Author>, books: Vec<Book>, sales: Vec<Sale>) -> Self {
        Self {
            state: RwLock::new(LedgerState {
                authors,
                books,
                sales,
                withdrawals: Vec::new(),
                last_withdrawal_id: 0,
            }),
        }
    }

    /// Runs `f` against a consistent snapshot.
    pub async fn read<R>(&self, f: impl FnOnce(&LedgerSnapshot<'_>) -> R) -> R {
        let state = self.state.read().await;
        f(&state.snapshot())
    }

    /// Validates and records a withdrawal as one atomic step.
    ///
    /// # Errors
    ///
    /// Returns the first admission rule the request breaks; nothing is
    /// recorded in that case.
    pub async fn submit_withdrawal(
        &self,
        author: AuthorRef,
        amount: AmountInput,
    ) -> Result<WithdrawalReceipt, LedgerError> {
        let mut state = self.state.write().await;

        let validated = LedgerService::validate_withdrawal(&state.snapshot(), author, amount)?;
        let id = state.next_withdrawal_id();
        let receipt = validated.into_receipt(id, Utc::now());
        state.withdrawals.push(receipt.withdrawal.clone());

        debug!(
            withdrawal_id = %id,
            author_id = %validated.author_id,
            withdrawals = state.withdrawals.len(),
            "Withdrawal appended"
        );

        Ok(receipt)
    }

    /// Current entity counts.
    pub async fn counts(&self) -> StoreCounts {
        let state = self.state.read().await;
        StoreCounts {
            authors: state.authors.len(),
            books: state.books.len(),
            sales: state.sales.len(),
            withdrawals: state.withdrawals.len(),
        }
    }
}
