//! Withdrawal repository for submitting payout requests.

use std::sync::Arc;

use royalty_core::ledger::{LedgerError, WithdrawalReceipt};
use royalty_shared::types::{AmountInput, AuthorRef};

use crate::store::LedgerStore;

/// Withdrawal repository for the single write path.
#[derive(Debug, Clone)]
pub struct WithdrawalRepository {
    store: Arc<LedgerStore>,
}

impl WithdrawalRepository {
    /// Creates a new withdrawal repository.
    #[must_use]
    pub const fn new(store: Arc<LedgerStore>) -> Self {
        Self { store }
    }

    /// Validates and records a withdrawal.
    ///
    /// # Errors
    ///
    /// Returns the admission rule the request breaks.
    pub async fn submit(
        &self,
        author: AuthorRef,
        amount: AmountInput,
    ) -> Result<WithdrawalReceipt, LedgerError> {
        self.store.submit_withdrawal(author, amount).await
    }
}
