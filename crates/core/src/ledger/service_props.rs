//! Property-based tests for LedgerService.
//!
//! - Admission never drives a balance negative
//! - The receipt balance equals the recomputed balance after the append
//! - Amounts under the minimum are always rejected

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use royalty_shared::types::{AmountInput, AuthorId, AuthorRef, BookId, Money, WithdrawalId};
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::service::{LedgerService, MINIMUM_WITHDRAWAL};
use super::snapshot::LedgerSnapshot;
use super::types::{Author, Book, Sale, Withdrawal};

/// Strategy to generate request amounts (0.01 to 20,000.00).
fn request_amount() -> impl Strategy<Value = Money> {
    (1i64..2_000_000i64).prop_map(|cents| Money::new(Decimal::new(cents, 2)))
}

/// Strategy to generate per-sale quantities for a single book.
fn quantities() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::vec(0u64..200, 0..8)
}

/// Single author with a single book at `rate` per unit.
fn make_ledger(rate: i64, quantities: &[u64]) -> (Vec<Author>, Vec<Book>, Vec<Sale>) {
    let authors = vec![Author {
        id: AuthorId(1),
        name: "Test Author".to_string(),
        email: "test@email.com".to_string(),
        bank_account: String::new(),
        routing_code: String::new(),
    }];
    let books = vec![Book {
        id: BookId(1),
        author_id: AuthorId(1),
        title: "Test Book".to_string(),
        royalty_per_sale: Money::from_units(rate),
    }];
    let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let sales = quantities
        .iter()
        .map(|&quantity| Sale {
            book_id: BookId(1),
            quantity,
            date,
        })
        .collect();
    (authors, books, sales)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// A sequence of requests never leaves the balance negative, and every
    /// receipt matches the balance recomputed after its append.
    #[test]
    fn prop_admission_never_overdraws(
        rate in 1i64..100,
        qty in quantities(),
        requests in prop::collection::vec(request_amount(), 1..12),
    ) {
        let (authors, books, sales) = make_ledger(rate, &qty);
        let mut withdrawals: Vec<Withdrawal> = Vec::new();
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();

        for amount in requests {
            let snapshot = LedgerSnapshot {
                authors: &authors,
                books: &books,
                sales: &sales,
                withdrawals: &withdrawals,
            };
            let result = LedgerService::validate_withdrawal(
                &snapshot,
                AuthorRef::Id(AuthorId(1)),
                AmountInput::Value(amount),
            );
            let Ok(validated) = result else { continue };

            let next_id = WithdrawalId(withdrawals.len() as u64 + 1);
            let receipt = validated.into_receipt(next_id, at);
            withdrawals.push(receipt.withdrawal.clone());

            let after = LedgerSnapshot {
                authors: &authors,
                books: &books,
                sales: &sales,
                withdrawals: &withdrawals,
            };
            let balance = after.financials(AuthorId(1)).current_balance;
            prop_assert!(!balance.is_negative());
            prop_assert_eq!(balance, receipt.new_balance);
        }
    }

    /// Anything under the minimum is rejected when the balance covers it.
    #[test]
    fn prop_below_minimum_rejected(
        cents in 0i64..50_000,
        balance in 500i64..1_000_000,
    ) {
        let amount = Money::new(Decimal::new(cents, 2));
        prop_assume!(amount < MINIMUM_WITHDRAWAL);

        let result = LedgerService::validate_amount(amount, Money::from_units(balance));
        prop_assert_eq!(
            result,
            Err(LedgerError::BelowMinimum { minimum: MINIMUM_WITHDRAWAL })
        );
    }

    /// An author with no sales can never withdraw, so their balance stays zero.
    #[test]
    fn prop_no_sales_no_withdrawal(amount in request_amount()) {
        let (authors, books, sales) = make_ledger(50, &[]);
        let snapshot = LedgerSnapshot {
            authors: &authors,
            books: &books,
            sales: &sales,
            withdrawals: &[],
        };
        let result = LedgerService::validate_withdrawal(
            &snapshot,
            AuthorRef::Id(AuthorId(1)),
            AmountInput::Value(amount),
        );
        prop_assert!(result.is_err());
        prop_assert_eq!(snapshot.financials(AuthorId(1)).current_balance, Money::ZERO);
    }
}
