//! Property-based tests for the derived ledger figures.

use chrono::NaiveDate;
use proptest::prelude::*;
use royalty_shared::types::{AuthorId, BookId, Money};

use super::snapshot::LedgerSnapshot;
use super::types::{Author, Book, Sale};

/// Strategy to generate (book index, quantity) sale pairs over three books.
fn sales_strategy() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((1u64..=3, 0u64..500), 0..20)
}

fn author(id: u64) -> Author {
    Author {
        id: AuthorId(id),
        name: format!("Author {id}"),
        email: format!("author{id}@email.com"),
        bank_account: String::new(),
        routing_code: String::new(),
    }
}

/// Books 1 and 2 belong to author 1, book 3 to author 2.
fn books(rates: [i64; 3]) -> Vec<Book> {
    [(1, 1), (2, 1), (3, 2)]
        .into_iter()
        .zip(rates)
        .map(|((id, author_id), rate)| Book {
            id: BookId(id),
            author_id: AuthorId(author_id),
            title: format!("Book {id}"),
            royalty_per_sale: Money::from_units(rate),
        })
        .collect()
}

fn sales(pairs: &[(u64, u64)], day: u32) -> Vec<Sale> {
    let date = NaiveDate::from_ymd_opt(2025, 1, day).unwrap();
    pairs
        .iter()
        .map(|&(book_id, quantity)| Sale {
            book_id: BookId(book_id),
            quantity,
            date,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Earnings equal the per-book sum of rate times units sold.
    #[test]
    fn prop_earnings_match_book_totals(
        rates in prop::array::uniform3(1i64..200),
        pairs in sales_strategy(),
    ) {
        let authors = vec![author(1), author(2)];
        let books = books(rates);
        let sales = sales(&pairs, 1);
        let snapshot = LedgerSnapshot { authors: &authors, books: &books, sales: &sales, withdrawals: &[] };

        for id in [AuthorId(1), AuthorId(2)] {
            let from_summaries: Money = snapshot
                .book_summaries(id)
                .iter()
                .map(|b| b.total_royalty)
                .sum();
            prop_assert_eq!(snapshot.earnings(id), from_summaries);
        }
    }

    /// Adding sales never lowers anyone's earnings.
    #[test]
    fn prop_earnings_monotonic(
        rates in prop::array::uniform3(1i64..200),
        before in sales_strategy(),
        added in sales_strategy(),
    ) {
        let authors = vec![author(1), author(2)];
        let books = books(rates);
        let initial = sales(&before, 1);
        let mut extended = initial.clone();
        extended.extend(sales(&added, 2));

        let a = LedgerSnapshot { authors: &authors, books: &books, sales: &initial, withdrawals: &[] };
        let b = LedgerSnapshot { authors: &authors, books: &books, sales: &extended, withdrawals: &[] };

        for id in [AuthorId(1), AuthorId(2)] {
            prop_assert!(b.earnings(id) >= a.earnings(id));
        }
    }

    /// Financials are a pure function of state.
    #[test]
    fn prop_financials_idempotent(
        rates in prop::array::uniform3(1i64..200),
        pairs in sales_strategy(),
    ) {
        let authors = vec![author(1), author(2)];
        let books = books(rates);
        let sales = sales(&pairs, 1);
        let snapshot = LedgerSnapshot { authors: &authors, books: &books, sales: &sales, withdrawals: &[] };

        prop_assert_eq!(snapshot.financials(AuthorId(1)), snapshot.financials(AuthorId(1)));
        prop_assert_eq!(snapshot.financials(AuthorId(2)), snapshot.financials(AuthorId(2)));
    }

    /// The sales listing is sorted newest first and loses nothing.
    #[test]
    fn prop_author_sales_sorted(
        early in sales_strategy(),
        late in sales_strategy(),
    ) {
        let authors = vec![author(1), author(2)];
        let books = books([10, 20, 30]);
        let mut all = sales(&early, 3);
        all.extend(sales(&late, 17));
        let snapshot = LedgerSnapshot { authors: &authors, books: &books, sales: &all, withdrawals: &[] };

        let lines = snapshot.author_sales(AuthorId(1));
        let expected = all.iter().filter(|s| s.book_id != BookId(3)).count();
        prop_assert_eq!(lines.len(), expected);
        prop_assert!(lines.windows(2).all(|w| w[0].sale_date >= w[1].sale_date));
    }
}
