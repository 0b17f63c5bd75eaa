//! Read-only view of the ledger and the figures derived from it.
//!
//! Every figure is recomputed from raw books, sales and withdrawals on each
//! call, so two calls without an intervening append always agree.

use royalty_shared::types::{AuthorId, BookId, Money};

use super::types::{
    Author, AuthorFinancials, AuthorSummary, Book, BookSummary, Sale, SaleLine, Withdrawal,
};

/// Borrowed, consistent view over all ledger collections.
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a> {
    /// All authors, in insertion order.
    pub authors: &'a [Author],
    /// All books, in insertion order.
    pub books: &'a [Book],
    /// All sales, in insertion order.
    pub sales: &'a [Sale],
    /// All withdrawals, in insertion order.
    pub withdrawals: &'a [Withdrawal],
}

impl<'a> LedgerSnapshot<'a> {
    /// Looks up an author.
    #[must_use]
    pub fn author(&self, author_id: AuthorId) -> Option<&'a Author> {
        self.authors.iter().find(|a| a.id == author_id)
    }

    /// Books owned by the author, in insertion order. Empty for unknown authors.
    #[must_use]
    pub fn books_of(&self, author_id: AuthorId) -> Vec<&'a Book> {
        self.books
            .iter()
            .filter(|b| b.author_id == author_id)
            .collect()
    }

    /// Sales of the book, in insertion order.
    #[must_use]
    pub fn sales_of(&self, book_id: BookId) -> Vec<&'a Sale> {
        self.sales.iter().filter(|s| s.book_id == book_id).collect()
    }

    /// Units sold across every sale of the book.
    #[must_use]
    pub fn units_sold(&self, book_id: BookId) -> u64 {
        self.sales_of(book_id).iter().map(|s| s.quantity).sum()
    }

    /// Royalties earned by the author across all books.
    #[must_use]
    pub fn earnings(&self, author_id: AuthorId) -> Money {
        self.books_of(author_id)
            .into_iter()
            .map(|b| b.royalty_per_sale * self.units_sold(b.id))
            .sum()
    }

    /// Sum of every withdrawal the author has made, regardless of status.
    #[must_use]
    pub fn withdrawn_to_date(&self, author_id: AuthorId) -> Money {
        self.withdrawals
            .iter()
            .filter(|w| w.author_id == author_id)
            .map(|w| w.amount)
            .sum()
    }

    /// Earnings and balance. Does not check that the author exists.
    #[must_use]
    pub fn financials(&self, author_id: AuthorId) -> AuthorFinancials {
        let total_earnings = self.earnings(author_id);
        AuthorFinancials {
            total_earnings,
            current_balance: total_earnings - self.withdrawn_to_date(author_id),
        }
    }

    /// Every author with their figures, in insertion order.
    #[must_use]
    pub fn author_summaries(&self) -> Vec<AuthorSummary> {
        self.authors
            .iter()
            .map(|a| {
                let financials = self.financials(a.id);
                AuthorSummary {
                    id: a.id,
                    name: a.name.clone(),
                    total_earnings: financials.total_earnings,
                    current_balance: financials.current_balance,
                }
            })
            .collect()
    }

    /// Per-book totals for the author, in insertion order.
    #[must_use]
    pub fn book_summaries(&self, author_id: AuthorId) -> Vec<BookSummary> {
        self.books_of(author_id)
            .into_iter()
            .map(|b| {
                let total_sold = self.units_sold(b.id);
                BookSummary {
                    id: b.id,
                    title: b.title.clone(),
                    royalty_per_sale: b.royalty_per_sale,
                    total_sold,
                    total_royalty: b.royalty_per_sale * total_sold,
                }
            })
            .collect()
    }

    /// Every sale of the author's books, newest `sale_date` first.
    ///
    /// Sales on the same day keep insertion order.
    #[must_use]
    pub fn author_sales(&self, author_id: AuthorId) -> Vec<SaleLine> {
        let mut lines: Vec<SaleLine> = self
            .books_of(author_id)
            .into_iter()
            .flat_map(|b| {
                self.sales_of(b.id).into_iter().map(move |s| SaleLine {
                    book_title: b.title.clone(),
                    quantity: s.quantity,
                    royalty_earned: b.royalty_per_sale * s.quantity,
                    sale_date: s.date,
                })
            })
            .collect();
        lines.sort_by(|a, b| b.sale_date.cmp(&a.sale_date));
        lines
    }

    /// The author's withdrawals, newest first.
    #[must_use]
    pub fn author_withdrawals(&self, author_id: AuthorId) -> Vec<&'a Withdrawal> {
        let mut withdrawals: Vec<&Withdrawal> = self
            .withdrawals
            .iter()
            .filter(|w| w.author_id == author_id)
            .collect();
        withdrawals.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        withdrawals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use royalty_shared::types::WithdrawalId;

    struct Fixture {
        authors: Vec<Author>,
        books: Vec<Book>,
        sales: Vec<Sale>,
        withdrawals: Vec<Withdrawal>,
    }

    impl Fixture {
        fn snapshot(&self) -> LedgerSnapshot<'_> {
            LedgerSnapshot {
                authors: &self.authors,
                books: &self.books,
                sales: &self.sales,
                withdrawals: &self.withdrawals,
            }
        }
    }

    fn author(id: u64, name: &str) -> Author {
        Author {
            id: AuthorId(id),
            name: name.to_string(),
            email: format!("{}@email.com", name.to_lowercase()),
            bank_account: String::new(),
            routing_code: String::new(),
        }
    }

    fn book(id: u64, author_id: u64, title: &str, rate: i64) -> Book {
        Book {
            id: BookId(id),
            author_id: AuthorId(author_id),
            title: title.to_string(),
            royalty_per_sale: Money::from_units(rate),
        }
    }

    fn sale(book_id: u64, quantity: u64, date: &str) -> Sale {
        Sale {
            book_id: BookId(book_id),
            quantity,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        }
    }

    fn fixture() -> Fixture {
        Fixture {
            authors: vec![author(1, "Priya"), author(2, "Rahul"), author(3, "Nobody")],
            books: vec![
                book(1, 1, "The Silent River", 45),
                book(2, 1, "Midnight in Mumbai", 60),
                book(3, 2, "Code & Coffee", 75),
                book(4, 2, "Startup Diaries", 50),
            ],
            sales: vec![
                sale(1, 25, "2025-01-05"),
                sale(1, 40, "2025-01-12"),
                sale(2, 15, "2025-01-08"),
                sale(3, 60, "2025-01-03"),
                sale(4, 30, "2025-01-10"),
                sale(3, 45, "2025-01-10"),
            ],
            withdrawals: vec![],
        }
    }

    #[test]
    fn test_books_of_keeps_insertion_order() {
        let f = fixture();
        let ids: Vec<_> = f.snapshot().books_of(AuthorId(1)).iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![BookId(1), BookId(2)]);
    }

    #[test]
    fn test_books_of_unknown_author_is_empty() {
        let f = fixture();
        assert!(f.snapshot().books_of(AuthorId(99)).is_empty());
        assert!(f.snapshot().books_of(AuthorId(3)).is_empty());
    }

    #[test]
    fn test_sales_of() {
        let f = fixture();
        let quantities: Vec<_> = f.snapshot().sales_of(BookId(1)).iter().map(|s| s.quantity).collect();
        assert_eq!(quantities, vec![25, 40]);
        assert!(f.snapshot().sales_of(BookId(42)).is_empty());
    }

    #[test]
    fn test_earnings() {
        let f = fixture();
        assert_eq!(f.snapshot().earnings(AuthorId(1)), Money::from_units(3825));
        assert_eq!(f.snapshot().earnings(AuthorId(2)), Money::from_units(9375));
        assert_eq!(f.snapshot().earnings(AuthorId(3)), Money::ZERO);
        assert_eq!(f.snapshot().earnings(AuthorId(99)), Money::ZERO);
    }

    #[test]
    fn test_financials_subtracts_withdrawals() {
        let mut f = fixture();
        let at = Utc.with_ymd_and_hms(2025, 2, 1, 9, 0, 0).unwrap();
        f.withdrawals.push(Withdrawal::pending(
            WithdrawalId(1),
            AuthorId(1),
            Money::from_units(1000),
            at,
        ));
        f.withdrawals.push(Withdrawal::pending(
            WithdrawalId(2),
            AuthorId(2),
            Money::from_units(700),
            at,
        ));

        let financials = f.snapshot().financials(AuthorId(1));
        assert_eq!(financials.total_earnings, Money::from_units(3825));
        assert_eq!(financials.current_balance, Money::from_units(2825));
        assert_eq!(f.snapshot().withdrawn_to_date(AuthorId(1)), Money::from_units(1000));
        assert_eq!(f.snapshot().withdrawn_to_date(AuthorId(3)), Money::ZERO);
    }

    #[test]
    fn test_book_summaries() {
        let f = fixture();
        let summaries = f.snapshot().book_summaries(AuthorId(1));
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].title, "The Silent River");
        assert_eq!(summaries[0].total_sold, 65);
        assert_eq!(summaries[0].total_royalty, Money::from_units(2925));
        assert_eq!(summaries[1].total_sold, 15);
        assert_eq!(summaries[1].total_royalty, Money::from_units(900));
    }

    #[test]
    fn test_author_sales_newest_first_with_stable_ties() {
        let f = fixture();
        let lines = f.snapshot().author_sales(AuthorId(2));
        let view: Vec<_> = lines
            .iter()
            .map(|l| (l.sale_date.to_string(), l.book_title.as_str(), l.quantity))
            .collect();
        assert_eq!(
            view,
            vec![
                ("2025-01-10".to_string(), "Code & Coffee", 45),
                ("2025-01-10".to_string(), "Startup Diaries", 30),
                ("2025-01-03".to_string(), "Code & Coffee", 60),
            ]
        );
        assert_eq!(lines[0].royalty_earned, Money::from_units(3375));
    }

    #[test]
    fn test_author_withdrawals_newest_first() {
        let mut f = fixture();
        for (id, hour) in [(1, 9), (2, 11), (3, 10)] {
            f.withdrawals.push(Withdrawal::pending(
                WithdrawalId(id),
                AuthorId(1),
                Money::from_units(500),
                Utc.with_ymd_and_hms(2025, 2, 1, hour, 0, 0).unwrap(),
            ));
        }
        let ids: Vec<_> = f
            .snapshot()
            .author_withdrawals(AuthorId(1))
            .iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ids, vec![WithdrawalId(2), WithdrawalId(3), WithdrawalId(1)]);
        assert!(f.snapshot().author_withdrawals(AuthorId(2)).is_empty());
    }

    #[test]
    fn test_author_summaries_cover_every_author() {
        let f = fixture();
        let summaries = f.snapshot().author_summaries();
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[2].id, AuthorId(3));
        assert_eq!(summaries[2].total_earnings, Money::ZERO);
        assert_eq!(summaries[2].current_balance, Money::ZERO);
    }
}
