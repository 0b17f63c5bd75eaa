//! Fixed startup dataset.

use chrono::NaiveDate;
use royalty_core::ledger::{Author, Book, Sale};
use royalty_shared::types::{AuthorId, BookId, Money};

/// Seeded authors.
#[must_use]
pub fn authors() -> Vec<Author> {
    [
        (1, "Priya Sharma", "priya@email.com", "1234567890", "HDFC0001234"),
        (2, "Rahul Verma", "rahul@email.com", "0987654321", "ICIC0005678"),
        (3, "Anita Desai", "anita@email.com", "5678901234", "SBIN0009012"),
    ]
    .into_iter()
    .map(|(id, name, email, account, routing)| Author {
        id: AuthorId(id),
        name: name.to_string(),
        email: email.to_string(),
        bank_account: account.to_string(),
        routing_code: routing.to_string(),
    })
    .collect()
}

/// Seeded books.
#[must_use]
pub fn books() -> Vec<Book> {
    [
        (1, 1, "The Silent River", 45),
        (2, 1, "Midnight in Mumbai", 60),
        (3, 2, "Code & Coffee", 75),
        (4, 2, "Startup Diaries", 50),
        (5, 2, "Poetry of Pain", 30),
        (6, 3, "Garden of Words", 40),
    ]
    .into_iter()
    .map(|(id, author_id, title, rate)| Book {
        id: BookId(id),
        author_id: AuthorId(author_id),
        title: title.to_string(),
        royalty_per_sale: Money::from_units(rate),
    })
    .collect()
}

/// Seeded sales, all in January 2025.
#[must_use]
pub fn sales() -> Vec<Sale> {
    [
        (1, 25, 5),
        (1, 40, 12),
        (2, 15, 8),
        (3, 60, 3),
        (3, 45, 15),
        (4, 30, 10),
        (5, 20, 18),
        (6, 10, 20),
    ]
    .into_iter()
    .map(|(book_id, quantity, day)| Sale {
        book_id: BookId(book_id),
        quantity,
        date: NaiveDate::from_ymd_opt(2025, 1, day).expect("seed dates are valid"),
    })
    .collect()
}
