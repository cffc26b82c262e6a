use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::{self, serializer};

// BookEntity abstracts a book title in the library inventory; all physical
// copies of the same title share one entry keyed by ISBN.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub quantity: i64,
    pub issued_count: i64,
    pub version: i64,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, quantity: i64) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            quantity,
            issued_count: 0,
            version: 0,
            created_at: date::now(),
            updated_at: date::now(),
        }
    }

    pub fn available(&self) -> i64 {
        self.quantity - self.issued_count
    }

    // issue one copy; fails when every copy is already out
    pub fn issue(&mut self) -> bool {
        if self.issued_count < self.quantity {
            self.issued_count += 1;
            self.updated_at = date::now();
            true
        } else {
            false
        }
    }

    // return one copy; fails when no copies are out
    pub fn return_copy(&mut self) -> bool {
        if self.issued_count > 0 {
            self.issued_count -= 1;
            self.updated_at = date::now();
            true
        } else {
            false
        }
    }

    // merge a re-added quantity into the existing entry; title/author of
    // the incoming add are discarded on purpose
    pub fn restock(&mut self, quantity: i64) {
        self.quantity += quantity;
        self.updated_at = date::now();
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;

    #[tokio::test]
    async fn test_should_build_books() {
        let book = BookEntity::new("isbn", "title", "author", 3);
        assert_eq!("isbn", book.isbn.as_str());
        assert_eq!("title", book.title.as_str());
        assert_eq!("author", book.author.as_str());
        assert_eq!(3, book.quantity);
        assert_eq!(0, book.issued_count);
        assert_eq!(3, book.available());
    }

    #[tokio::test]
    async fn test_should_issue_until_saturated() {
        let mut book = BookEntity::new("isbn", "title", "author", 3);
        assert!(book.issue());
        assert!(book.issue());
        assert!(book.issue());
        assert_eq!(3, book.issued_count);
        assert_eq!(0, book.available());
        // no copies left, state must not change
        assert!(!book.issue());
        assert_eq!(3, book.issued_count);
        assert_eq!(3, book.quantity);
    }

    #[tokio::test]
    async fn test_should_not_return_below_floor() {
        let mut book = BookEntity::new("isbn", "title", "author", 2);
        assert!(!book.return_copy());
        assert_eq!(0, book.issued_count);
        assert!(book.issue());
        assert!(book.return_copy());
        assert_eq!(0, book.issued_count);
        assert_eq!(2, book.available());
    }

    #[tokio::test]
    async fn test_should_restock_without_touching_issued() {
        let mut book = BookEntity::new("isbn", "title", "author", 2);
        assert!(book.issue());
        book.restock(3);
        assert_eq!(5, book.quantity);
        assert_eq!(1, book.issued_count);
        assert_eq!(4, book.available());
    }

    #[tokio::test]
    async fn test_should_keep_issue_return_balance() {
        let mut book = BookEntity::new("isbn", "title", "author", 2);
        for _ in 0..10 {
            let _ = book.issue();
            assert!(book.issued_count >= 0 && book.issued_count <= book.quantity);
        }
        for _ in 0..10 {
            let _ = book.return_copy();
            assert!(book.issued_count >= 0 && book.issued_count <= book.quantity);
        }
    }

    #[tokio::test]
    async fn test_should_not_issue_zero_quantity() {
        let mut book = BookEntity::new("isbn", "title", "author", 0);
        assert!(!book.issue());
        assert_eq!(0, book.available());
    }
}
