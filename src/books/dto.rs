use std::fmt;
use std::fmt::{Display, Formatter};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::utils::date::{self, serializer};

// BookDto is a data transfer object for the catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
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

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, quantity: i64) -> BookDto {
        BookDto {
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
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Display for BookDto {
    // canonical entry line rendered by the front end, padded for column alignment
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Title: {:<20} | Author: {:<15} | ISBN: {:<10} | Available: {}/{}",
               self.title, self.author, self.isbn, self.available(), self.quantity)
    }
}
