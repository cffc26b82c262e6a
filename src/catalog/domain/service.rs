use std::collections::HashMap;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
            events_publisher,
        }
    }

    fn metadata(&self) -> HashMap<String, String> {
        HashMap::from([("branch".to_string(), self.branch_id.to_string())])
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        match self.book_repository.get(book.isbn.as_str()).await {
            Ok(mut existing) => {
                // duplicate ISBN: quantities merge, title/author of the
                // incoming add are discarded, issued_count is untouched
                existing.restock(book.quantity);
                let _ = self.book_repository.update(&existing).await?;
                let merged = BookDto::from(&self.book_repository.get(book.isbn.as_str()).await?);
                let _ = self.events_publisher.publish(&DomainEvent::updated(
                    "book_restocked", merged.isbn.as_str(), &self.metadata(), &merged)?).await?;
                Ok(merged)
            }
            Err(LibraryError::NotFound { .. }) => {
                let _ = self.book_repository.create(&BookEntity::from(book)).await?;
                let _ = self.events_publisher.publish(&DomainEvent::added(
                    "book_added", book.isbn.as_str(), &self.metadata(), book)?).await?;
                Ok(book.clone())
            }
            Err(other) => Err(other),
        }
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let res = self.book_repository.delete(isbn).await.map(|_| ())?;
        let data = isbn.to_string();
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "book_removed", isbn, &self.metadata(), &data)?).await?;
        Ok(res)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn issue_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(isbn).await?;
        if !book.issue() {
            return Err(LibraryError::unavailable(
                format!("no available copies of book with isbn {}", isbn).as_str(), None));
        }
        let _ = self.book_repository.update(&book).await?;
        let dto = BookDto::from(&book);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "book_issued", isbn, &self.metadata(), &dto)?).await?;
        Ok(dto)
    }

    async fn return_book(&self, isbn: &str) -> LibraryResult<BookDto> {
        let mut book = self.book_repository.get(isbn).await?;
        if !book.return_copy() {
            return Err(LibraryError::unavailable(
                format!("no issued copies of book with isbn {}", isbn).as_str(), None));
        }
        let _ = self.book_repository.update(&book).await?;
        let dto = BookDto::from(&book);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "book_returned", isbn, &self.metadata(), &dto)?).await?;
        Ok(dto)
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let res = self.book_repository.list().await?;
        Ok(res.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            quantity: other.quantity,
            issued_count: other.issued_count,
            version: other.version,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            quantity: other.quantity,
            issued_count: other.issued_count,
            version: other.version,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
