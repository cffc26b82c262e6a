use std::collections::HashMap;
use async_trait::async_trait;
use tokio::sync::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// Catalog index: ISBN-keyed map plus the ISBNs in first-insertion order.
// Both always hold exactly the same key set.
#[derive(Debug, Default)]
struct CatalogIndex {
    by_isbn: HashMap<String, BookEntity>,
    insertion_order: Vec<String>,
}

// MemBookRepository keeps the whole catalog in process memory; nothing is
// persisted across restarts.
pub struct MemBookRepository {
    index: RwLock<CatalogIndex>,
}

impl MemBookRepository {
    pub fn new() -> Self {
        Self {
            index: RwLock::new(CatalogIndex::default()),
        }
    }
}

impl Default for MemBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<BookEntity> for MemBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut index = self.index.write().await;
        let isbn = entity.id();
        if index.by_isbn.contains_key(isbn.as_str()) {
            return Err(LibraryError::duplicate_key(
                format!("book with isbn {} already exists", isbn).as_str()));
        }
        index.insertion_order.push(isbn.to_string());
        index.by_isbn.insert(isbn, entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut index = self.index.write().await;
        let isbn = entity.id();
        let version = match index.by_isbn.get(isbn.as_str()) {
            Some(existing) => existing.version,
            None => {
                return Err(LibraryError::not_found(
                    format!("book with isbn {} not found", isbn).as_str()));
            }
        };
        let mut updated = entity.clone();
        updated.version = version + 1;
        index.by_isbn.insert(isbn, updated);
        Ok(1)
    }

    async fn get(&self, id: &str) -> LibraryResult<BookEntity> {
        let index = self.index.read().await;
        index.by_isbn.get(id).cloned().ok_or_else(|| {
            LibraryError::not_found(format!("book with isbn {} not found", id).as_str())
        })
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut index = self.index.write().await;
        match index.by_isbn.remove(id) {
            Some(_) => {
                index.insertion_order.retain(|isbn| isbn != id);
                Ok(1)
            }
            None => {
                Err(LibraryError::not_found(
                    format!("book with isbn {} not found", id).as_str()))
            }
        }
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let index = self.index.read().await;
        Ok(index.insertion_order.iter()
            .filter_map(|isbn| index.by_isbn.get(isbn).cloned())
            .collect())
    }
}

impl BookRepository for MemBookRepository {}
