use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ListBooksCommandRequest {}

impl ListBooksCommandRequest {
    pub fn new() -> Self {
        Self {}
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, _req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books()
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_list_books_in_order() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let add_cmd = AddBookCommand::new(svc.clone());
        for isbn in ["isbn1", "isbn2"] {
            let _ = add_cmd.execute(AddBookCommandRequest::new("test book", "test author", isbn, 2))
                .await.expect("should add book");
        }

        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new())
            .await.expect("should list books");
        let isbns: Vec<&str> = res.books.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["isbn1", "isbn2"], isbns);
    }

    #[tokio::test]
    async fn test_should_run_list_books_when_empty() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let res = ListBooksCommand::new(svc).execute(ListBooksCommandRequest::new())
            .await.expect("should list books");
        assert!(res.books.is_empty());
    }
}
