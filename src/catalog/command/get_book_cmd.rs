use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub isbn: String,
}

impl GetBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: BookDto,
}

impl GetBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        self.catalog_service.find_book_by_isbn(req.isbn.as_str())
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_get_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let _ = AddBookCommand::new(svc.clone())
            .execute(AddBookCommandRequest::new("test book", "test author", "isbn", 2))
            .await.expect("should add book");

        let res = GetBookCommand::new(svc).execute(GetBookCommandRequest::new("isbn"))
            .await.expect("should get book");
        assert_eq!("test book", res.book.title.as_str());
    }

    #[tokio::test]
    async fn test_should_fail_get_unknown_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let res = GetBookCommand::new(svc).execute(GetBookCommandRequest::new("missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
