use std::sync::Arc;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct IssueBookCommand {
    catalog_service: Arc<dyn CatalogService>,
}

impl IssueBookCommand {
    pub fn new(catalog_service: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IssueBookCommandRequest {
    pub isbn: String,
}

impl IssueBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IssueBookCommandResponse {
    pub book: BookDto,
}

impl IssueBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<IssueBookCommandRequest, IssueBookCommandResponse> for IssueBookCommand {
    async fn execute(&self, req: IssueBookCommandRequest) -> Result<IssueBookCommandResponse, CommandError> {
        self.catalog_service.issue_book(req.isbn.as_str())
            .await.map_err(CommandError::from).map(IssueBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_issue_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let _ = AddBookCommand::new(svc.clone())
            .execute(AddBookCommandRequest::new("test book", "test author", "isbn", 1))
            .await.expect("should add book");

        let cmd = IssueBookCommand::new(svc);
        let res = cmd.execute(IssueBookCommandRequest::new("isbn"))
            .await.expect("should issue book");
        assert_eq!(1, res.book.issued_count);
        assert_eq!(0, res.book.available());

        // all copies out now
        let res = cmd.execute(IssueBookCommandRequest::new("isbn")).await;
        assert!(matches!(res, Err(CommandError::Unavailable { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_fail_issue_unknown_book() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        let res = IssueBookCommand::new(svc).execute(IssueBookCommandRequest::new("missing")).await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
