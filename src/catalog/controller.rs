use std::sync::Arc;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest};
use crate::catalog::command::issue_book_cmd::{IssueBookCommand, IssueBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::AppState;

// CatalogController adapts the six user-facing operations onto commands and
// renders their outcomes as append-only log lines. It holds the only
// long-lived handle to the catalog service; the console layer above it has
// no business logic.
pub struct CatalogController {
    state: AppState,
    catalog: Arc<dyn CatalogService>,
}

impl CatalogController {
    pub fn new(state: AppState) -> Self {
        let catalog = factory::create_catalog_service(&state.config, state.store);
        Self {
            state,
            catalog,
        }
    }

    pub async fn add_book(&self, title: &str, author: &str, isbn: &str, quantity: &str) -> String {
        // quantity parse comes before the emptiness check, matching the
        // original surface
        let quantity = match quantity.trim().parse::<i64>() {
            Ok(q) if q >= 0 => q,
            _ => return "[ERROR] Invalid quantity!".to_string(),
        };
        let (title, author, isbn) = (title.trim(), author.trim(), isbn.trim());
        if title.is_empty() || author.is_empty() || isbn.is_empty() {
            return "[ERROR] Missing fields!".to_string();
        }
        let req = AddBookCommandRequest::new(title, author, isbn, quantity);
        match AddBookCommand::new(self.catalog.clone()).execute(req).await {
            Ok(res) => format!("[ADDED] {}", res.book),
            Err(err) => format!("[ERROR] {:?}", err),
        }
    }

    pub async fn search_book(&self, isbn: &str) -> String {
        let req = GetBookCommandRequest::new(isbn.trim());
        match GetBookCommand::new(self.catalog.clone()).execute(req).await {
            Ok(res) => format!("[FOUND] {}", res.book),
            Err(_) => "[ERROR] Book not found!".to_string(),
        }
    }

    pub async fn display_books(&self) -> String {
        let req = ListBooksCommandRequest::new();
        let books = match ListBooksCommand::new(self.catalog.clone()).execute(req).await {
            Ok(res) => res.books,
            Err(err) => return format!("[ERROR] {:?}", err),
        };
        let mut out = format!("\n--- ALL BOOKS ({}) ---", books.len());
        if books.is_empty() {
            out.push_str("\nNo books in the library.");
        } else {
            for book in &books {
                out.push_str(format!("\n{}", book).as_str());
            }
        }
        out
    }

    pub async fn delete_book(&self, isbn: &str) -> String {
        let req = RemoveBookCommandRequest::new(isbn.trim());
        match RemoveBookCommand::new(self.catalog.clone()).execute(req).await {
            Ok(res) => format!("[DELETED] Book (ISBN: {})", res.isbn),
            Err(_) => "[ERROR] Book not found!".to_string(),
        }
    }

    pub async fn issue_book(&self, isbn: &str) -> String {
        let isbn = isbn.trim();
        let req = IssueBookCommandRequest::new(isbn);
        match IssueBookCommand::new(self.catalog.clone()).execute(req).await {
            Ok(_) => format!("[ISSUED] Book (ISBN: {})", isbn),
            // not-found and no-copies-available collapse into one line
            Err(_) => "[ERROR] Book unavailable or not found!".to_string(),
        }
    }

    pub async fn return_book(&self, isbn: &str) -> String {
        let isbn = isbn.trim();
        let req = ReturnBookCommandRequest::new(isbn);
        match ReturnBookCommand::new(self.catalog.clone()).execute(req).await {
            Ok(_) => format!("[RETURNED] Book (ISBN: {})", isbn),
            Err(_) => "[ERROR] No issued copies found!".to_string(),
        }
    }

    // one console line maps to at most one operation; None ends the session
    pub async fn dispatch(&self, line: &str) -> Option<String> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(' ') {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };
        match verb.to_lowercase().as_str() {
            "add" => {
                let mut fields = rest.split('|');
                let title = fields.next().unwrap_or("");
                let author = fields.next().unwrap_or("");
                let isbn = fields.next().unwrap_or("");
                let quantity = fields.next().unwrap_or("");
                Some(self.add_book(title, author, isbn, quantity).await)
            }
            "search" => Some(self.search_book(rest).await),
            "all" => Some(self.display_books().await),
            "delete" => Some(self.delete_book(rest).await),
            "issue" => Some(self.issue_book(rest).await),
            "return" => Some(self.return_book(rest).await),
            "quit" | "exit" => None,
            _ => Some(self.usage()),
        }
    }

    pub fn usage(&self) -> String {
        let mut out = format!("Library catalog for branch {}", self.state.config.branch_id);
        for line in [
            "  add <title> | <author> | <isbn> | <quantity>",
            "  search <isbn>",
            "  all",
            "  delete <isbn>",
            "  issue <isbn>",
            "  return <isbn>",
            "  quit",
        ] {
            out.push_str(format!("\n{}", line).as_str());
        }
        out
    }
}
