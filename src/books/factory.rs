use crate::books::repository::BookRepository;
use crate::books::repository::mem_book_repository::MemBookRepository;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::InMemory => {
            Box::new(MemBookRepository::new())
        }
    }
}
