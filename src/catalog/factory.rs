use std::sync::Arc;
use crate::books::factory;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(config: &Configuration, store: RepositoryStore) -> Arc<dyn CatalogService> {
    let book_repo = factory::create_book_repository(store);
    let publisher = create_publisher(store.gateway_publisher());
    Arc::new(CatalogServiceImpl::new(config, book_repo, publisher))
}

#[cfg(test)]
mod tests {
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_create_catalog_service() {
        let svc = factory::create_catalog_service(&Configuration::new("test"), RepositoryStore::InMemory);
        assert_eq!(0, svc.list_books().await.expect("should list books").len());
    }
}
