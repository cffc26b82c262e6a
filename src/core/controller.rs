use serde::{Deserialize, Serialize};
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

// AppState carries the front-end wiring options for the catalog
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: RepositoryStore,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            store,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::controller::AppState;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_build_app_state() {
        let state = AppState::new("test", RepositoryStore::InMemory);
        assert_eq!("test", state.config.branch_id.as_str());
        assert_eq!(RepositoryStore::InMemory, state.store);
    }
}
