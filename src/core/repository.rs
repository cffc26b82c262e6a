use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails on duplicate key
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an existing entity
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity by id
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity by id
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in first-insertion order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    InMemory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::InMemory => { GatewayPublisherVia::Logs }
        }
    }
}
