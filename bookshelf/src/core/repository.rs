use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, rejecting duplicate keys
    async fn create(&self, entity: &Entity) -> LibraryResult<()>;

    // updates an entity and returns the stored value
    async fn update(&self, entity: &Entity) -> LibraryResult<Entity>;

    // get an entity
    async fn get(&self, id: i64) -> LibraryResult<Entity>;

    // delete an entity and returns the removed value
    async fn delete(&self, id: i64) -> LibraryResult<Entity>;

    // all entities in insertion order
    async fn list(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
    SeededMemory,
}

impl RepositoryStore {
    pub fn seeded(&self) -> bool {
        match self {
            RepositoryStore::Memory => false,
            RepositoryStore::SeededMemory => true,
        }
    }
}
