use async_trait::async_trait;
use std::collections::HashMap;
use crate::core::library::LibraryResult;

// Repository keeps records in registration order; keys may repeat
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // appends an entity without checking for an existing key
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // replaces the first entity with the key
    async fn update(&self, key: &str, entity: &Entity) -> LibraryResult<usize>;

    // first entity with the key
    async fn get(&self, key: &str) -> LibraryResult<Entity>;

    // removes every entity with the key
    async fn delete(&self, key: &str) -> LibraryResult<usize>;

    // entities whose serialized fields equal every predicate value, an empty predicate matches all
    async fn query(&self, predicate: &HashMap::<String, String>) -> LibraryResult<Vec<Entity>>;
}
