use async_trait::async_trait;
use crate::core::library::LibraryResult;

// Repository abstracts the registry's keyed stores; implementations keep
// insertion order for iteration.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // insert a new entity, rejecting a duplicate business key
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // replace an existing entity, bumping its version
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // fetch an entity by business key
    async fn get(&self, key: &str) -> LibraryResult<Entity>;

    // remove an entity by business key
    async fn delete(&self, key: &str) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}
