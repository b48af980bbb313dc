use std::sync::Arc;
use crate::users::repository::UserRepository;
use crate::users::repository::memory_user_repository::MemoryUserRepository;

pub fn create_user_repository() -> Arc<dyn UserRepository> {
    Arc::new(MemoryUserRepository::new())
}
