pub mod memory_user_repository;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, UserKind};
use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;

#[async_trait]
pub trait UserRepository: Repository<UserEntity> {
    async fn find_by_kind(&self, kind: UserKind) -> LibraryResult<Vec<UserEntity>>;
}
