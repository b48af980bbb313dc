pub mod service;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, UserKind};
use crate::patrons::dto::UserDto;

#[async_trait]
pub trait PatronService: Sync + Send {
    async fn register_patron(&self, user: &UserDto) -> LibraryResult<UserDto>;
    async fn register_librarian(&self, user: &UserDto) -> LibraryResult<UserDto>;
    async fn update_user(&self, user: &UserDto) -> LibraryResult<()>;
    async fn find_user_by_id(&self, id: &str) -> LibraryResult<UserDto>;
    async fn find_users_by_kind(&self, kind: UserKind) -> LibraryResult<Vec<UserDto>>;
}
