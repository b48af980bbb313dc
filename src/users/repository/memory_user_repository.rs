use async_trait::async_trait;
use parking_lot::RwLock;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, UserKind};
use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;

// MemoryUserRepository keys registered users by caller-supplied user id and
// keeps insertion order.
#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<Vec<UserEntity>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Repository<UserEntity> for MemoryUserRepository {
    async fn create(&self, entity: &UserEntity) -> LibraryResult<usize> {
        let mut users = self.users.write();
        if users.iter().any(|u| u.id() == entity.id()) {
            return Err(LibraryError::conflict(
                format!("user with id {} already exists", entity.id()).as_str()));
        }
        users.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &UserEntity) -> LibraryResult<usize> {
        let mut users = self.users.write();
        let pos = users.iter().position(|u| u.id() == entity.id())
            .ok_or_else(|| LibraryError::not_found(
                format!("user with id {} not found", entity.id()).as_str()))?;
        if users[pos].version() != entity.version() {
            return Err(LibraryError::conflict(
                format!("stale version {} for user {}", entity.version(), entity.id()).as_str()));
        }
        let mut updated = entity.clone();
        updated.bump_version();
        updated.touch();
        users[pos] = updated;
        Ok(1)
    }

    async fn get(&self, key: &str) -> LibraryResult<UserEntity> {
        self.users.read().iter().find(|u| u.id() == key).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("user with id {} not found", key).as_str()))
    }

    async fn delete(&self, key: &str) -> LibraryResult<usize> {
        let mut users = self.users.write();
        let pos = users.iter().position(|u| u.id() == key)
            .ok_or_else(|| LibraryError::not_found(
                format!("user with id {} not found", key).as_str()))?;
        users.remove(pos);
        Ok(1)
    }

    async fn find_all(&self) -> LibraryResult<Vec<UserEntity>> {
        Ok(self.users.read().clone())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_kind(&self, kind: UserKind) -> LibraryResult<Vec<UserEntity>> {
        Ok(self.users.read().iter().filter(|u| u.kind() == kind).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use crate::core::domain::Identifiable;
    use crate::core::library::{LibraryError, UserKind};
    use crate::core::repository::Repository;
    use crate::users::domain::model::UserEntity;
    use crate::users::repository::UserRepository;
    use crate::users::repository::memory_user_repository::MemoryUserRepository;

    fn member(id: &str, name: &str) -> UserEntity {
        UserEntity::new_patron(id, name, Utc::now().date_naive() + Duration::days(365))
    }

    #[tokio::test]
    async fn test_should_create_and_get_user() {
        let repo = MemoryUserRepository::new();
        let user = member("M001", "Sarah Ahmed");
        repo.create(&user).await.expect("should create");
        let loaded = repo.get("M001").await.expect("should get");
        assert_eq!(user, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_user_id() {
        let repo = MemoryUserRepository::new();
        repo.create(&member("M001", "Sarah Ahmed")).await.expect("should create");
        let res = repo.create(&UserEntity::new_librarian("M001", "Dr. Khalid Al-Ali")).await;
        assert!(matches!(res, Err(LibraryError::Conflict { message: _ })));
    }

    #[tokio::test]
    async fn test_should_update_and_bump_version() {
        let repo = MemoryUserRepository::new();
        let user = member("M001", "Sarah Ahmed");
        repo.create(&user).await.expect("should create");
        repo.update(&user).await.expect("should update");

        let loaded = repo.get("M001").await.expect("should get");
        assert_eq!(1, loaded.version());

        // a caller holding the original version is stale now
        let res = repo.update(&user).await;
        assert!(matches!(res, Err(LibraryError::Conflict { message: _ })));
    }

    #[tokio::test]
    async fn test_should_delete_user() {
        let repo = MemoryUserRepository::new();
        repo.create(&member("M001", "Sarah Ahmed")).await.expect("should create");
        repo.delete("M001").await.expect("should delete");
        assert!(repo.get("M001").await.is_err());
    }

    #[tokio::test]
    async fn test_should_find_by_kind() {
        let repo = MemoryUserRepository::new();
        repo.create(&member("M001", "Sarah Ahmed")).await.expect("should create");
        repo.create(&member("M002", "Ali Mohammed")).await.expect("should create");
        repo.create(&UserEntity::new_librarian("L001", "Dr. Khalid Al-Ali")).await.expect("should create");

        let members = repo.find_by_kind(UserKind::Patron).await.expect("should find");
        assert_eq!(2, members.len());
        let ids: Vec<String> = members.iter().map(|u| u.id()).collect();
        assert_eq!(vec!["M001".to_string(), "M002".to_string()], ids);
    }
}
