use std::sync::Arc;
use async_trait::async_trait;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult, UserKind};
use crate::gateway::logs::ActivityLog;
use crate::patrons::Borrower;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;
use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;

pub struct PatronServiceImpl {
    user_repository: Arc<dyn UserRepository>,
    activity_log: Arc<dyn ActivityLog>,
}

impl PatronServiceImpl {
    pub fn new(_config: &Configuration, user_repository: Arc<dyn UserRepository>,
               activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            user_repository,
            activity_log,
        }
    }

    async fn register(&self, user: &UserDto) -> LibraryResult<UserDto> {
        let entity = UserEntity::try_from(user)?;
        self.user_repository.create(&entity).await?;
        self.activity_log.append(
            format!("New user registered: {}", entity.name()).as_str()).await;
        self.activity_log.append(entity.describe().as_str()).await;
        Ok(UserDto::from(&entity))
    }
}

#[async_trait]
impl PatronService for PatronServiceImpl {
    async fn register_patron(&self, user: &UserDto) -> LibraryResult<UserDto> {
        if !user.is_kind(UserKind::Patron) {
            return Err(LibraryError::validation(
                format!("user {} is not a member", user.user_id).as_str(), Some("400".to_string())));
        }
        self.register(user).await
    }

    async fn register_librarian(&self, user: &UserDto) -> LibraryResult<UserDto> {
        if !user.is_kind(UserKind::Librarian) {
            return Err(LibraryError::validation(
                format!("user {} is not a librarian", user.user_id).as_str(), Some("400".to_string())));
        }
        self.register(user).await
    }

    async fn update_user(&self, user: &UserDto) -> LibraryResult<()> {
        let entity = UserEntity::try_from(user)?;
        self.user_repository.update(&entity).await.map(|_| ())
    }

    async fn find_user_by_id(&self, id: &str) -> LibraryResult<UserDto> {
        self.user_repository.get(id).await.map(|u| UserDto::from(&u))
    }

    async fn find_users_by_kind(&self, kind: UserKind) -> LibraryResult<Vec<UserDto>> {
        let users = self.user_repository.find_by_kind(kind).await?;
        Ok(users.iter().map(UserDto::from).collect())
    }
}

impl From<&UserEntity> for UserDto {
    fn from(other: &UserEntity) -> UserDto {
        match other {
            UserEntity::Patron {
                user_id, version, name, membership_expires_on, borrowed_isbns,
                created_at, updated_at,
            } => UserDto {
                user_id: user_id.to_string(),
                version: *version,
                name: name.to_string(),
                kind: UserKind::Patron,
                membership_expires_on: Some(*membership_expires_on),
                borrowed_isbns: borrowed_isbns.clone(),
                created_at: *created_at,
                updated_at: *updated_at,
            },
            UserEntity::Librarian { user_id, version, name, created_at, updated_at } => UserDto {
                user_id: user_id.to_string(),
                version: *version,
                name: name.to_string(),
                kind: UserKind::Librarian,
                membership_expires_on: None,
                borrowed_isbns: vec![],
                created_at: *created_at,
                updated_at: *updated_at,
            },
        }
    }
}

impl TryFrom<&UserDto> for UserEntity {
    type Error = LibraryError;

    fn try_from(other: &UserDto) -> Result<Self, Self::Error> {
        match other.kind {
            UserKind::Patron => {
                let membership_expires_on = other.membership_expires_on.ok_or_else(|| {
                    LibraryError::validation(
                        format!("member {} requires a membership expiry date", other.user_id).as_str(),
                        Some("400".to_string()))
                })?;
                Ok(UserEntity::Patron {
                    user_id: other.user_id.to_string(),
                    version: other.version,
                    name: other.name.to_string(),
                    membership_expires_on,
                    borrowed_isbns: other.borrowed_isbns.clone(),
                    created_at: other.created_at,
                    updated_at: other.updated_at,
                })
            }
            UserKind::Librarian => Ok(UserEntity::Librarian {
                user_id: other.user_id.to_string(),
                version: other.version,
                name: other.name.to_string(),
                created_at: other.created_at,
                updated_at: other.updated_at,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use chrono::{Duration, Utc};
    use crate::core::domain::Configuration;
    use crate::core::library::{LibraryError, UserKind};
    use crate::gateway::logs::{ActivityLog, SessionLog};
    use crate::patrons::domain::PatronService;
    use crate::patrons::dto::UserDto;
    use crate::patrons::factory;
    use crate::users::factory::create_user_repository;

    fn create_service_with_log() -> (Box<dyn PatronService>, Arc<SessionLog>) {
        let log = Arc::new(SessionLog::new(10));
        let svc = factory::create_patron_service(
            &Configuration::new("test"), create_user_repository(), log.clone());
        (svc, log)
    }

    fn member(id: &str, name: &str) -> UserDto {
        UserDto::new_patron(id, name, Utc::now().date_naive() + Duration::days(365))
    }

    #[tokio::test]
    async fn test_should_register_patron() {
        let (patron_svc, log) = create_service_with_log();

        let registered = patron_svc.register_patron(&member("M001", "Sarah Ahmed"))
            .await.expect("should register");
        assert_eq!("M001", registered.user_id.as_str());

        let loaded = patron_svc.find_user_by_id("M001").await.expect("should return user");
        assert_eq!(UserKind::Patron, loaded.kind);

        let recent = log.recent(10).await;
        assert!(recent[0].ends_with("New user registered: Sarah Ahmed"));
        assert!(recent[1].ends_with("Member Sarah Ahmed can borrow and return books"));
    }

    #[tokio::test]
    async fn test_should_register_librarian() {
        let (patron_svc, _log) = create_service_with_log();

        let librarian = UserDto::new_librarian("L001", "Dr. Khalid Al-Ali");
        patron_svc.register_librarian(&librarian).await.expect("should register");

        let loaded = patron_svc.find_user_by_id("L001").await.expect("should return user");
        assert_eq!(UserKind::Librarian, loaded.kind);
    }

    #[tokio::test]
    async fn test_should_reject_mismatched_kind() {
        let (patron_svc, _log) = create_service_with_log();

        let librarian = UserDto::new_librarian("L001", "Dr. Khalid Al-Ali");
        let res = patron_svc.register_patron(&librarian).await;
        assert!(matches!(res, Err(LibraryError::Validation { message: _, reason_code: _ })));

        let res = patron_svc.register_librarian(&member("M001", "Sarah Ahmed")).await;
        assert!(matches!(res, Err(LibraryError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_registration() {
        let (patron_svc, _log) = create_service_with_log();

        patron_svc.register_patron(&member("M001", "Sarah Ahmed")).await.expect("should register");
        let res = patron_svc.register_patron(&member("M001", "Ali Mohammed")).await;
        assert!(matches!(res, Err(LibraryError::Conflict { message: _ })));
    }

    #[tokio::test]
    async fn test_should_reject_patron_without_expiry() {
        let (patron_svc, _log) = create_service_with_log();

        let mut user = member("M001", "Sarah Ahmed");
        user.membership_expires_on = None;
        let res = patron_svc.register_patron(&user).await;
        assert!(matches!(res, Err(LibraryError::Validation { message: _, reason_code: _ })));
    }

    #[tokio::test]
    async fn test_should_find_users_by_kind() {
        let (patron_svc, _log) = create_service_with_log();

        patron_svc.register_patron(&member("M001", "Sarah Ahmed")).await.expect("should register");
        patron_svc.register_patron(&member("M002", "Ali Mohammed")).await.expect("should register");
        patron_svc.register_librarian(&UserDto::new_librarian("L001", "Dr. Khalid Al-Ali"))
            .await.expect("should register");

        let members = patron_svc.find_users_by_kind(UserKind::Patron).await.expect("should find");
        assert_eq!(2, members.len());
        let librarians = patron_svc.find_users_by_kind(UserKind::Librarian).await.expect("should find");
        assert_eq!(1, librarians.len());
    }
}
