use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult, UserKind};
use crate::utils::date::serializer;

// UserEntity models the two registry roles as a tagged variant; capability
// differences are selected by pattern match rather than dispatch. The user_id
// is caller-supplied and unique within the registry.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum UserEntity {
    Patron {
        user_id: String,
        version: i64,
        name: String,
        membership_expires_on: NaiveDate,
        // order reflects borrow order; an isbn appears here iff the book's
        // borrowed_by equals this patron's user_id
        borrowed_isbns: Vec<String>,
        #[serde(with = "serializer")]
        created_at: NaiveDateTime,
        #[serde(with = "serializer")]
        updated_at: NaiveDateTime,
    },
    Librarian {
        user_id: String,
        version: i64,
        name: String,
        #[serde(with = "serializer")]
        created_at: NaiveDateTime,
        #[serde(with = "serializer")]
        updated_at: NaiveDateTime,
    },
}

impl UserEntity {
    pub fn new_patron(user_id: &str, name: &str, membership_expires_on: NaiveDate) -> Self {
        UserEntity::Patron {
            user_id: user_id.to_string(),
            version: 0,
            name: name.to_string(),
            membership_expires_on,
            borrowed_isbns: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn new_librarian(user_id: &str, name: &str) -> Self {
        UserEntity::Librarian {
            user_id: user_id.to_string(),
            version: 0,
            name: name.to_string(),
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            UserEntity::Patron { name, .. } => name.as_str(),
            UserEntity::Librarian { name, .. } => name.as_str(),
        }
    }

    pub fn kind(&self) -> UserKind {
        match self {
            UserEntity::Patron { .. } => UserKind::Patron,
            UserEntity::Librarian { .. } => UserKind::Librarian,
        }
    }

    pub fn can_borrow(&self) -> bool {
        matches!(self, UserEntity::Patron { .. })
    }

    pub fn can_manage_catalog(&self) -> bool {
        matches!(self, UserEntity::Librarian { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            UserEntity::Patron { name, .. } => {
                format!("Member {} can borrow and return books", name)
            }
            UserEntity::Librarian { name, .. } => {
                format!("Librarian {} can add and remove books", name)
            }
        }
    }

    pub fn is_membership_expired(&self, as_of: NaiveDate) -> bool {
        match self {
            UserEntity::Patron { membership_expires_on, .. } => as_of > *membership_expires_on,
            UserEntity::Librarian { .. } => false,
        }
    }

    pub fn borrowed_isbns(&self) -> &[String] {
        match self {
            UserEntity::Patron { borrowed_isbns, .. } => borrowed_isbns.as_slice(),
            UserEntity::Librarian { .. } => &[],
        }
    }

    pub fn borrow_book(&mut self, book: &mut BookEntity, as_of: NaiveDate) -> LibraryResult<()> {
        match self {
            UserEntity::Librarian { user_id, .. } => {
                Err(LibraryError::unauthorized(
                    format!("user {} is not a member and cannot borrow books", user_id).as_str()))
            }
            UserEntity::Patron { user_id, name, membership_expires_on, borrowed_isbns, .. } => {
                if as_of > *membership_expires_on {
                    return Err(LibraryError::membership_expired(
                        format!("membership for {} has expired", name).as_str()));
                }
                book.borrow(user_id.as_str(), as_of)?;
                borrowed_isbns.push(book.isbn.to_string());
                Ok(())
            }
        }
    }

    pub fn return_book(&mut self, book: &mut BookEntity) -> LibraryResult<()> {
        match self {
            UserEntity::Librarian { user_id, .. } => {
                Err(LibraryError::unauthorized(
                    format!("user {} is not a member and cannot return books", user_id).as_str()))
            }
            UserEntity::Patron { name, borrowed_isbns, .. } => {
                let pos = borrowed_isbns.iter().position(|isbn| isbn == &book.isbn)
                    .ok_or_else(|| LibraryError::invalid_state(
                        format!("{} does not currently hold book {}", name, book.isbn).as_str()))?;
                book.return_book()?;
                // exactly one occurrence, remaining order preserved
                borrowed_isbns.remove(pos);
                Ok(())
            }
        }
    }

    pub fn bump_version(&mut self) {
        match self {
            UserEntity::Patron { version, .. } | UserEntity::Librarian { version, .. } => {
                *version += 1;
            }
        }
    }

    pub fn touch(&mut self) {
        match self {
            UserEntity::Patron { updated_at, .. } | UserEntity::Librarian { updated_at, .. } => {
                *updated_at = Utc::now().naive_utc();
            }
        }
    }
}

impl Identifiable for UserEntity {
    fn id(&self) -> String {
        match self {
            UserEntity::Patron { user_id, .. } => user_id.to_string(),
            UserEntity::Librarian { user_id, .. } => user_id.to_string(),
        }
    }

    fn version(&self) -> i64 {
        match self {
            UserEntity::Patron { version, .. } => *version,
            UserEntity::Librarian { version, .. } => *version,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;
    use crate::core::library::{LibraryError, UserKind};
    use crate::users::domain::model::UserEntity;

    fn active_member() -> UserEntity {
        UserEntity::new_patron("M001", "Sarah Ahmed", Utc::now().date_naive() + Duration::days(365))
    }

    #[tokio::test]
    async fn test_should_build_patron() {
        let member = active_member();
        assert_eq!("M001", member.id().as_str());
        assert_eq!("Sarah Ahmed", member.name());
        assert_eq!(UserKind::Patron, member.kind());
        assert!(member.can_borrow());
        assert!(!member.can_manage_catalog());
        assert!(member.borrowed_isbns().is_empty());
    }

    #[tokio::test]
    async fn test_should_build_librarian() {
        let librarian = UserEntity::new_librarian("L001", "Dr. Khalid Al-Ali");
        assert_eq!("L001", librarian.id().as_str());
        assert_eq!(UserKind::Librarian, librarian.kind());
        assert!(!librarian.can_borrow());
        assert!(librarian.can_manage_catalog());
        assert!(!librarian.is_membership_expired(Utc::now().date_naive()));
    }

    #[tokio::test]
    async fn test_should_describe_capabilities() {
        assert_eq!("Member Sarah Ahmed can borrow and return books",
                   active_member().describe());
        assert_eq!("Librarian Dr. Khalid Al-Ali can add and remove books",
                   UserEntity::new_librarian("L001", "Dr. Khalid Al-Ali").describe());
    }

    #[tokio::test]
    async fn test_should_check_membership_expiry() {
        let today = Utc::now().date_naive();
        let member = UserEntity::new_patron("M002", "Ali Mohammed", today);
        // not expired on the expiry day itself, strictly after
        assert!(!member.is_membership_expired(today));
        assert!(member.is_membership_expired(today + Duration::days(1)));
    }

    #[tokio::test]
    async fn test_should_borrow_and_return_book() {
        let mut member = active_member();
        let mut book = BookEntity::new("title", "author", "isbn-1");
        let today = Utc::now().date_naive();

        member.borrow_book(&mut book, today).expect("should borrow");
        assert_eq!(vec!["isbn-1".to_string()], member.borrowed_isbns().to_vec());
        assert_eq!(Some("M001".to_string()), book.borrowed_by);

        member.return_book(&mut book).expect("should return");
        assert!(member.borrowed_isbns().is_empty());
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_not_borrow_with_expired_membership() {
        let today = Utc::now().date_naive();
        let mut member = UserEntity::new_patron("M002", "Ali Mohammed", today - Duration::days(1));
        let mut book = BookEntity::new("title", "author", "isbn-1");

        let res = member.borrow_book(&mut book, today);
        assert!(matches!(res, Err(LibraryError::MembershipExpired { message: _ })));
        assert!(book.is_available());
        assert!(member.borrowed_isbns().is_empty());
    }

    #[tokio::test]
    async fn test_should_not_borrow_as_librarian() {
        let mut librarian = UserEntity::new_librarian("L001", "Dr. Khalid Al-Ali");
        let mut book = BookEntity::new("title", "author", "isbn-1");
        let res = librarian.borrow_book(&mut book, Utc::now().date_naive());
        assert!(matches!(res, Err(LibraryError::Unauthorized { message: _ })));
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_not_return_book_not_held() {
        let mut member = active_member();
        let mut book = BookEntity::new("title", "author", "isbn-1");
        book.borrow("M009", Utc::now().date_naive()).expect("should borrow");

        let res = member.return_book(&mut book);
        assert!(matches!(res, Err(LibraryError::InvalidState { message: _ })));
        assert_eq!(Some("M009".to_string()), book.borrowed_by);
    }

    #[tokio::test]
    async fn test_should_preserve_borrow_order_on_return() {
        let mut member = active_member();
        let today = Utc::now().date_naive();
        let mut first = BookEntity::new("first", "author", "isbn-1");
        let mut second = BookEntity::new("second", "author", "isbn-2");
        let mut third = BookEntity::new("third", "author", "isbn-3");
        member.borrow_book(&mut first, today).expect("should borrow");
        member.borrow_book(&mut second, today).expect("should borrow");
        member.borrow_book(&mut third, today).expect("should borrow");

        member.return_book(&mut second).expect("should return");
        assert_eq!(vec!["isbn-1".to_string(), "isbn-3".to_string()],
                   member.borrowed_isbns().to_vec());
    }

    #[tokio::test]
    async fn test_should_serialize_tagged_user() {
        let member = active_member();
        let json = serde_json::to_string(&member).expect("should serialize");
        assert!(json.contains("\"kind\":\"Patron\""));
        let parsed: UserEntity = serde_json::from_str(json.as_str()).expect("should deserialize");
        assert_eq!(member, parsed);
    }
}
