use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::UserKind;
use crate::patrons::Borrower;
use crate::utils::date::serializer;

// UserDto is the flat transfer shape over both registry roles; the expiry
// date is only present for members.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub user_id: String,
    pub version: i64,
    pub name: String,
    pub kind: UserKind,
    pub membership_expires_on: Option<NaiveDate>,
    pub borrowed_isbns: Vec<String>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl UserDto {
    pub fn new_patron(user_id: &str, name: &str, membership_expires_on: NaiveDate) -> Self {
        Self {
            user_id: user_id.to_string(),
            version: 0,
            name: name.to_string(),
            kind: UserKind::Patron,
            membership_expires_on: Some(membership_expires_on),
            borrowed_isbns: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn new_librarian(user_id: &str, name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            version: 0,
            name: name.to_string(),
            kind: UserKind::Librarian,
            membership_expires_on: None,
            borrowed_isbns: vec![],
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn from_json(data: &str) -> Option<UserDto> {
        serde_json::from_str(data).ok()
    }
}

impl Identifiable for UserDto {
    fn id(&self) -> String {
        self.user_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

impl Borrower for UserDto {
    fn is_patron(&self) -> bool {
        self.is_kind(UserKind::Patron)
    }

    fn is_librarian(&self) -> bool {
        self.is_kind(UserKind::Librarian)
    }

    fn is_kind(&self, match_kind: UserKind) -> bool {
        self.kind == match_kind
    }

    fn can_borrow(&self) -> bool {
        self.is_patron()
    }

    fn can_manage_catalog(&self) -> bool {
        self.is_librarian()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use crate::core::library::UserKind;
    use crate::patrons::Borrower;
    use crate::patrons::dto::UserDto;

    #[tokio::test]
    async fn test_should_build_patron() {
        let member = UserDto::new_patron("M001", "Sarah Ahmed",
                                         Utc::now().date_naive() + Duration::days(365));
        assert_eq!("M001", member.user_id.as_str());
        assert_eq!(UserKind::Patron, member.kind);
        assert!(member.is_patron());
        assert!(member.can_borrow());
        assert!(!member.is_librarian());
        assert!(!member.can_manage_catalog());
    }

    #[tokio::test]
    async fn test_should_build_librarian() {
        let librarian = UserDto::new_librarian("L001", "Dr. Khalid Al-Ali");
        assert_eq!(UserKind::Librarian, librarian.kind);
        assert_eq!(None, librarian.membership_expires_on);
        assert!(librarian.is_librarian());
        assert!(librarian.can_manage_catalog());
        assert!(!librarian.can_borrow());
    }

    #[tokio::test]
    async fn test_should_serialize_user() {
        let member = UserDto::new_patron("M001", "Sarah Ahmed",
                                         Utc::now().date_naive() + Duration::days(30));
        let json = member.to_json();
        let parsed = UserDto::from_json(json.as_str()).expect("should deserialize");
        assert_eq!(member, parsed);
    }
}
