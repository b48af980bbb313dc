use chrono::{NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::core::domain::{IdIssuer, Identifiable};
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::utils::date::{days_between, serializer};

// BookEntity abstracts a lendable work in the branch catalog. The isbn is the
// registry's lookup key; book_id stays an opaque identity assigned at creation.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct BookEntity {
    pub book_id: String,
    pub version: i64,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub book_status: BookStatus,
    pub borrowed_by: Option<String>,
    pub borrowed_on: Option<NaiveDate>,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, isbn: &str) -> Self {
        Self {
            book_id: IdIssuer.issue(),
            version: 0,
            title: title.to_string(),
            author: author.to_string(),
            isbn: isbn.to_string(),
            book_status: BookStatus::Available,
            borrowed_by: None,
            borrowed_on: None,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    pub fn is_available(&self) -> bool {
        self.book_status == BookStatus::Available
    }

    // Available -> Borrowed; the only legal transition out of Available
    pub fn borrow(&mut self, holder_id: &str, as_of: NaiveDate) -> LibraryResult<()> {
        if !self.is_available() {
            return Err(LibraryError::invalid_state(
                format!("book {} is already borrowed", self.isbn).as_str()));
        }
        self.book_status = BookStatus::Borrowed;
        self.borrowed_by = Some(holder_id.to_string());
        self.borrowed_on = Some(as_of);
        Ok(())
    }

    // Borrowed -> Available; clears all lending fields
    pub fn return_book(&mut self) -> LibraryResult<()> {
        if self.is_available() {
            return Err(LibraryError::invalid_state(
                format!("book {} is not currently borrowed", self.isbn).as_str()));
        }
        self.book_status = BookStatus::Available;
        self.borrowed_by = None;
        self.borrowed_on = None;
        Ok(())
    }

    // whole calendar days past the loan period; zero while available
    pub fn days_late(&self, as_of: NaiveDate, loan_days: i64) -> i64 {
        match self.borrowed_on {
            Some(borrowed_on) if !self.is_available() => {
                (days_between(borrowed_on, as_of) - loan_days).max(0)
            }
            _ => 0,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.book_id.to_string()
    }

    fn version(&self) -> i64 {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, Utc};
    use crate::books::domain::model::BookEntity;
    use crate::core::library::{BookStatus, LibraryError};

    fn sample_book() -> BookEntity {
        BookEntity::new("Modern Web Development", "Fatima Ali", "978-0987654321")
    }

    #[tokio::test]
    async fn test_should_build_book() {
        let book = sample_book();
        assert!(!book.book_id.is_empty());
        assert_eq!("Modern Web Development", book.title.as_str());
        assert_eq!("Fatima Ali", book.author.as_str());
        assert_eq!("978-0987654321", book.isbn.as_str());
        assert!(book.is_available());
        assert_eq!(None, book.borrowed_by);
        assert_eq!(None, book.borrowed_on);
    }

    #[tokio::test]
    async fn test_should_borrow_available_book() {
        let mut book = sample_book();
        let today = Utc::now().date_naive();
        book.borrow("M001", today).expect("should borrow");
        assert_eq!(BookStatus::Borrowed, book.book_status);
        assert_eq!(Some("M001".to_string()), book.borrowed_by);
        assert_eq!(Some(today), book.borrowed_on);
    }

    #[tokio::test]
    async fn test_should_not_borrow_borrowed_book() {
        let mut book = sample_book();
        let today = Utc::now().date_naive();
        book.borrow("M001", today).expect("should borrow");
        let res = book.borrow("M002", today);
        assert!(matches!(res, Err(LibraryError::InvalidState { message: _ })));
        // failed borrow leaves every field unchanged
        assert_eq!(Some("M001".to_string()), book.borrowed_by);
        assert_eq!(Some(today), book.borrowed_on);
    }

    #[tokio::test]
    async fn test_should_roundtrip_borrow_and_return() {
        let mut book = sample_book();
        let before = book.clone();
        book.borrow("M001", Utc::now().date_naive()).expect("should borrow");
        book.return_book().expect("should return");
        assert_eq!(before, book);
    }

    #[tokio::test]
    async fn test_should_not_return_available_book() {
        let mut book = sample_book();
        let res = book.return_book();
        assert!(matches!(res, Err(LibraryError::InvalidState { message: _ })));
        assert!(book.is_available());
    }

    #[tokio::test]
    async fn test_should_keep_status_and_holder_consistent() {
        let mut book = sample_book();
        assert_eq!(book.is_available(), book.borrowed_by.is_none());
        book.borrow("M001", Utc::now().date_naive()).expect("should borrow");
        assert_eq!(book.is_available(), book.borrowed_by.is_none());
        book.return_book().expect("should return");
        assert_eq!(book.is_available(), book.borrowed_by.is_none());
    }

    #[tokio::test]
    async fn test_should_compute_days_late() {
        let mut book = sample_book();
        let today = Utc::now().date_naive();
        assert_eq!(0, book.days_late(today, 14));

        book.borrow("M001", today - Duration::days(20)).expect("should borrow");
        assert_eq!(6, book.days_late(today, 14));
    }

    #[tokio::test]
    async fn test_should_compute_zero_days_late_within_loan_period() {
        let mut book = sample_book();
        let today = Utc::now().date_naive();
        book.borrow("M001", today - Duration::days(3)).expect("should borrow");
        assert_eq!(0, book.days_late(today, 14));
    }

    #[tokio::test]
    async fn test_should_compute_days_late_from_fixed_dates() {
        let mut book = sample_book();
        let borrowed_on = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let as_of = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        book.borrow("M001", borrowed_on).expect("should borrow");
        assert_eq!(16, book.days_late(as_of, 14));
    }
}
