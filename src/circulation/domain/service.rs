use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use crate::books::domain::Book;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::circulation::domain::CirculationService;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::logs::ActivityLog;
use crate::gateway::notify::{NotificationService, Notifier};
use crate::patrons::Borrower;
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;
use crate::users::domain::model::UserEntity;

pub struct CirculationServiceImpl {
    config: Configuration,
    patron_service: Box<dyn PatronService>,
    catalog_service: Box<dyn CatalogService>,
    notifier: Box<dyn Notifier>,
    notification_service: NotificationService,
    activity_log: Arc<dyn ActivityLog>,
}

impl CirculationServiceImpl {
    pub fn new(config: &Configuration, patron_service: Box<dyn PatronService>,
               catalog_service: Box<dyn CatalogService>, notifier: Box<dyn Notifier>,
               activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            config: config.clone(),
            patron_service,
            catalog_service,
            notifier,
            notification_service: NotificationService::new(activity_log.clone()),
            activity_log,
        }
    }

    async fn member_by_id(&self, user_id: &str) -> LibraryResult<UserDto> {
        let user = match self.patron_service.find_user_by_id(user_id).await {
            Ok(user) => user,
            Err(err) => {
                self.activity_log.append(
                    format!("User {} not found", user_id).as_str()).await;
                return Err(err);
            }
        };
        if !user.can_borrow() {
            self.activity_log.append(
                format!("User {} is not a member - cannot borrow books", user_id).as_str()).await;
            return Err(LibraryError::unauthorized(
                format!("user {} is not a member", user_id).as_str()));
        }
        Ok(user)
    }

    async fn book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        match self.catalog_service.find_book_by_isbn(isbn).await {
            Ok(book) => Ok(book),
            Err(err) => {
                self.activity_log.append(
                    format!("Book with ISBN {} not found", isbn).as_str()).await;
                Err(err)
            }
        }
    }
}

#[async_trait]
impl CirculationService for CirculationServiceImpl {
    async fn borrow_book(&self, user_id: &str, isbn: &str) -> LibraryResult<BookDto> {
        let user = self.member_by_id(user_id).await?;
        let book = self.book_by_isbn(isbn).await?;
        if !book.is_available() {
            self.activity_log.append(
                format!("Failed to borrow book {} for member {}", book.title, user.name).as_str()).await;
            return Err(LibraryError::invalid_state(
                format!("book {} is already borrowed", isbn).as_str()));
        }

        let mut user_entity = UserEntity::try_from(&user)?;
        let mut book_entity = BookEntity::from(&book);
        let today = Utc::now().date_naive();
        if let Err(err) = user_entity.borrow_book(&mut book_entity, today) {
            self.activity_log.append(
                format!("Failed to borrow book {} for member {}: {}", book.title, user.name, err).as_str()).await;
            return Err(err);
        }

        self.catalog_service.update_book(&BookDto::from(&book_entity)).await?;
        self.patron_service.update_user(&UserDto::from(&user_entity)).await?;
        self.activity_log.append(
            format!("Member {} borrowed book: {}", user.name, book.title).as_str()).await;
        let _ = self.notification_service.send_notification(
            self.notifier.as_ref(), "Book borrowed successfully!").await;
        Ok(BookDto::from(&book_entity))
    }

    async fn return_book(&self, user_id: &str, isbn: &str) -> LibraryResult<BookDto> {
        let user = self.member_by_id(user_id).await?;
        let book = self.book_by_isbn(isbn).await?;

        let mut user_entity = UserEntity::try_from(&user)?;
        let mut book_entity = BookEntity::from(&book);
        if let Err(err) = user_entity.return_book(&mut book_entity) {
            self.activity_log.append(
                format!("Failed to return book {} for member {}: {}", book.title, user.name, err).as_str()).await;
            return Err(err);
        }

        self.catalog_service.update_book(&BookDto::from(&book_entity)).await?;
        self.patron_service.update_user(&UserDto::from(&user_entity)).await?;
        self.activity_log.append(
            format!("Member {} returned book: {}", user.name, book.title).as_str()).await;
        let _ = self.notification_service.send_notification(
            self.notifier.as_ref(), "Book returned successfully!").await;
        Ok(BookDto::from(&book_entity))
    }

    async fn late_fee(&self, isbn: &str, days_late: Option<i64>) -> LibraryResult<f64> {
        let book = match self.catalog_service.find_book_by_isbn(isbn).await {
            Ok(book) => book,
            // an unknown isbn carries no fee
            Err(LibraryError::NotFound { .. }) => return Ok(0.0),
            Err(err) => return Err(err),
        };
        let today = Utc::now().date_naive();
        let days = days_late
            .unwrap_or_else(|| BookEntity::from(&book).days_late(today, self.config.book_loan_days))
            .max(0);
        let fee = days as f64 * self.config.late_fee_per_day;
        if fee > 0.0 {
            self.activity_log.append(
                format!("Late fee for book {}: {:.2} ({} days late)", book.title, fee, days).as_str()).await;
        }
        Ok(fee)
    }

    async fn overdue_books(&self) -> LibraryResult<Vec<BookDto>> {
        let today = Utc::now().date_naive();
        let books = self.catalog_service.list_books().await?;
        Ok(books.into_iter()
            .filter(|b| !b.is_available()
                && BookEntity::from(b).days_late(today, self.config.book_loan_days) > 0)
            .collect())
    }
}
