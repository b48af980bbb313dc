pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CirculationService: Sync + Send {
    async fn borrow_book(&self, user_id: &str, isbn: &str) -> LibraryResult<BookDto>;
    async fn return_book(&self, user_id: &str, isbn: &str) -> LibraryResult<BookDto>;

    // fee in currency units; an unknown isbn carries no fee
    async fn late_fee(&self, isbn: &str, days_late: Option<i64>) -> LibraryResult<f64>;

    async fn overdue_books(&self) -> LibraryResult<Vec<BookDto>>;
}
