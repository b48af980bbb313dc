pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::{LibraryResult, SearchField, SortField};

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<()>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto>;

    // thin staff delegations; the actor must be a librarian
    async fn staff_add_book(&self, librarian_id: &str, book: &BookDto) -> LibraryResult<BookDto>;
    async fn staff_remove_book(&self, librarian_id: &str, isbn: &str) -> LibraryResult<()>;

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto>;
    async fn find_book(&self, query: &str, field: SearchField) -> LibraryResult<BookDto>;
    async fn search_books(&self, query: &str, field: SearchField) -> LibraryResult<Vec<BookDto>>;
    async fn sort_books(&self, field: SortField) -> LibraryResult<Vec<BookDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn available_books(&self) -> LibraryResult<Vec<BookDto>>;
}
