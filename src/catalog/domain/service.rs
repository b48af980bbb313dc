use std::sync::Arc;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, IdIssuer};
use crate::core::library::{BookStatus, LibraryError, LibraryResult, SearchField, SortField};
use crate::gateway::logs::ActivityLog;
use crate::users::repository::UserRepository;

pub struct CatalogServiceImpl {
    book_repository: Arc<dyn BookRepository>,
    user_repository: Arc<dyn UserRepository>,
    id_issuer: IdIssuer,
    activity_log: Arc<dyn ActivityLog>,
}

impl CatalogServiceImpl {
    pub fn new(_config: &Configuration, book_repository: Arc<dyn BookRepository>,
               user_repository: Arc<dyn UserRepository>, activity_log: Arc<dyn ActivityLog>) -> Self {
        Self {
            book_repository,
            user_repository,
            id_issuer: IdIssuer,
            activity_log,
        }
    }

    async fn librarian_by_id(&self, librarian_id: &str) -> LibraryResult<String> {
        let actor = self.user_repository.get(librarian_id).await?;
        if !actor.can_manage_catalog() {
            self.activity_log.append(
                format!("User {} is not a librarian - cannot manage the catalog", librarian_id).as_str()).await;
            return Err(LibraryError::unauthorized(
                format!("user {} is not a librarian", librarian_id).as_str()));
        }
        Ok(actor.name().to_string())
    }

    fn matches(book: &BookEntity, query: &str, needle: &str, field: SearchField) -> bool {
        match field {
            SearchField::Title => book.title.to_lowercase().contains(needle),
            SearchField::Author => book.author.to_lowercase().contains(needle),
            SearchField::Isbn => book.isbn == query,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let mut entity = BookEntity::from(book);
        if entity.book_id.is_empty() {
            entity.book_id = self.id_issuer.issue();
        }
        self.book_repository.create(&entity).await?;
        self.activity_log.append(
            format!("New book added: {} by {}", entity.title, entity.author).as_str()).await;
        Ok(BookDto::from(&entity))
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<()> {
        let book = match self.book_repository.get(isbn).await {
            Ok(book) => book,
            Err(err) => {
                self.activity_log.append(
                    format!("Book with ISBN {} not found", isbn).as_str()).await;
                return Err(err);
            }
        };
        if !book.is_available() {
            self.activity_log.append(
                format!("Cannot delete book {} - book is currently borrowed", book.title).as_str()).await;
            return Err(LibraryError::invalid_state(
                format!("book {} is currently borrowed", isbn).as_str()));
        }
        self.book_repository.delete(isbn).await?;
        self.activity_log.append(format!("Book deleted: {}", book.title).as_str()).await;
        Ok(())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let _ = self.book_repository.update(&BookEntity::from(book)).await?;
        Ok(book.clone())
    }

    async fn staff_add_book(&self, librarian_id: &str, book: &BookDto) -> LibraryResult<BookDto> {
        let librarian = self.librarian_by_id(librarian_id).await?;
        let added = self.add_book(book).await?;
        self.activity_log.append(
            format!("Librarian {} added book: {}", librarian, added.title).as_str()).await;
        Ok(added)
    }

    async fn staff_remove_book(&self, librarian_id: &str, isbn: &str) -> LibraryResult<()> {
        let librarian = self.librarian_by_id(librarian_id).await?;
        match self.remove_book(isbn).await {
            Ok(()) => {
                self.activity_log.append(
                    format!("Librarian {} deleted book with ISBN: {}", librarian, isbn).as_str()).await;
                Ok(())
            }
            Err(err) => {
                self.activity_log.append(
                    format!("Librarian {} failed to delete book with ISBN: {}", librarian, isbn).as_str()).await;
                Err(err)
            }
        }
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<BookDto> {
        self.book_repository.get(isbn).await.map(|b| BookDto::from(&b))
    }

    async fn find_book(&self, query: &str, field: SearchField) -> LibraryResult<BookDto> {
        let books = self.book_repository.find_all().await?;
        let needle = query.to_lowercase();
        books.iter()
            .find(|b| Self::matches(b, query, needle.as_str(), field))
            .map(BookDto::from)
            .ok_or_else(|| LibraryError::not_found(
                format!("no book matched {:?} by {}", query, field).as_str()))
    }

    async fn search_books(&self, query: &str, field: SearchField) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        let needle = query.to_lowercase();
        Ok(books.iter()
            .filter(|b| Self::matches(b, query, needle.as_str(), field))
            .map(BookDto::from)
            .collect())
    }

    async fn sort_books(&self, field: SortField) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        let mut sorted: Vec<BookDto> = books.iter().map(BookDto::from).collect();
        match field {
            SortField::Title => sorted.sort_by(|a, b| a.title.cmp(&b.title)),
            SortField::Author => sorted.sort_by(|a, b| a.author.cmp(&b.author)),
        }
        self.activity_log.append(format!("Books sorted by: {}", field).as_str()).await;
        Ok(sorted)
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_all().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn available_books(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.find_by_status(BookStatus::Available).await?;
        Ok(books.iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            book_status: other.book_status,
            borrowed_by: other.borrowed_by.clone(),
            borrowed_on: other.borrowed_on,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id.to_string(),
            version: other.version,
            title: other.title.to_string(),
            author: other.author.to_string(),
            isbn: other.isbn.to_string(),
            book_status: other.book_status,
            borrowed_by: other.borrowed_by.clone(),
            borrowed_on: other.borrowed_on,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
