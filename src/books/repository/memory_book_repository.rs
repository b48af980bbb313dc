use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::core::repository::Repository;

// MemoryBookRepository keys the catalog by isbn and keeps insertion order;
// the lock is never held across an await point.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    books: RwLock<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Repository<BookEntity> for MemoryBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write();
        if books.iter().any(|b| b.isbn == entity.isbn) {
            return Err(LibraryError::conflict(
                format!("book with isbn {} already exists", entity.isbn).as_str()));
        }
        books.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<usize> {
        let mut books = self.books.write();
        let pos = books.iter().position(|b| b.isbn == entity.isbn)
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", entity.isbn).as_str()))?;
        if books[pos].version != entity.version {
            return Err(LibraryError::conflict(
                format!("stale version {} for book {}", entity.version, entity.isbn).as_str()));
        }
        let mut updated = entity.clone();
        updated.version += 1;
        updated.updated_at = Utc::now().naive_utc();
        books[pos] = updated;
        Ok(1)
    }

    async fn get(&self, key: &str) -> LibraryResult<BookEntity> {
        self.books.read().iter().find(|b| b.isbn == key).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", key).as_str()))
    }

    async fn delete(&self, key: &str) -> LibraryResult<usize> {
        let mut books = self.books.write();
        let pos = books.iter().position(|b| b.isbn == key)
            .ok_or_else(|| LibraryError::not_found(
                format!("book with isbn {} not found", key).as_str()))?;
        books.remove(pos);
        Ok(1)
    }

    async fn find_all(&self) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().clone())
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn find_by_status(&self, status: BookStatus) -> LibraryResult<Vec<BookEntity>> {
        Ok(self.books.read().iter().filter(|b| b.book_status == status).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::books::domain::model::BookEntity;
    use crate::books::repository::BookRepository;
    use crate::books::repository::memory_book_repository::MemoryBookRepository;
    use crate::core::library::{BookStatus, LibraryError};
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_and_get_book() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new("title", "author", "isbn-1");
        repo.create(&book).await.expect("should create");
        let loaded = repo.get("isbn-1").await.expect("should get");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_isbn() {
        let repo = MemoryBookRepository::new();
        repo.create(&BookEntity::new("title", "author", "isbn-1")).await.expect("should create");
        let res = repo.create(&BookEntity::new("other", "author", "isbn-1")).await;
        assert!(matches!(res, Err(LibraryError::Conflict { message: _ })));
    }

    #[tokio::test]
    async fn test_should_update_and_bump_version() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new("title", "author", "isbn-1");
        repo.create(&book).await.expect("should create");

        let mut changed = book.clone();
        changed.borrow("M001", Utc::now().date_naive()).expect("should borrow");
        repo.update(&changed).await.expect("should update");

        let loaded = repo.get("isbn-1").await.expect("should get");
        assert_eq!(1, loaded.version);
        assert_eq!(BookStatus::Borrowed, loaded.book_status);
    }

    #[tokio::test]
    async fn test_should_reject_stale_version() {
        let repo = MemoryBookRepository::new();
        let book = BookEntity::new("title", "author", "isbn-1");
        repo.create(&book).await.expect("should create");
        repo.update(&book).await.expect("should update");

        // still at version 0 after the store moved to 1
        let res = repo.update(&book).await;
        assert!(matches!(res, Err(LibraryError::Conflict { message: _ })));
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let repo = MemoryBookRepository::new();
        repo.create(&BookEntity::new("title", "author", "isbn-1")).await.expect("should create");
        repo.delete("isbn-1").await.expect("should delete");
        assert!(repo.get("isbn-1").await.is_err());
        assert!(matches!(repo.delete("isbn-1").await, Err(LibraryError::NotFound { message: _ })));
    }

    #[tokio::test]
    async fn test_should_keep_insertion_order() {
        let repo = MemoryBookRepository::new();
        for isbn in ["isbn-3", "isbn-1", "isbn-2"] {
            repo.create(&BookEntity::new("title", "author", isbn)).await.expect("should create");
        }
        let all = repo.find_all().await.expect("should list");
        let isbns: Vec<&str> = all.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["isbn-3", "isbn-1", "isbn-2"], isbns);
    }

    #[tokio::test]
    async fn test_should_find_by_status() {
        let repo = MemoryBookRepository::new();
        let mut borrowed = BookEntity::new("title", "author", "isbn-1");
        borrowed.borrow("M001", Utc::now().date_naive()).expect("should borrow");
        repo.create(&borrowed).await.expect("should create");
        repo.create(&BookEntity::new("other", "author", "isbn-2")).await.expect("should create");

        let available = repo.find_by_status(BookStatus::Available).await.expect("should find");
        assert_eq!(1, available.len());
        assert_eq!("isbn-2", available[0].isbn.as_str());
    }
}
