use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SortField;

pub struct SortBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SortBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SortBooksCommandRequest {
    // title or author; anything else falls back to title
    pub field: String,
}

impl SortBooksCommandRequest {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SortBooksCommandResponse {
    pub books: Vec<BookDto>,
}

impl SortBooksCommandResponse {
    pub fn new(books: Vec<BookDto>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<SortBooksCommandRequest, SortBooksCommandResponse> for SortBooksCommand {
    async fn execute(&self, req: SortBooksCommandRequest) -> Result<SortBooksCommandResponse, CommandError> {
        let field = SortField::from(req.field.to_string());
        self.catalog_service.sort_books(field)
            .await.map_err(CommandError::from).map(SortBooksCommandResponse::new)
    }
}
