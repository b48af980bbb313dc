use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::SearchField;

pub struct FindBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl FindBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindBookCommandRequest {
    pub query: String,
    // one of title, author, isbn; anything else falls back to title
    pub field: String,
}

impl FindBookCommandRequest {
    pub fn new(query: &str, field: &str) -> Self {
        Self {
            query: query.to_string(),
            field: field.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FindBookCommandResponse {
    pub book: BookDto,
}

impl FindBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<FindBookCommandRequest, FindBookCommandResponse> for FindBookCommand {
    async fn execute(&self, req: FindBookCommandRequest) -> Result<FindBookCommandResponse, CommandError> {
        let field = SearchField::from(req.field.to_string());
        self.catalog_service.find_book(req.query.as_str(), field)
            .await.map_err(CommandError::from).map(FindBookCommandResponse::new)
    }
}
