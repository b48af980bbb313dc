use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub isbn: String,
    pub librarian_id: Option<String>,
}

impl RemoveBookCommandRequest {
    pub fn new(isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            librarian_id: None,
        }
    }

    pub fn as_librarian(librarian_id: &str, isbn: &str) -> Self {
        Self {
            isbn: isbn.to_string(),
            librarian_id: Some(librarian_id.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {}

impl RemoveBookCommandResponse {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        match req.librarian_id {
            Some(ref librarian_id) => {
                self.catalog_service.staff_remove_book(librarian_id.as_str(), req.isbn.as_str()).await
            }
            None => self.catalog_service.remove_book(req.isbn.as_str()).await,
        }.map_err(CommandError::from).map(|_| RemoveBookCommandResponse::new())
    }
}
