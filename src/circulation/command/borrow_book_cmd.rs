use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};

pub struct BorrowBookCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl BorrowBookCommand {
    pub fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BorrowBookCommandRequest {
    pub user_id: String,
    pub isbn: String,
}

impl BorrowBookCommandRequest {
    pub fn new(user_id: &str, isbn: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BorrowBookCommandResponse {
    pub book: BookDto,
}

impl BorrowBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<BorrowBookCommandRequest, BorrowBookCommandResponse> for BorrowBookCommand {
    async fn execute(&self, req: BorrowBookCommandRequest) -> Result<BorrowBookCommandResponse, CommandError> {
        self.circulation_service.borrow_book(req.user_id.as_str(), req.isbn.as_str())
            .await.map_err(CommandError::from).map(BorrowBookCommandResponse::new)
    }
}
