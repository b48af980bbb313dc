use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::circulation::domain::CirculationService;
use crate::core::command::{Command, CommandError};

pub struct LateFeeCommand {
    circulation_service: Box<dyn CirculationService>,
}

impl LateFeeCommand {
    pub fn new(circulation_service: Box<dyn CirculationService>) -> Self {
        Self {
            circulation_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LateFeeCommandRequest {
    pub isbn: String,
    // overrides the days computed from the book's borrow date when present
    pub days_late: Option<i64>,
}

impl LateFeeCommandRequest {
    pub fn new(isbn: &str, days_late: Option<i64>) -> Self {
        Self {
            isbn: isbn.to_string(),
            days_late,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LateFeeCommandResponse {
    pub isbn: String,
    pub amount: f64,
}

impl LateFeeCommandResponse {
    pub fn new(isbn: &str, amount: f64) -> Self {
        Self {
            isbn: isbn.to_string(),
            amount,
        }
    }
}

#[async_trait]
impl Command<LateFeeCommandRequest, LateFeeCommandResponse> for LateFeeCommand {
    async fn execute(&self, req: LateFeeCommandRequest) -> Result<LateFeeCommandResponse, CommandError> {
        let amount = self.circulation_service.late_fee(req.isbn.as_str(), req.days_late)
            .await.map_err(CommandError::from)?;
        Ok(LateFeeCommandResponse::new(req.isbn.as_str(), amount))
    }
}
