use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct GetUserCommand {
    patron_service: Box<dyn PatronService>,
}

impl GetUserCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetUserCommandRequest {
    pub user_id: String,
}

impl GetUserCommandRequest {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GetUserCommandResponse {
    pub user: UserDto,
}

impl GetUserCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<GetUserCommandRequest, GetUserCommandResponse> for GetUserCommand {
    async fn execute(&self, req: GetUserCommandRequest) -> Result<GetUserCommandResponse, CommandError> {
        self.patron_service.find_user_by_id(req.user_id.as_str())
            .await.map_err(CommandError::from).map(GetUserCommandResponse::new)
    }
}
