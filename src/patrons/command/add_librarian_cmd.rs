use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;

pub struct AddLibrarianCommand {
    patron_service: Box<dyn PatronService>,
}

impl AddLibrarianCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddLibrarianCommandRequest {
    pub user_id: String,
    pub name: String,
}

impl AddLibrarianCommandRequest {
    pub fn new(user_id: &str, name: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddLibrarianCommandResponse {
    pub user: UserDto,
}

impl AddLibrarianCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<AddLibrarianCommandRequest, AddLibrarianCommandResponse> for AddLibrarianCommand {
    async fn execute(&self, req: AddLibrarianCommandRequest) -> Result<AddLibrarianCommandResponse, CommandError> {
        let user = UserDto::new_librarian(req.user_id.as_str(), req.name.as_str());
        self.patron_service.register_librarian(&user)
            .await.map_err(CommandError::from).map(AddLibrarianCommandResponse::new)
    }
}
