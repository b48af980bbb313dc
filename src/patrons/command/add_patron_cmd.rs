use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::patrons::domain::PatronService;
use crate::patrons::dto::UserDto;
use crate::utils::date::parse_day;

pub struct AddPatronCommand {
    patron_service: Box<dyn PatronService>,
}

impl AddPatronCommand {
    pub fn new(patron_service: Box<dyn PatronService>) -> Self {
        Self {
            patron_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddPatronCommandRequest {
    pub user_id: String,
    pub name: String,
    // expiry date in YYYY-MM-DD form, validated at this boundary
    pub membership_expires_on: String,
}

impl AddPatronCommandRequest {
    pub fn new(user_id: &str, name: &str, membership_expires_on: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            name: name.to_string(),
            membership_expires_on: membership_expires_on.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddPatronCommandResponse {
    pub user: UserDto,
}

impl AddPatronCommandResponse {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<AddPatronCommandRequest, AddPatronCommandResponse> for AddPatronCommand {
    async fn execute(&self, req: AddPatronCommandRequest) -> Result<AddPatronCommandResponse, CommandError> {
        let expires_on = parse_day(req.membership_expires_on.as_str()).map_err(CommandError::from)?;
        let user = UserDto::new_patron(req.user_id.as_str(), req.name.as_str(), expires_on);
        self.patron_service.register_patron(&user)
            .await.map_err(CommandError::from).map(AddPatronCommandResponse::new)
    }
}
