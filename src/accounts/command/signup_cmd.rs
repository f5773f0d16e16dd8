use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct SignupCommand {
    account_service: Box<dyn AccountService>,
}

impl SignupCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SignupCommandRequest {
    #[serde(default)]
    pub username: String,
}

impl SignupCommandRequest {
    pub fn new(username: &str) -> Self {
        Self {
            username: username.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SignupCommandResponse {
    pub account: AccountDto,
}

impl SignupCommandResponse {
    pub fn new(account: AccountDto) -> Self {
        Self {
            account,
        }
    }
}

#[async_trait]
impl Command<SignupCommandRequest, SignupCommandResponse> for SignupCommand {
    async fn execute(&self, req: SignupCommandRequest) -> Result<SignupCommandResponse, CommandError> {
        self.account_service.create_account(req.username.as_str())
            .await.map_err(CommandError::from).map(SignupCommandResponse::new)
    }
}
