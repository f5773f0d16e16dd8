use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::core::command::{Command, CommandError};

// LoginCommand resolves an account by id alone, there are no credentials
pub(crate) struct LoginCommand {
    account_service: Box<dyn AccountService>,
}

impl LoginCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>) -> Self {
        Self {
            account_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginCommandRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginCommandResponse {
    pub account: AccountDto,
    pub admin: bool,
}

#[async_trait]
impl Command<LoginCommandRequest, LoginCommandResponse> for LoginCommand {
    async fn execute(&self, req: LoginCommandRequest) -> Result<LoginCommandResponse, CommandError> {
        let account = self.account_service.find_account_by_id(req.username.trim()).await?;
        let admin = self.account_service.is_admin(&account);
        Ok(LoginCommandResponse { account, admin })
    }
}
