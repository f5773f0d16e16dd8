use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetAdminViewCommand {
    account_service: Box<dyn AccountService>,
    catalog_service: Box<dyn CatalogService>,
}

impl GetAdminViewCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            account_service,
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetAdminViewCommandRequest {
    pub admin_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetAdminViewCommandResponse {
    pub admin: AccountDto,
    pub accounts: Vec<AccountDto>,
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<GetAdminViewCommandRequest, GetAdminViewCommandResponse> for GetAdminViewCommand {
    async fn execute(&self, req: GetAdminViewCommandRequest) -> Result<GetAdminViewCommandResponse, CommandError> {
        let admin = self.account_service.require_admin(req.admin_id.as_str()).await?;
        let accounts = self.account_service.list_accounts().await?;
        let books = self.catalog_service.list_books().await?;
        Ok(GetAdminViewCommandResponse { admin, accounts, books })
    }
}
