use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::accounts::dto::AccountDto;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct GetDashboardCommand {
    account_service: Box<dyn AccountService>,
    catalog_service: Box<dyn CatalogService>,
}

impl GetDashboardCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            account_service,
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetDashboardCommandRequest {
    pub account_id: String,
    // the browser view lists the catalog for unknown accounts too
    pub require_account: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetDashboardCommandResponse {
    pub account: Option<AccountDto>,
    pub books: Vec<BookDto>,
}

#[async_trait]
impl Command<GetDashboardCommandRequest, GetDashboardCommandResponse> for GetDashboardCommand {
    async fn execute(&self, req: GetDashboardCommandRequest) -> Result<GetDashboardCommandResponse, CommandError> {
        let account = if req.require_account {
            Some(self.account_service.find_account_by_id(req.account_id.as_str()).await?)
        } else {
            self.account_service.find_account(req.account_id.as_str()).await?
        };
        let books = self.catalog_service.list_books().await?;
        Ok(GetDashboardCommandResponse { account, books })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::accounts::command::get_dashboard_cmd::{GetDashboardCommand, GetDashboardCommandRequest};
    use crate::accounts::factory::create_account_service;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::store::testing::seeded_store;

    fn request(account_id: &str, require_account: bool) -> GetDashboardCommandRequest {
        GetDashboardCommandRequest { account_id: account_id.to_string(), require_account }
    }

    #[tokio::test]
    async fn test_should_run_get_dashboard() {
        let config = Configuration::new("test");
        let store = seeded_store(&[], &["alice"]).await;
        let publisher = Arc::new(MemoryPublisher::new());
        let catalog_svc = create_catalog_service(&config, store.clone(), publisher.clone());
        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 2)).await.expect("should add book");
        let cmd = GetDashboardCommand::new(create_account_service(&config, store, publisher), catalog_svc);

        let res = cmd.execute(request("alice", true)).await.expect("should load dashboard");
        assert_eq!("alice", res.account.expect("account").account_id.as_str());
        assert_eq!(1, res.books.len());

        let res = cmd.execute(request("nobody", true)).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));

        let res = cmd.execute(request("nobody", false)).await.expect("should browse");
        assert!(res.account.is_none());
        assert_eq!(1, res.books.len());
    }
}
