use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub(crate) struct RemoveBookCommand {
    account_service: Box<dyn AccountService>,
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            account_service,
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RemoveBookCommandRequest {
    #[serde(default)]
    pub admin_id: String,
    pub title: String,
}

impl RemoveBookCommandRequest {
    pub fn new(admin_id: &str, title: &str) -> Self {
        Self {
            admin_id: admin_id.to_string(),
            title: title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveBookCommandResponse {
    pub title: String,
    pub removed: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(title: &str, removed: bool) -> Self {
        Self {
            title: title.to_string(),
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        let _ = self.account_service.require_admin(req.admin_id.as_str()).await?;
        self.catalog_service.delete_book(req.title.as_str()).await
            .map_err(CommandError::from).map(|removed| RemoveBookCommandResponse::new(req.title.as_str(), removed))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::accounts::factory::create_account_service;
    use crate::books::dto::BookDto;
    use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::store::testing::seeded_store;

    #[tokio::test]
    async fn test_should_run_remove_book() {
        let config = Configuration::new("test");
        let store = seeded_store(&["root"], &["alice"]).await;
        let publisher = Arc::new(MemoryPublisher::new());
        let catalog_svc = create_catalog_service(&config, store.clone(), publisher.clone());
        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 2)).await.expect("should add book");
        let cmd = RemoveBookCommand::new(create_account_service(&config, store.clone(), publisher.clone()),
                                         create_catalog_service(&config, store, publisher));

        let res = cmd.execute(RemoveBookCommandRequest::new("alice", "Dune")).await;
        assert!(matches!(res, Err(CommandError::Access { .. })));

        let res = cmd.execute(RemoveBookCommandRequest::new("root", "Dune")).await.expect("should remove");
        assert!(res.removed);
        let res = cmd.execute(RemoveBookCommandRequest::new("root", "Dune")).await.expect("should ignore");
        assert!(!res.removed);
        assert!(catalog_svc.list_books().await.expect("should list").is_empty());
    }
}
