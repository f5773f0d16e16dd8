use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::accounts::domain::AccountService;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::InventoryIssue;
use crate::core::command::{Command, CommandError};

pub(crate) struct AuditInventoryCommand {
    account_service: Box<dyn AccountService>,
    checkout_service: Box<dyn CheckoutService>,
}

impl AuditInventoryCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>, checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            account_service,
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AuditInventoryCommandRequest {
    pub admin_id: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct AuditInventoryCommandResponse {
    pub balanced: bool,
    pub issues: Vec<InventoryIssue>,
}

impl AuditInventoryCommandResponse {
    pub fn new(issues: Vec<InventoryIssue>) -> Self {
        Self {
            balanced: issues.is_empty(),
            issues,
        }
    }
}

#[async_trait]
impl Command<AuditInventoryCommandRequest, AuditInventoryCommandResponse> for AuditInventoryCommand {
    async fn execute(&self, req: AuditInventoryCommandRequest) -> Result<AuditInventoryCommandResponse, CommandError> {
        let _ = self.account_service.require_admin(req.admin_id.as_str()).await?;
        self.checkout_service.verify_inventory().await
            .map_err(CommandError::from).map(AuditInventoryCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::accounts::factory::create_account_service;
    use crate::checkout::command::audit_inventory_cmd::{AuditInventoryCommand, AuditInventoryCommandRequest};
    use crate::checkout::factory::create_checkout_service;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::store::testing::seeded_store;

    #[tokio::test]
    async fn test_should_run_audit_inventory() {
        let config = Configuration::new("test");
        let store = seeded_store(&["root"], &["alice"]).await;
        let publisher = Arc::new(MemoryPublisher::new());
        let cmd = AuditInventoryCommand::new(create_account_service(&config, store.clone(), publisher.clone()),
                                             create_checkout_service(&config, store, publisher));

        let res = cmd.execute(AuditInventoryCommandRequest { admin_id: "root".to_string() })
            .await.expect("should audit");
        assert!(res.balanced);
        let res = cmd.execute(AuditInventoryCommandRequest { admin_id: "alice".to_string() }).await;
        assert!(matches!(res, Err(CommandError::Access { .. })));
    }
}
