use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::accounts::Account;
use crate::accounts::domain::AccountService;
use crate::accounts::domain::model::AccountEntity;
use crate::accounts::dto::AccountDto;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::store::LibraryStore;

pub(crate) struct AccountServiceImpl {
    default_balance: i64,
    store: Arc<LibraryStore>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl AccountServiceImpl {
    pub(crate) fn new(config: &Configuration, store: Arc<LibraryStore>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            default_balance: config.default_balance,
            store,
            events_publisher,
        }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn find_account(&self, id: &str) -> LibraryResult<Option<AccountDto>> {
        let accounts = self.store.load_accounts().await?;
        Ok(accounts.get(id).map(|entity| AccountDto::from_entity(id, entity)))
    }

    async fn find_account_by_id(&self, id: &str) -> LibraryResult<AccountDto> {
        self.find_account(id).await?.ok_or_else(|| LibraryError::not_found(
            format!("account {} not found", id).as_str()))
    }

    async fn create_account(&self, id: &str) -> LibraryResult<AccountDto> {
        let id = id.trim().to_string();
        if id.is_empty() {
            return Err(LibraryError::conflict("account id cannot be empty"));
        }
        let _guard = self.store.lock().await;
        let mut accounts = self.store.load_accounts().await?;
        if accounts.contains(id.as_str()) {
            return Err(LibraryError::conflict(format!("account {} already exists", id).as_str()));
        }
        let entity = AccountEntity::new(self.default_balance);
        accounts.insert(id.as_str(), entity.clone());
        self.store.save_accounts(&accounts).await?;

        let account = AccountDto::from_entity(id.as_str(), &entity);
        info!(account_id = id.as_str(), "account created");
        self.events_publisher.publish(&DomainEvent::added(
            "account_created", "accounts", id.as_str(), &account)?).await?;
        Ok(account)
    }

    async fn require_admin(&self, id: &str) -> LibraryResult<AccountDto> {
        let account = self.find_account_by_id(id).await?;
        if !self.is_admin(&account) {
            return Err(LibraryError::access_denied(
                format!("account {} is not an administrator", id).as_str(), Some("403".to_string())));
        }
        Ok(account)
    }

    async fn list_accounts(&self) -> LibraryResult<Vec<AccountDto>> {
        let accounts = self.store.load_accounts().await?;
        Ok(accounts.iter().map(|(id, entity)| AccountDto::from_entity(id, entity)).collect())
    }

    fn is_admin(&self, account: &AccountDto) -> bool {
        account.is_admin()
    }
}
