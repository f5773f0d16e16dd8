pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::accounts::dto::AccountDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait AccountService: Sync + Send {
    async fn find_account(&self, id: &str) -> LibraryResult<Option<AccountDto>>;
    async fn find_account_by_id(&self, id: &str) -> LibraryResult<AccountDto>;
    async fn create_account(&self, id: &str) -> LibraryResult<AccountDto>;
    async fn require_admin(&self, id: &str) -> LibraryResult<AccountDto>;
    async fn list_accounts(&self) -> LibraryResult<Vec<AccountDto>>;
    fn is_admin(&self, account: &AccountDto) -> bool;
}
