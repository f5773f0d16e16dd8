use async_trait::async_trait;
use crate::checkout::dto::{CirculationDto, InventoryIssue};
use crate::core::library::LibraryResult;

pub mod service;

#[async_trait]
pub(crate) trait CheckoutService: Sync + Send {
    async fn checkout(&self, account_id: &str, title: &str) -> LibraryResult<CirculationDto>;
    async fn return_book(&self, account_id: &str, title: &str) -> LibraryResult<CirculationDto>;
    async fn verify_inventory(&self) -> LibraryResult<Vec<InventoryIssue>>;
}
