pub mod factory;
pub mod json_repository;
pub mod memory_repository;

use serde_json::Value;
use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};
use crate::accounts::domain::model::AccountsDocument;
use crate::books::domain::model::CatalogDocument;
use crate::core::domain::Configuration;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

// LibraryStore is the durable owner of the accounts and catalog documents. Services load
// fresh snapshots per operation; every mutation holds the writer lock from load to save.
pub(crate) struct LibraryStore {
    repository: Box<dyn Repository>,
    accounts_document: String,
    catalog_document: String,
    writer: Mutex<()>,
}

impl LibraryStore {
    pub(crate) fn new(config: &Configuration, repository: Box<dyn Repository>) -> Self {
        Self {
            repository,
            accounts_document: config.accounts_document.to_string(),
            catalog_document: config.catalog_document.to_string(),
            writer: Mutex::new(()),
        }
    }

    // single-writer boundary around a load-modify-save cycle
    pub(crate) async fn lock(&self) -> MutexGuard<'_, ()> {
        self.writer.lock().await
    }

    pub(crate) async fn load_accounts(&self) -> LibraryResult<AccountsDocument> {
        match self.repository.read(self.accounts_document.as_str()).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(AccountsDocument::default()),
        }
    }

    pub(crate) async fn save_accounts(&self, accounts: &AccountsDocument) -> LibraryResult<()> {
        let batch = vec![(self.accounts_document.to_string(), serde_json::to_value(accounts)?)];
        self.repository.write(&batch).await.map(|_| ())
    }

    pub(crate) async fn load_catalog(&self) -> LibraryResult<CatalogDocument> {
        match self.repository.read(self.catalog_document.as_str()).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(LibraryError::not_found(
                format!("catalog document {} has not been seeded", self.catalog_document).as_str())),
        }
    }

    pub(crate) async fn save_catalog(&self, catalog: &CatalogDocument) -> LibraryResult<()> {
        let batch = vec![(self.catalog_document.to_string(), serde_json::to_value(catalog)?)];
        self.repository.write(&batch).await.map(|_| ())
    }

    // commits both documents as one batch so a crash cannot leave only one of them saved
    pub(crate) async fn save_all(&self, accounts: &AccountsDocument, catalog: &CatalogDocument) -> LibraryResult<()> {
        let batch: Vec<(String, Value)> = vec![
            (self.accounts_document.to_string(), serde_json::to_value(accounts)?),
            (self.catalog_document.to_string(), serde_json::to_value(catalog)?),
        ];
        let written = self.repository.write(&batch).await?;
        debug!(written, "committed accounts and catalog");
        Ok(())
    }

    // writes an empty catalog when none exists yet, returns true if it did
    pub(crate) async fn seed_catalog(&self) -> LibraryResult<bool> {
        let _guard = self.lock().await;
        if self.repository.read(self.catalog_document.as_str()).await?.is_some() {
            return Ok(false);
        }
        self.save_catalog(&CatalogDocument::default()).await?;
        info!(document = self.catalog_document.as_str(), "seeded empty catalog");
        Ok(true)
    }
}
