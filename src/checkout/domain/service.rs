use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info, warn};
use crate::accounts::dto::AccountDto;
use crate::books::dto::BookDto;
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::{CirculationDto, InventoryIssue, InventoryIssueKind};
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{CirculationStatus, LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::store::LibraryStore;

pub(crate) struct CheckoutServiceImpl {
    store: Arc<LibraryStore>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CheckoutServiceImpl {
    pub(crate) fn new(_config: &Configuration, store: Arc<LibraryStore>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            events_publisher,
        }
    }
}

fn account_not_found(account_id: &str) -> LibraryError {
    LibraryError::not_found(format!("account {} not found", account_id).as_str())
}

fn book_not_found(title: &str) -> LibraryError {
    LibraryError::not_found(format!("book {} not found", title).as_str())
}

#[async_trait]
impl CheckoutService for CheckoutServiceImpl {
    async fn checkout(&self, account_id: &str, title: &str) -> LibraryResult<CirculationDto> {
        let _guard = self.store.lock().await;
        let mut accounts = self.store.load_accounts().await?;
        let mut catalog = self.store.load_catalog().await?;
        let account = accounts.get_mut(account_id).ok_or_else(|| account_not_found(account_id))?;
        let book = catalog.get_mut(title).ok_or_else(|| book_not_found(title))?;

        let status = if account.holds(title) {
            CirculationStatus::AlreadyHeld
        } else if book.take_copy() {
            account.add_borrowed(title);
            CirculationStatus::CheckedOut
        } else {
            CirculationStatus::Unavailable
        };
        let circulation = CirculationDto::from_account_book(
            &AccountDto::from_entity(account_id, account), &BookDto::from_entity(title, book), status);

        if !status.is_mutation() {
            debug!(account_id, title, status = %status, "checkout left library unchanged");
            return Ok(circulation);
        }
        self.store.save_all(&accounts, &catalog).await?;
        info!(account_id, title, available_copies = circulation.available_copies, "book checked out");
        self.events_publisher.publish(&DomainEvent::checked_out(account_id, title, &circulation)?).await?;
        Ok(circulation)
    }

    async fn return_book(&self, account_id: &str, title: &str) -> LibraryResult<CirculationDto> {
        let _guard = self.store.lock().await;
        let mut accounts = self.store.load_accounts().await?;
        let mut catalog = self.store.load_catalog().await?;
        let account = accounts.get_mut(account_id).ok_or_else(|| account_not_found(account_id))?;
        let book = catalog.get_mut(title).ok_or_else(|| book_not_found(title))?;
        if !account.remove_borrowed(title) {
            return Err(LibraryError::validation(
                format!("book {} is not checked out by account {}", title, account_id).as_str(),
                Some("400".to_string())));
        }
        book.return_copy();
        let circulation = CirculationDto::from_account_book(
            &AccountDto::from_entity(account_id, account), &BookDto::from_entity(title, book),
            CirculationStatus::Returned);

        self.store.save_all(&accounts, &catalog).await?;
        info!(account_id, title, available_copies = circulation.available_copies, "book returned");
        self.events_publisher.publish(&DomainEvent::returned(account_id, title, &circulation)?).await?;
        Ok(circulation)
    }

    async fn verify_inventory(&self) -> LibraryResult<Vec<InventoryIssue>> {
        // both documents must come from the same commit
        let (accounts, catalog) = {
            let _guard = self.store.lock().await;
            (self.store.load_accounts().await?, self.store.load_catalog().await?)
        };
        let mut issues = vec![];
        for (title, entity) in catalog.iter() {
            let holders = accounts.holders_of(title);
            let book = BookDto::from_entity(title, entity);
            if entity.available_copies > entity.total_copies {
                issues.push(InventoryIssue::for_book(title, InventoryIssueKind::OverAvailable, &book, holders));
            }
            // edited counts may reach u32::MAX
            if u64::from(holders) + u64::from(entity.available_copies) != u64::from(entity.total_copies) {
                issues.push(InventoryIssue::for_book(title, InventoryIssueKind::Unbalanced, &book, holders));
            }
        }
        for (account_id, account) in accounts.iter() {
            for title in account.borrowed_titles.iter().filter(|t| !catalog.contains(t)) {
                issues.push(InventoryIssue::unknown_title(title, account_id));
            }
        }
        if !issues.is_empty() {
            warn!(issues = issues.len(), "inventory does not balance");
        }
        Ok(issues)
    }
}
