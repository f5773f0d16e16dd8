use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CirculationDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct ReturnBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl ReturnBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

// field names follow the return form: the account id arrives as username
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReturnBookCommandRequest {
    pub username: Option<String>,
    pub book: Option<String>,
}

impl ReturnBookCommandRequest {
    pub fn new(username: &str, book: &str) -> Self {
        Self {
            username: Some(username.to_string()),
            book: Some(book.to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnBookCommandResponse {
    pub circulation: CirculationDto,
}

impl ReturnBookCommandResponse {
    pub fn new(circulation: CirculationDto) -> Self {
        Self {
            circulation,
        }
    }
}

fn missing_field(field: &str) -> CommandError {
    CommandError::Validation {
        message: format!("missing {}", field),
        reason_code: Some("400".to_string()),
    }
}

#[async_trait]
impl Command<ReturnBookCommandRequest, ReturnBookCommandResponse> for ReturnBookCommand {
    async fn execute(&self, req: ReturnBookCommandRequest) -> Result<ReturnBookCommandResponse, CommandError> {
        let username = req.username.filter(|u| !u.is_empty()).ok_or_else(|| missing_field("username"))?;
        let book = req.book.filter(|b| !b.is_empty()).ok_or_else(|| missing_field("book"))?;
        self.checkout_service.return_book(username.as_str(), book.as_str())
            .await.map_err(CommandError::from).map(ReturnBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
    use crate::checkout::domain::CheckoutService;
    use crate::checkout::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::CirculationStatus;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::store::testing::seeded_store;

    async fn build_cmd() -> (ReturnBookCommand, Box<dyn CheckoutService>) {
        let config = Configuration::new("test");
        let store = seeded_store(&[], &["alice"]).await;
        let publisher = Arc::new(MemoryPublisher::new());
        let catalog_svc = create_catalog_service(&config, store.clone(), publisher.clone());
        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 2)).await.expect("should add book");
        (ReturnBookCommand::new(factory::create_checkout_service(&config, store.clone(), publisher.clone())),
         factory::create_checkout_service(&config, store, publisher))
    }

    #[tokio::test]
    async fn test_should_run_return_book() {
        let (cmd, checkout_svc) = build_cmd().await;
        let _ = checkout_svc.checkout("alice", "Dune").await.expect("should checkout");

        let res = cmd.execute(ReturnBookCommandRequest::new("alice", "Dune")).await.expect("should return");
        assert_eq!(CirculationStatus::Returned, res.circulation.status);
        assert_eq!(2, res.circulation.available_copies);
    }

    #[tokio::test]
    async fn test_should_require_return_fields() {
        let (cmd, _) = build_cmd().await;

        let res = cmd.execute(ReturnBookCommandRequest { username: Some("alice".to_string()), book: None }).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
        let res = cmd.execute(ReturnBookCommandRequest::default()).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_return_without_checkout() {
        let (cmd, _) = build_cmd().await;

        let res = cmd.execute(ReturnBookCommandRequest::new("alice", "Dune")).await;
        assert!(matches!(res, Err(CommandError::Validation { .. })));
    }
}
