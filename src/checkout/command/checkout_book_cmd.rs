use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::checkout::domain::CheckoutService;
use crate::checkout::dto::CirculationDto;
use crate::core::command::{Command, CommandError};

pub(crate) struct CheckoutBookCommand {
    checkout_service: Box<dyn CheckoutService>,
}

impl CheckoutBookCommand {
    pub(crate) fn new(checkout_service: Box<dyn CheckoutService>) -> Self {
        Self {
            checkout_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CheckoutBookCommandRequest {
    #[serde(default)]
    pub account_id: String,
    pub book_title: String,
}

impl CheckoutBookCommandRequest {
    pub fn new(account_id: &str, book_title: &str) -> Self {
        Self {
            account_id: account_id.to_string(),
            book_title: book_title.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckoutBookCommandResponse {
    pub circulation: CirculationDto,
}

impl CheckoutBookCommandResponse {
    pub fn new(circulation: CirculationDto) -> Self {
        Self {
            circulation,
        }
    }
}

#[async_trait]
impl Command<CheckoutBookCommandRequest, CheckoutBookCommandResponse> for CheckoutBookCommand {
    async fn execute(&self, req: CheckoutBookCommandRequest) -> Result<CheckoutBookCommandResponse, CommandError> {
        self.checkout_service.checkout(req.account_id.as_str(), req.book_title.as_str())
            .await.map_err(CommandError::from).map(CheckoutBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory::create_catalog_service;
    use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
    use crate::checkout::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::CirculationStatus;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::store::testing::seeded_store;

    lazy_static! {
        static ref SUT_CMD: AsyncOnce<CheckoutBookCommand> = AsyncOnce::new(async {
                let config = Configuration::new("test");
                let store = seeded_store(&[], &["alice", "bob"]).await;
                let publisher: Arc<dyn EventPublisher> = Arc::new(MemoryPublisher::new());
                let catalog_svc = create_catalog_service(&config, store.clone(), publisher.clone());
                let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 5))
                    .await.expect("should add book");
                CheckoutBookCommand::new(factory::create_checkout_service(&config, store, publisher))
            });
    }

    #[tokio::test]
    async fn test_should_run_checkout_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(CheckoutBookCommandRequest::new("alice", "Dune")).await.expect("should checkout");
        assert_eq!("Dune", res.circulation.title.as_str());
        assert!(res.circulation.borrowed_titles.contains(&"Dune".to_string()));
        let res = cmd.execute(CheckoutBookCommandRequest::new("alice", "Dune")).await.expect("should checkout");
        assert_eq!(CirculationStatus::AlreadyHeld, res.circulation.status);
    }

    #[tokio::test]
    async fn test_should_not_checkout_unknown_book() {
        let cmd = SUT_CMD.get().await;

        let res = cmd.execute(CheckoutBookCommandRequest::new("bob", "Emma")).await;
        assert!(matches!(res, Err(CommandError::NotFound { .. })));
    }
}
