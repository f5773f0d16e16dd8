use std::sync::Arc;
use crate::checkout::domain::CheckoutService;
use crate::checkout::domain::service::CheckoutServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::store::LibraryStore;

pub(crate) fn create_checkout_service(config: &Configuration, store: Arc<LibraryStore>,
                                      publisher: Arc<dyn EventPublisher>) -> Box<dyn CheckoutService> {
    Box::new(CheckoutServiceImpl::new(config, store, publisher))
}
