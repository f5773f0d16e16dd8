use std::sync::Arc;
use crate::accounts::domain::AccountService;
use crate::accounts::domain::service::AccountServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::store::LibraryStore;

pub(crate) fn create_account_service(config: &Configuration, store: Arc<LibraryStore>,
                                     publisher: Arc<dyn EventPublisher>) -> Box<dyn AccountService> {
    Box::new(AccountServiceImpl::new(config, store, publisher))
}
