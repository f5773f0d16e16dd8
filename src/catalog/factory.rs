use std::sync::Arc;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::store::LibraryStore;

pub(crate) fn create_catalog_service(config: &Configuration, store: Arc<LibraryStore>,
                                     publisher: Arc<dyn EventPublisher>) -> Box<dyn CatalogService> {
    Box::new(CatalogServiceImpl::new(config, store, publisher))
}
