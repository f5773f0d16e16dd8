use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

// Repository is the document store behind the library: every named document
// is read and written as one whole JSON value.
#[async_trait]
pub trait Repository: Sync + Send {
    // read a document, None if it was never written
    async fn read(&self, name: &str) -> LibraryResult<Option<Value>>;

    // replace every document of the batch as a single unit
    async fn write(&self, batch: &[(String, Value)]) -> LibraryResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    JsonFile,
    Memory,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia {
        match self {
            RepositoryStore::JsonFile => { GatewayPublisherVia::Logs }
            RepositoryStore::Memory => { GatewayPublisherVia::Memory }
        }
    }
}
