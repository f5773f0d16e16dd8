use std::path::Path;
use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::store::LibraryStore;
use crate::store::json_repository::JsonFileRepository;
use crate::store::memory_repository::MemoryRepository;

pub(crate) async fn create_store(config: &Configuration, store: RepositoryStore) -> LibraryResult<Arc<LibraryStore>> {
    let library_store = match store {
        RepositoryStore::JsonFile => {
            let repo = JsonFileRepository::open(Path::new(config.data_dir.as_str())).await?;
            LibraryStore::new(config, Box::new(repo))
        }
        RepositoryStore::Memory => {
            LibraryStore::new(config, Box::new(MemoryRepository::new()))
        }
    };
    if config.seed_catalog {
        library_store.seed_catalog().await?;
    }
    Ok(Arc::new(library_store))
}
