use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::domain::Configuration;
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::store::LibraryStore;
use crate::utils::parse::required_text;

pub(crate) struct CatalogServiceImpl {
    store: Arc<LibraryStore>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, store: Arc<LibraryStore>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            store,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn find_book(&self, title: &str) -> LibraryResult<Option<BookDto>> {
        let catalog = self.store.load_catalog().await?;
        Ok(catalog.get(title).map(|entity| BookDto::from_entity(title, entity)))
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        let title = required_text("title", book.title.as_str())?;
        let _guard = self.store.lock().await;
        let mut catalog = self.store.load_catalog().await?;
        if catalog.contains(title.as_str()) {
            return Err(LibraryError::conflict(format!("book {} already exists", title).as_str()));
        }
        // a new title starts with every copy on the shelf
        let entity = BookEntity::new(book.author.as_str(), book.series.as_str(), book.total_copies);
        catalog.insert(title.as_str(), entity.clone());
        self.store.save_catalog(&catalog).await?;

        let added = BookDto::from_entity(title.as_str(), &entity);
        info!(title = title.as_str(), total_copies = entity.total_copies, "book added");
        self.events_publisher.publish(&DomainEvent::added(
            "book_added", "books", title.as_str(), &added)?).await?;
        Ok(added)
    }

    async fn edit_book(&self, old_title: &str, book: &BookDto) -> LibraryResult<BookDto> {
        let new_title = required_text("title", book.title.as_str())?;
        let _guard = self.store.lock().await;
        let mut catalog = self.store.load_catalog().await?;
        if !catalog.contains(old_title) {
            return Err(LibraryError::not_found(format!("book {} not found", old_title).as_str()));
        }
        let renamed = new_title != old_title;
        if renamed && catalog.contains(new_title.as_str()) {
            return Err(LibraryError::conflict(format!("book {} already exists", new_title).as_str()));
        }
        catalog.remove(old_title);
        let entity = BookEntity::from(book);
        catalog.insert(new_title.as_str(), entity.clone());

        let mut holders = 0;
        if renamed {
            let mut accounts = self.store.load_accounts().await?;
            for (_, account) in accounts.iter_mut() {
                if account.rename_borrowed(old_title, new_title.as_str()) {
                    holders += 1;
                }
            }
            if holders > 0 {
                self.store.save_all(&accounts, &catalog).await?;
            } else {
                self.store.save_catalog(&catalog).await?;
            }
        } else {
            self.store.save_catalog(&catalog).await?;
        }

        let updated = BookDto::from_entity(new_title.as_str(), &entity);
        info!(old_title, title = new_title.as_str(), holders, "book updated");
        self.events_publisher.publish(&DomainEvent::updated(
            "book_updated", "books", new_title.as_str(),
            HashMap::from([("old_title".to_string(), old_title.to_string())]), &updated)?).await?;
        Ok(updated)
    }

    async fn delete_book(&self, title: &str) -> LibraryResult<bool> {
        let _guard = self.store.lock().await;
        let mut catalog = self.store.load_catalog().await?;
        let removed = match catalog.remove(title) {
            Some(entity) => BookDto::from_entity(title, &entity),
            None => return Ok(false),
        };
        self.store.save_catalog(&catalog).await?;

        info!(title, "book deleted");
        self.events_publisher.publish(&DomainEvent::deleted(
            "book_deleted", "books", title, &removed)?).await?;
        Ok(true)
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let catalog = self.store.load_catalog().await?;
        Ok(catalog.iter().map(|(title, entity)| BookDto::from_entity(title, entity)).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use async_once::AsyncOnce;
    use lazy_static::lazy_static;
    use uuid::Uuid;
    use crate::accounts::domain::model::AccountEntity;
    use crate::books::dto::BookDto;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;
    use crate::core::repository::RepositoryStore;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::memory::publisher::MemoryPublisher;
    use crate::store::LibraryStore;
    use crate::store::factory::create_store;

    lazy_static! {
        static ref SUT_SVC: AsyncOnce<Box<dyn CatalogService>> = AsyncOnce::new(async {
                let config = Configuration::new("test");
                let store = create_store(&config, RepositoryStore::Memory).await.expect("should create store");
                let publisher: Arc<dyn EventPublisher> = Arc::new(MemoryPublisher::new());
                factory::create_catalog_service(&config, store, publisher)
            });
    }

    async fn build_fixture() -> (Box<dyn CatalogService>, Arc<LibraryStore>, Arc<MemoryPublisher>) {
        let config = Configuration::new("test");
        let store = create_store(&config, RepositoryStore::Memory).await.expect("should create store");
        let publisher = Arc::new(MemoryPublisher::new());
        let svc = factory::create_catalog_service(&config, store.clone(), publisher.clone());
        (svc, store, publisher)
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = SUT_SVC.get().await;

        let title = Uuid::new_v4().to_string();
        let mut book = BookDto::new(title.as_str(), "Frank Herbert", "Dune", 2);
        book.available_copies = 0;
        let added = catalog_svc.add_book(&book).await.expect("should add book");
        assert_eq!(2, added.available_copies);

        let loaded = catalog_svc.find_book(title.as_str()).await.expect("should query").expect("book");
        assert_eq!(added, loaded);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_title() {
        let catalog_svc = SUT_SVC.get().await;

        let title = Uuid::new_v4().to_string();
        let book = BookDto::new(title.as_str(), "Frank Herbert", "Dune", 2);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let res = catalog_svc.add_book(&BookDto::new(title.as_str(), "Someone Else", "", 9)).await;
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        let loaded = catalog_svc.find_book(title.as_str()).await.expect("should query").expect("book");
        assert_eq!(2, loaded.total_copies);
    }

    #[tokio::test]
    async fn test_should_reject_blank_title() {
        let catalog_svc = SUT_SVC.get().await;

        let res = catalog_svc.add_book(&BookDto::new("  ", "Frank Herbert", "Dune", 2)).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_should_edit_book_in_place() {
        let catalog_svc = SUT_SVC.get().await;

        let title = Uuid::new_v4().to_string();
        let _ = catalog_svc.add_book(&BookDto::new(title.as_str(), "F. Herbert", "", 2)).await.expect("should add");
        let mut edited = BookDto::new(title.as_str(), "Frank Herbert", "Dune", 3);
        edited.available_copies = 5;
        let updated = catalog_svc.edit_book(title.as_str(), &edited).await.expect("should edit");
        // copy counts are taken as given
        assert_eq!(5, updated.available_copies);
        assert_eq!(3, updated.total_copies);
        assert_eq!("Frank Herbert", updated.author.as_str());
    }

    #[tokio::test]
    async fn test_should_not_edit_missing_book() {
        let catalog_svc = SUT_SVC.get().await;

        let res = catalog_svc.edit_book("no such book", &BookDto::new("anything", "", "", 1)).await;
        assert!(matches!(res, Err(LibraryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_should_not_rename_onto_existing_title() {
        let (catalog_svc, _, _) = build_fixture().await;

        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 2)).await.expect("should add");
        let _ = catalog_svc.add_book(&BookDto::new("Emma", "Jane Austen", "", 1)).await.expect("should add");
        let res = catalog_svc.edit_book("Dune", &BookDto::new("Emma", "Frank Herbert", "Dune", 2)).await;
        assert!(matches!(res, Err(LibraryError::Conflict { .. })));
        assert_eq!(2, catalog_svc.list_books().await.expect("should list").len());
    }

    #[tokio::test]
    async fn test_should_propagate_rename_to_holders() {
        let (catalog_svc, store, publisher) = build_fixture().await;

        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 2)).await.expect("should add");
        let mut catalog = store.load_catalog().await.expect("catalog");
        catalog.get_mut("Dune").expect("book").take_copy();
        let mut accounts = store.load_accounts().await.expect("accounts");
        let mut alice = AccountEntity::new(100);
        alice.add_borrowed("Dune");
        accounts.insert("alice", alice);
        accounts.insert("bob", AccountEntity::new(100));
        store.save_all(&accounts, &catalog).await.expect("should save");

        let mut renamed = BookDto::new("Dune Messiah", "Frank Herbert", "Dune", 2);
        renamed.available_copies = 1;
        let _ = catalog_svc.edit_book("Dune", &renamed).await.expect("should rename");

        assert_eq!(None, catalog_svc.find_book("Dune").await.expect("should query"));
        let accounts = store.load_accounts().await.expect("accounts");
        assert_eq!(vec!["Dune Messiah".to_string()], accounts.get("alice").expect("alice").borrowed_titles);
        let catalog = store.load_catalog().await.expect("catalog");
        let book = catalog.get("Dune Messiah").expect("renamed book");
        assert_eq!(book.total_copies, accounts.holders_of("Dune Messiah") + book.available_copies);

        let event = publisher.events().pop().expect("event");
        assert_eq!("book_updated", event.name.as_str());
        assert_eq!(Some(&"Dune".to_string()), event.metadata.get("old_title"));
    }

    #[tokio::test]
    async fn test_should_delete_book() {
        let (catalog_svc, _, publisher) = build_fixture().await;

        let _ = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 2)).await.expect("should add");
        assert!(catalog_svc.delete_book("Dune").await.expect("should delete"));
        assert_eq!(None, catalog_svc.find_book("Dune").await.expect("should query"));
        // deleting an absent title is a no-op
        assert!(!catalog_svc.delete_book("Dune").await.expect("should ignore"));
        assert_eq!(vec!["book_added".to_string(), "book_deleted".to_string()], publisher.names());
    }

    #[tokio::test]
    async fn test_should_keep_catalog_when_save_fails() {
        let config = Configuration::new("test");
        let repo = crate::store::memory_repository::MemoryRepository::new();
        let store = Arc::new(LibraryStore::new(&config, Box::new(repo.clone())));
        store.seed_catalog().await.expect("should seed");
        let publisher = Arc::new(MemoryPublisher::new());
        let catalog_svc = factory::create_catalog_service(&config, store, publisher.clone());

        repo.fail_writes(true);
        let res = catalog_svc.add_book(&BookDto::new("Dune", "Frank Herbert", "Dune", 2)).await;
        assert!(matches!(res, Err(LibraryError::Database { .. })));
        assert!(catalog_svc.list_books().await.expect("should list").is_empty());
        assert!(publisher.names().is_empty());
    }
}
