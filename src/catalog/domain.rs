pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    async fn find_book(&self, title: &str) -> LibraryResult<Option<BookDto>>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn edit_book(&self, old_title: &str, book: &BookDto) -> LibraryResult<BookDto>;
    async fn delete_book(&self, title: &str) -> LibraryResult<bool>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
}
