use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::accounts::domain::AccountService;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::utils::parse::parse_copies;

pub(crate) struct AddBookCommand {
    account_service: Box<dyn AccountService>,
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            account_service,
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddBookCommandRequest {
    #[serde(default)]
    pub admin_id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub series: String,
    pub totalcopies: Value,
}

impl AddBookCommandRequest {
    pub fn new(admin_id: &str, title: &str, author: &str, series: &str, totalcopies: Value) -> Self {
        Self {
            admin_id: admin_id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            series: series.to_string(),
            totalcopies,
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookDto> {
        let total = parse_copies("totalcopies", &self.totalcopies)?;
        Ok(BookDto::new(self.title.as_str(), self.author.as_str(), self.series.as_str(), total))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddBookCommandResponse {
    pub book: BookDto,
}

impl AddBookCommandResponse {
    pub fn new(book: BookDto) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let _ = self.account_service.require_admin(req.admin_id.as_str()).await?;
        let book = req.build_book()?;
        self.catalog_service.add_book(&book).await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
