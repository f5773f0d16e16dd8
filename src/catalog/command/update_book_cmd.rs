use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::accounts::domain::AccountService;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;
use crate::utils::parse::parse_copies;

pub(crate) struct UpdateBookCommand {
    account_service: Box<dyn AccountService>,
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub(crate) fn new(account_service: Box<dyn AccountService>, catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            account_service,
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateBookCommandRequest {
    #[serde(default)]
    pub admin_id: String,
    pub old_title: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub series: String,
    pub totalcopies: Value,
    pub copiesav: Value,
}

impl UpdateBookCommandRequest {
    pub fn new(admin_id: &str, old_title: &str, title: &str, totalcopies: Value, copiesav: Value) -> Self {
        Self {
            admin_id: admin_id.to_string(),
            old_title: old_title.to_string(),
            title: title.to_string(),
            author: "".to_string(),
            series: "".to_string(),
            totalcopies,
            copiesav,
        }
    }

    pub fn build_book(&self) -> LibraryResult<BookDto> {
        Ok(BookDto {
            title: self.title.to_string(),
            author: self.author.to_string(),
            series: self.series.to_string(),
            total_copies: parse_copies("totalcopies", &self.totalcopies)?,
            available_copies: parse_copies("copiesav", &self.copiesav)?,
        })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateBookCommandResponse {
    pub old_title: String,
    pub book: BookDto,
}

impl UpdateBookCommandResponse {
    pub fn new(old_title: &str, book: BookDto) -> Self {
        Self {
            old_title: old_title.to_string(),
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let _ = self.account_service.require_admin(req.admin_id.as_str()).await?;
        let book = req.build_book()?;
        self.catalog_service.edit_book(req.old_title.as_str(), &book).await
            .map_err(CommandError::from).map(|b| UpdateBookCommandResponse::new(req.old_title.as_str(), b))
    }
}
