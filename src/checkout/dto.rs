use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::accounts::Account;
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::CirculationStatus;
use crate::utils::date::serializer;

// CirculationDto reports the outcome of a checkout or return together with the
// state of the account and the book after it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct CirculationDto {
    pub account_id: String,
    pub title: String,
    pub status: CirculationStatus,
    pub available_copies: u32,
    pub total_copies: u32,
    pub borrowed_titles: Vec<String>,
    #[serde(with = "serializer")]
    pub recorded_at: NaiveDateTime,
}

impl CirculationDto {
    pub fn from_account_book(account: &dyn Account, book: &dyn Book, status: CirculationStatus) -> Self {
        CirculationDto {
            account_id: account.id(),
            title: book.id(),
            status,
            available_copies: book.available_copies(),
            total_copies: book.total_copies(),
            borrowed_titles: account.borrowed_titles().to_vec(),
            recorded_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum InventoryIssueKind {
    // holders plus available copies differ from the total
    Unbalanced,
    OverAvailable,
    // an account holds a title the catalog no longer has
    UnknownTitle,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct InventoryIssue {
    pub title: String,
    pub kind: InventoryIssueKind,
    pub account_id: Option<String>,
    pub total_copies: u32,
    pub available_copies: u32,
    pub holders: u32,
}

impl InventoryIssue {
    pub fn for_book(title: &str, kind: InventoryIssueKind, book: &dyn Book, holders: u32) -> Self {
        Self {
            title: title.to_string(),
            kind,
            account_id: None,
            total_copies: book.total_copies(),
            available_copies: book.available_copies(),
            holders,
        }
    }

    pub fn unknown_title(title: &str, account_id: &str) -> Self {
        Self {
            title: title.to_string(),
            kind: InventoryIssueKind::UnknownTitle,
            account_id: Some(account_id.to_string()),
            total_copies: 0,
            available_copies: 0,
            holders: 1,
        }
    }
}
