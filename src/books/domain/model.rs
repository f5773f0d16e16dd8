use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

// BookEntity is the persisted catalog record for one title; the title is its key in
// the catalog document and every copy of the title shares the record.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct BookEntity {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub series: String,
    #[serde(rename = "totalcopies")]
    pub total_copies: u32,
    #[serde(rename = "copiesav")]
    pub available_copies: u32,
}

impl BookEntity {
    pub fn new(author: &str, series: &str, total_copies: u32) -> Self {
        Self {
            author: author.to_string(),
            series: series.to_string(),
            total_copies,
            available_copies: total_copies,
        }
    }

    // takes one copy off the shelf, false when none is available
    pub(crate) fn take_copy(&mut self) -> bool {
        match self.available_copies.checked_sub(1) {
            Some(left) => {
                self.available_copies = left;
                true
            }
            None => false,
        }
    }

    pub(crate) fn return_copy(&mut self) {
        self.available_copies = self.available_copies.saturating_add(1);
    }
}

// CatalogDocument is the whole catalog keyed by title.
#[derive(Debug, Default, PartialEq, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct CatalogDocument {
    books: BTreeMap<String, BookEntity>,
}

impl CatalogDocument {
    pub fn get(&self, title: &str) -> Option<&BookEntity> {
        self.books.get(title)
    }

    pub(crate) fn get_mut(&mut self, title: &str) -> Option<&mut BookEntity> {
        self.books.get_mut(title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.books.contains_key(title)
    }

    pub(crate) fn insert(&mut self, title: &str, book: BookEntity) -> Option<BookEntity> {
        self.books.insert(title.to_string(), book)
    }

    pub(crate) fn remove(&mut self, title: &str) -> Option<BookEntity> {
        self.books.remove(title)
    }

    pub fn iter(&self) -> impl Iterator<Item=(&String, &BookEntity)> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
