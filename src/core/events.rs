use std::collections::HashMap;
use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::utils::date::serializer;

// DomainEventType defines type of event for library state changes
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
    CheckedOut,
    Returned,
}

// DomainEvent records a committed change to accounts or the catalog
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub group: String,
    pub key: String,
    pub kind: DomainEventType,
    pub metadata: HashMap<String, String>,
    pub json_data: String,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Added, HashMap::new(), data)
    }

    pub fn updated<T: Serialize>(name: &str, group: &str, key: &str, metadata: HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Updated, metadata, data)
    }

    pub fn deleted<T: Serialize>(name: &str, group: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        Self::build(name, group, key, DomainEventType::Deleted, HashMap::new(), data)
    }

    // circulation events are keyed by title and carry the account in metadata
    pub fn checked_out<T: Serialize>(account_id: &str, title: &str, data: &T) -> serde_json::Result<Self> {
        Self::build("book_checked_out", "circulation", title, DomainEventType::CheckedOut,
                    HashMap::from([("account_id".to_string(), account_id.to_string())]), data)
    }

    pub fn returned<T: Serialize>(account_id: &str, title: &str, data: &T) -> serde_json::Result<Self> {
        Self::build("book_returned", "circulation", title, DomainEventType::Returned,
                    HashMap::from([("account_id".to_string(), account_id.to_string())]), data)
    }

    fn build<T: Serialize>(name: &str, group: &str, key: &str, kind: DomainEventType,
                           metadata: HashMap<String, String>, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(data)?;
        Ok(DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            group: group.to_string(),
            key: key.to_string(),
            kind,
            metadata,
            json_data: json,
            created_at: Utc::now().naive_utc(),
        })
    }
}
