use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

// Accounts at or above this level are administrators.
pub(crate) const ADMIN_LEVEL: i64 = 2;

// Level assigned to accounts created through signup.
pub(crate) const MEMBER_LEVEL: i64 = 1;

#[derive(Debug)]
pub enum LibraryError {
    Database {
        message: String,
        reason_code: Option<String>,
        retryable: bool,
    },
    AccessDenied {
        message: String,
        reason_code: Option<String>,
    },
    Conflict {
        message: String,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn database(message: &str, reason_code: Option<String>, retryable: bool) -> LibraryError {
        LibraryError::Database { message: message.to_string(), reason_code, retryable }
    }

    pub fn access_denied(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::AccessDenied { message: message.to_string(), reason_code }
    }

    pub fn conflict(message: &str) -> LibraryError {
        LibraryError::Conflict { message: message.to_string() }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn retryable(&self) -> bool {
        match self {
            LibraryError::Database { retryable, .. } => { *retryable }
            LibraryError::AccessDenied { .. } => { false }
            LibraryError::Conflict { .. } => { false }
            LibraryError::NotFound { .. } => { false }
            LibraryError::Validation { .. } => { false }
            LibraryError::Serialization { .. } => { false }
            LibraryError::Runtime { .. } => { false }
        }
    }
}

impl From<std::io::Error> for LibraryError {
    fn from(err: std::io::Error) -> Self {
        // interrupted or would-block writes can be attempted again
        let retryable = matches!(err.kind(),
            std::io::ErrorKind::Interrupted | std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut);
        LibraryError::database(
            format!("document io {:?}", err).as_str(), Some(format!("{:?}", err.kind())), retryable)
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl From<config::ConfigError> for LibraryError {
    fn from(err: config::ConfigError) -> Self {
        LibraryError::runtime(
            format!("configuration {}", err).as_str(), Some("config".to_string()))
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::Database { message, reason_code, retryable } => {
                write!(f, "{} {:?} {}", message, reason_code, retryable)
            }
            LibraryError::AccessDenied { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Conflict { message } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

impl std::error::Error for LibraryError {}

/// A specialized Result type for the library services.
pub type LibraryResult<T> = Result<T, LibraryError>;

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum Role {
    Member,
    Admin,
}

impl Role {
    pub fn from_level(level: i64) -> Self {
        if level >= ADMIN_LEVEL {
            Role::Admin
        } else {
            Role::Member
        }
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Admin" => Role::Admin,
            "Member" => Role::Member,
            _ => Role::Member,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::Member => write!(f, "Member"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

// CirculationStatus reports what a checkout or return did to the library state.
#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum CirculationStatus {
    CheckedOut,
    AlreadyHeld,
    Unavailable,
    Returned,
}

impl CirculationStatus {
    // true when the operation changed and persisted state
    pub fn is_mutation(&self) -> bool {
        matches!(self, CirculationStatus::CheckedOut | CirculationStatus::Returned)
    }
}

impl From<String> for CirculationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "CheckedOut" => CirculationStatus::CheckedOut,
            "AlreadyHeld" => CirculationStatus::AlreadyHeld,
            "Unavailable" => CirculationStatus::Unavailable,
            "Returned" => CirculationStatus::Returned,
            _ => CirculationStatus::Unavailable,
        }
    }
}

impl Display for CirculationStatus {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            CirculationStatus::CheckedOut => write!(f, "CheckedOut"),
            CirculationStatus::AlreadyHeld => write!(f, "AlreadyHeld"),
            CirculationStatus::Unavailable => write!(f, "Unavailable"),
            CirculationStatus::Returned => write!(f, "Returned"),
        }
    }
}
