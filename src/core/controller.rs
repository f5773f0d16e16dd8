use std::sync::Arc;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use crate::accounts::controller::{browse, dashboard, index, login, signup};
use crate::catalog::controller::{add_book, admin_view, delete_book, edit_book};
use crate::checkout::controller::{audit_inventory, checkout_book, return_book};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::store::LibraryStore;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: Arc<LibraryStore>,
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(config: Configuration, store: Arc<LibraryStore>, publisher: Arc<dyn EventPublisher>) -> AppState {
        AppState {
            config,
            store,
            publisher,
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { .. } => {
                (StatusCode::FORBIDDEN, format!("{}", err))
            }
            CommandError::Database { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err))
            }
            CommandError::Conflict { .. } => {
                (StatusCode::CONFLICT, format!("{}", err))
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{}", err))
            }
            CommandError::Other { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{}", err))
            }
        }
    }
}

pub(crate) fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(login))
        .route("/signup", post(signup))
        .route("/dashboard/:id", get(dashboard))
        .route("/browser/:id", get(browse))
        .route("/checkout/:id", post(checkout_book))
        .route("/update-data", post(return_book))
        .route("/admin/:id", get(admin_view))
        .route("/admin/:id/add", post(add_book))
        .route("/admin/:id/edit", post(edit_book))
        .route("/admin/:id/delete", post(delete_book))
        .route("/admin/:id/audit", get(audit_inventory))
        .with_state(state)
}
