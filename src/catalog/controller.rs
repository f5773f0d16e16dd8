use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::accounts::domain::AccountService;
use crate::accounts::factory::create_account_service;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::get_admin_view_cmd::{GetAdminViewCommand, GetAdminViewCommandRequest, GetAdminViewCommandResponse};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_services(state: &AppState) -> (Box<dyn AccountService>, Box<dyn CatalogService>) {
    (create_account_service(&state.config, state.store.clone(), state.publisher.clone()),
     factory::create_catalog_service(&state.config, state.store.clone(), state.publisher.clone()))
}

pub(crate) async fn admin_view(
    State(state): State<AppState>,
    Path(admin_id): Path<String>) -> Result<Json<GetAdminViewCommandResponse>, ServerError> {
    let req = GetAdminViewCommandRequest { admin_id };
    let (account_svc, catalog_svc) = build_services(&state);
    let res = GetAdminViewCommand::new(account_svc, catalog_svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn add_book(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
    json: Json<Value>) -> Result<Json<AddBookCommandResponse>, ServerError> {
    let mut req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.admin_id = admin_id;
    let (account_svc, catalog_svc) = build_services(&state);
    let res = AddBookCommand::new(account_svc, catalog_svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn edit_book(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let mut req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.admin_id = admin_id;
    let (account_svc, catalog_svc) = build_services(&state);
    let res = UpdateBookCommand::new(account_svc, catalog_svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn delete_book(
    State(state): State<AppState>,
    Path(admin_id): Path<String>,
    json: Json<Value>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let mut req: RemoveBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.admin_id = admin_id;
    let (account_svc, catalog_svc) = build_services(&state);
    let res = RemoveBookCommand::new(account_svc, catalog_svc).execute(req).await?;
    Ok(Json(res))
}
