use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::Value;
use crate::accounts::factory::create_account_service;
use crate::checkout::command::audit_inventory_cmd::{AuditInventoryCommand, AuditInventoryCommandRequest, AuditInventoryCommandResponse};
use crate::checkout::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest, CheckoutBookCommandResponse};
use crate::checkout::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest, ReturnBookCommandResponse};
use crate::checkout::domain::CheckoutService;
use crate::checkout::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn CheckoutService> {
    factory::create_checkout_service(&state.config, state.store.clone(), state.publisher.clone())
}

pub(crate) async fn checkout_book(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    json: Json<Value>) -> Result<Json<CheckoutBookCommandResponse>, ServerError> {
    let mut req: CheckoutBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    req.account_id = account_id;
    let svc = build_service(&state);
    let res = CheckoutBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ReturnBookCommandResponse>, ServerError> {
    let req: ReturnBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let svc = build_service(&state);
    let res = ReturnBookCommand::new(svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn audit_inventory(
    State(state): State<AppState>,
    Path(admin_id): Path<String>) -> Result<Json<AuditInventoryCommandResponse>, ServerError> {
    let req = AuditInventoryCommandRequest { admin_id };
    let account_svc = create_account_service(&state.config, state.store.clone(), state.publisher.clone());
    let res = AuditInventoryCommand::new(account_svc, build_service(&state)).execute(req).await?;
    Ok(Json(res))
}
