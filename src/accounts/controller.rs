use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use crate::accounts::command::get_dashboard_cmd::{GetDashboardCommand, GetDashboardCommandRequest, GetDashboardCommandResponse};
use crate::accounts::command::login_cmd::{LoginCommand, LoginCommandRequest, LoginCommandResponse};
use crate::accounts::command::signup_cmd::{SignupCommand, SignupCommandRequest, SignupCommandResponse};
use crate::accounts::domain::AccountService;
use crate::accounts::factory;
use crate::catalog::factory::create_catalog_service;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn AccountService> {
    factory::create_account_service(&state.config, state.store.clone(), state.publisher.clone())
}

pub(crate) async fn index() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub(crate) async fn login(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<LoginCommandResponse>, ServerError> {
    let req: LoginCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = LoginCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn signup(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<SignupCommandResponse>, ServerError> {
    let req: SignupCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = SignupCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

async fn load_dashboard(state: AppState, account_id: String,
                        require_account: bool) -> Result<Json<GetDashboardCommandResponse>, ServerError> {
    let req = GetDashboardCommandRequest { account_id, require_account };
    let catalog_svc = create_catalog_service(&state.config, state.store.clone(), state.publisher.clone());
    let res = GetDashboardCommand::new(build_service(&state), catalog_svc).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn dashboard(
    State(state): State<AppState>,
    Path(account_id): Path<String>) -> Result<Json<GetDashboardCommandResponse>, ServerError> {
    load_dashboard(state, account_id, true).await
}

pub(crate) async fn browse(
    State(state): State<AppState>,
    Path(account_id): Path<String>) -> Result<Json<GetDashboardCommandResponse>, ServerError> {
    load_dashboard(state, account_id, false).await
}
