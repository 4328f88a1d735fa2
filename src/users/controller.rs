use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::library::ResponseMessage;
use crate::users::command::admin_task_cmd::{AdminTaskCommand, AdminTaskCommandRequest};
use crate::users::command::create_restrictions_cmd::{CreateRestrictionsCommand, CreateRestrictionsCommandRequest};
use crate::users::command::list_users_cmd::{ListUsersCommand, ListUsersCommandRequest, ListUsersCommandResponse};
use crate::users::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest};
use crate::users::command::validate_user_cmd::{ValidateUserCommand, ValidateUserCommandRequest};
use crate::users::domain::UserService;
use crate::users::dto::UserDto;
use crate::users::factory;

fn build_service(state: &AppState) -> Box<dyn UserService> {
    factory::create_user_service(&state.config, state.users.clone(), state.publisher.clone())
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginQuery {
    #[serde(default)]
    login: String,
}

pub(crate) async fn register_user(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    let req: RegisterUserCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = RegisterUserCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn validate_user(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    let req: ValidateUserCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = ValidateUserCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn list_users(
    State(state): State<AppState>) -> Result<Json<ListUsersCommandResponse>, ServerError> {
    let res = ListUsersCommand::new(build_service(&state)).execute(ListUsersCommandRequest {}).await?;
    Ok(Json(res))
}

pub(crate) async fn admin_tasks(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>) -> Result<Json<ResponseMessage>, ServerError> {
    let res = AdminTaskCommand::new(build_service(&state))
        .execute(AdminTaskCommandRequest::new(query.login.as_str())).await?;
    Ok(Json(res))
}

pub(crate) async fn create_restrictions(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    let user: UserDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = CreateRestrictionsCommand::new(build_service(&state))
        .execute(CreateRestrictionsCommandRequest::new(query.login.as_str(), user)).await?;
    Ok(Json(res))
}
