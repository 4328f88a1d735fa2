use axum::{
    extract::{Multipart, Path, Query, State},
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::library::{ResponseMessage, VehicleKind};
use crate::users::domain::UserService;
use crate::users::factory::create_user_service;
use crate::vehicles::command::bulk_upload_cmd::{BulkUploadCommand, BulkUploadCommandRequest, UploadedFile};
use crate::vehicles::command::count_by_color_cmd::{CountByColorCommand, CountByColorCommandRequest, CountByColorCommandResponse};
use crate::vehicles::command::delete_vehicle_cmd::{DeleteVehicleCommand, DeleteVehicleCommandRequest};
use crate::vehicles::command::list_by_kind_cmd::{ListByKindCommand, ListByKindCommandRequest, ListByKindCommandResponse};
use crate::vehicles::command::list_vehicles_cmd::{ListVehiclesCommand, ListVehiclesCommandRequest, ListVehiclesCommandResponse};
use crate::vehicles::command::register_vehicle_cmd::{RegisterVehicleCommand, RegisterVehicleCommandRequest};
use crate::vehicles::command::update_availability_cmd::{UpdateAvailabilityCommand, UpdateAvailabilityCommandRequest};
use crate::vehicles::command::update_vehicle_cmd::{UpdateVehicleCommand, UpdateVehicleCommandRequest};
use crate::vehicles::command::usage_report_cmd::{UsageReportCommand, UsageReportCommandRequest};
use crate::vehicles::command::validate_conditions_cmd::{ValidateConditionsCommand, ValidateConditionsCommandRequest};
use crate::vehicles::domain::VehicleService;
use crate::vehicles::dto::VehicleDto;
use crate::vehicles::factory;

fn build_service(state: &AppState) -> Box<dyn VehicleService> {
    factory::create_vehicle_service(&state.config, state.vehicles.clone(), state.publisher.clone())
}

fn build_user_service(state: &AppState) -> Box<dyn UserService> {
    create_user_service(&state.config, state.users.clone(), state.publisher.clone())
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginQuery {
    #[serde(default)]
    login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AvailabilityQuery {
    #[serde(rename = "isAvailable")]
    is_available: bool,
    #[serde(default)]
    login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionsQuery {
    #[serde(default)]
    conditions: String,
    #[serde(default)]
    login: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsageReportQuery {
    #[serde(rename = "startDate", default)]
    start_date: String,
    #[serde(rename = "endDate", default)]
    end_date: String,
    #[serde(default)]
    login: String,
}

async fn register_of_kind(state: AppState, json: Value, kind: VehicleKind) -> Result<Json<ResponseMessage>, ServerError> {
    let vehicle = VehicleDto::from_json_of_kind(json, kind).map_err(json_to_server_error)?;
    let res = RegisterVehicleCommand::new(build_service(&state))
        .execute(RegisterVehicleCommandRequest::new(vehicle)).await?;
    Ok(Json(res))
}

pub(crate) async fn register_car(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    register_of_kind(state, json.0, VehicleKind::Car).await
}

pub(crate) async fn register_motorcycle(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    register_of_kind(state, json.0, VehicleKind::Motorcycle).await
}

pub(crate) async fn register_truck(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    register_of_kind(state, json.0, VehicleKind::Truck).await
}

pub(crate) async fn register_van(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    register_of_kind(state, json.0, VehicleKind::Van).await
}

pub(crate) async fn list_vehicles(
    State(state): State<AppState>) -> Result<Json<ListVehiclesCommandResponse>, ServerError> {
    let res = ListVehiclesCommand::new(build_service(&state))
        .execute(ListVehiclesCommandRequest::new(false)).await?;
    Ok(Json(res))
}

pub(crate) async fn list_available(
    State(state): State<AppState>) -> Result<Json<ListVehiclesCommandResponse>, ServerError> {
    let res = ListVehiclesCommand::new(build_service(&state))
        .execute(ListVehiclesCommandRequest::new(true)).await?;
    Ok(Json(res))
}

pub(crate) async fn update_availability(
    State(state): State<AppState>,
    Path(license_plate): Path<String>,
    Query(query): Query<AvailabilityQuery>) -> Result<Json<ResponseMessage>, ServerError> {
    let req = UpdateAvailabilityCommandRequest::new(query.login.as_str(), license_plate.as_str(), query.is_available);
    let res = UpdateAvailabilityCommand::new(build_user_service(&state), build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn validate_conditions(
    State(state): State<AppState>,
    Path(license_plate): Path<String>,
    Query(query): Query<ConditionsQuery>) -> Result<Json<ResponseMessage>, ServerError> {
    let req = ValidateConditionsCommandRequest::new(query.login.as_str(), license_plate.as_str(), query.conditions.as_str());
    let res = ValidateConditionsCommand::new(build_user_service(&state), build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

async fn list_available_of_kind(state: AppState, login: &str, kind: VehicleKind) -> Result<Json<ListByKindCommandResponse>, ServerError> {
    let res = ListByKindCommand::new(build_user_service(&state), build_service(&state))
        .execute(ListByKindCommandRequest::new(login, kind)).await?;
    Ok(Json(res))
}

pub(crate) async fn list_available_cars(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>) -> Result<Json<ListByKindCommandResponse>, ServerError> {
    list_available_of_kind(state, query.login.as_str(), VehicleKind::Car).await
}

pub(crate) async fn list_available_motorcycles(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>) -> Result<Json<ListByKindCommandResponse>, ServerError> {
    list_available_of_kind(state, query.login.as_str(), VehicleKind::Motorcycle).await
}

pub(crate) async fn list_available_trucks(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>) -> Result<Json<ListByKindCommandResponse>, ServerError> {
    list_available_of_kind(state, query.login.as_str(), VehicleKind::Truck).await
}

pub(crate) async fn list_available_vans(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>) -> Result<Json<ListByKindCommandResponse>, ServerError> {
    list_available_of_kind(state, query.login.as_str(), VehicleKind::Van).await
}

pub(crate) async fn update_vehicle(
    State(state): State<AppState>,
    Path(license_plate): Path<String>,
    Query(query): Query<LoginQuery>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    let vehicle: VehicleDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let req = UpdateVehicleCommandRequest::new(query.login.as_str(), license_plate.as_str(), vehicle);
    let res = UpdateVehicleCommand::new(build_user_service(&state), build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn delete_vehicle(
    State(state): State<AppState>,
    Path(license_plate): Path<String>,
    Query(query): Query<LoginQuery>) -> Result<Json<ResponseMessage>, ServerError> {
    let req = DeleteVehicleCommandRequest::new(query.login.as_str(), license_plate.as_str());
    let res = DeleteVehicleCommand::new(build_user_service(&state), build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn usage_report(
    State(state): State<AppState>,
    Query(query): Query<UsageReportQuery>) -> Result<Json<ResponseMessage>, ServerError> {
    let req = UsageReportCommandRequest::new(query.login.as_str(), query.start_date.as_str(), query.end_date.as_str());
    let res = UsageReportCommand::new(build_user_service(&state), build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

async fn read_upload(mut multipart: Multipart) -> Result<UploadedFile, String> {
    while let Some(field) = multipart.next_field().await.map_err(|err| err.to_string())? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or_default().to_string();
        let contents = field.bytes().await.map_err(|err| err.to_string())?;
        return Ok(UploadedFile::new(file_name.as_str(), contents.to_vec()));
    }
    Err("missing file part".to_string())
}

pub(crate) async fn bulk_upload(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
    multipart: Multipart) -> Result<Json<ResponseMessage>, ServerError> {
    let upload = read_upload(multipart).await;
    let req = BulkUploadCommandRequest::new(query.login.as_str(), upload);
    let res = BulkUploadCommand::new(build_user_service(&state), build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn count_by_color(
    State(state): State<AppState>,
    Path(color): Path<String>) -> Result<Json<CountByColorCommandResponse>, ServerError> {
    let res = CountByColorCommand::new(build_service(&state))
        .execute(CountByColorCommandRequest::new(color.as_str())).await?;
    Ok(Json(res))
}
