use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{Value};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::library::ResponseMessage;
use crate::rentals::command::rent_vehicle_cmd::{RentVehicleCommand, RentVehicleCommandRequest};
use crate::rentals::command::return_vehicle_cmd::{ReturnVehicleCommand, ReturnVehicleCommandRequest};
use crate::rentals::domain::RentalService;
use crate::rentals::factory;
use crate::users::dto::UserDto;

fn build_service(state: &AppState) -> Box<dyn RentalService> {
    factory::create_rental_service(&state.config, state.vehicles.clone(), state.publisher.clone())
}

pub(crate) async fn rent_vehicle(
    State(state): State<AppState>,
    Path(license_plate): Path<String>,
    json: Json<Value>) -> Result<Json<ResponseMessage>, ServerError> {
    let user: UserDto = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = RentVehicleCommand::new(build_service(&state))
        .execute(RentVehicleCommandRequest::new(license_plate.as_str(), user)).await?;
    Ok(Json(res))
}

pub(crate) async fn return_vehicle(
    State(state): State<AppState>,
    Path(license_plate): Path<String>) -> Result<Json<ResponseMessage>, ServerError> {
    let res = ReturnVehicleCommand::new(build_service(&state))
        .execute(ReturnVehicleCommandRequest::new(license_plate.as_str())).await?;
    Ok(Json(res))
}
