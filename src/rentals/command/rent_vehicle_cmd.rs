use async_trait::async_trait;
use serde::Deserialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::rentals::domain::RentalService;
use crate::users::dto::UserDto;

pub(crate) struct RentVehicleCommand {
    rental_service: Box<dyn RentalService>,
}

impl RentVehicleCommand {
    pub(crate) fn new(rental_service: Box<dyn RentalService>) -> Self {
        Self {
            rental_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RentVehicleCommandRequest {
    pub license_plate: String,
    pub user: UserDto,
}

impl RentVehicleCommandRequest {
    pub fn new(license_plate: &str, user: UserDto) -> Self {
        Self {
            license_plate: license_plate.to_string(),
            user,
        }
    }
}

#[async_trait]
impl Command<RentVehicleCommandRequest, ResponseMessage> for RentVehicleCommand {
    async fn execute(&self, req: RentVehicleCommandRequest) -> Result<ResponseMessage, CommandError> {
        self.rental_service.rent(req.license_plate.as_str(), &req.user).await
            .map_err(CommandError::from)
            .map(|rented| ResponseMessage::outcome(rented, "Vehicle rented successfully!", "Vehicle could not be rented."))
    }
}
