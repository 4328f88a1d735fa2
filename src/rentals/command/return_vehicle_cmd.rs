use async_trait::async_trait;
use serde::Deserialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::rentals::domain::RentalService;

pub(crate) struct ReturnVehicleCommand {
    rental_service: Box<dyn RentalService>,
}

impl ReturnVehicleCommand {
    pub(crate) fn new(rental_service: Box<dyn RentalService>) -> Self {
        Self {
            rental_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnVehicleCommandRequest {
    pub license_plate: String,
}

impl ReturnVehicleCommandRequest {
    pub fn new(license_plate: &str) -> Self {
        Self {
            license_plate: license_plate.to_string(),
        }
    }
}

#[async_trait]
impl Command<ReturnVehicleCommandRequest, ResponseMessage> for ReturnVehicleCommand {
    async fn execute(&self, req: ReturnVehicleCommandRequest) -> Result<ResponseMessage, CommandError> {
        self.rental_service.returned(req.license_plate.as_str()).await
            .map_err(CommandError::from)
            .map(|returned| ResponseMessage::outcome(returned, "Vehicle returned successfully!", "Vehicle could not be returned."))
    }
}
