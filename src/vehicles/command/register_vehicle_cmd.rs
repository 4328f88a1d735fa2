use async_trait::async_trait;
use serde::Deserialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::vehicles::Vehicle;
use crate::vehicles::domain::VehicleService;
use crate::vehicles::dto::VehicleDto;

pub(crate) struct RegisterVehicleCommand {
    vehicle_service: Box<dyn VehicleService>,
}

impl RegisterVehicleCommand {
    pub(crate) fn new(vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterVehicleCommandRequest {
    pub vehicle: VehicleDto,
}

impl RegisterVehicleCommandRequest {
    pub fn new(vehicle: VehicleDto) -> Self {
        Self {
            vehicle,
        }
    }
}

#[async_trait]
impl Command<RegisterVehicleCommandRequest, ResponseMessage> for RegisterVehicleCommand {
    async fn execute(&self, req: RegisterVehicleCommandRequest) -> Result<ResponseMessage, CommandError> {
        let message = format!("{} registered successfully!", req.vehicle.kind());
        self.vehicle_service.register_vehicle(&req.vehicle).await
            .map_err(CommandError::from).map(|_| ResponseMessage::new(true, message.as_str()))
    }
}
