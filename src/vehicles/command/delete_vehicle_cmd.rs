use async_trait::async_trait;
use serde::Deserialize;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::vehicles::domain::VehicleService;

pub(crate) struct DeleteVehicleCommand {
    user_service: Box<dyn UserService>,
    vehicle_service: Box<dyn VehicleService>,
}

impl DeleteVehicleCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>, vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            user_service,
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteVehicleCommandRequest {
    pub login: String,
    pub license_plate: String,
}

impl DeleteVehicleCommandRequest {
    pub fn new(login: &str, license_plate: &str) -> Self {
        Self {
            login: login.to_string(),
            license_plate: license_plate.to_string(),
        }
    }
}

#[async_trait]
impl Command<DeleteVehicleCommandRequest, ResponseMessage> for DeleteVehicleCommand {
    async fn execute(&self, req: DeleteVehicleCommandRequest) -> Result<ResponseMessage, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        self.vehicle_service.delete_vehicle(req.license_plate.as_str()).await
            .map_err(CommandError::from).map(|_| ResponseMessage::new(true, "Vehicle deleted successfully!"))
    }
}
