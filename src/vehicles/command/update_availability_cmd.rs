use async_trait::async_trait;
use serde::Deserialize;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::vehicles::domain::VehicleService;

pub(crate) struct UpdateAvailabilityCommand {
    user_service: Box<dyn UserService>,
    vehicle_service: Box<dyn VehicleService>,
}

impl UpdateAvailabilityCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>, vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            user_service,
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateAvailabilityCommandRequest {
    pub login: String,
    pub license_plate: String,
    pub available: bool,
}

impl UpdateAvailabilityCommandRequest {
    pub fn new(login: &str, license_plate: &str, available: bool) -> Self {
        Self {
            login: login.to_string(),
            license_plate: license_plate.to_string(),
            available,
        }
    }
}

#[async_trait]
impl Command<UpdateAvailabilityCommandRequest, ResponseMessage> for UpdateAvailabilityCommand {
    async fn execute(&self, req: UpdateAvailabilityCommandRequest) -> Result<ResponseMessage, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        // absent plates are a silent no-op
        self.vehicle_service.update_availability(req.license_plate.as_str(), req.available).await
            .map_err(CommandError::from).map(|_| ResponseMessage::new(true, "Vehicle availability updated successfully!"))
    }
}
