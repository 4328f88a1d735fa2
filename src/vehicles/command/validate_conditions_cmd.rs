use async_trait::async_trait;
use serde::Deserialize;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::vehicles::domain::VehicleService;

pub(crate) struct ValidateConditionsCommand {
    user_service: Box<dyn UserService>,
    vehicle_service: Box<dyn VehicleService>,
}

impl ValidateConditionsCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>, vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            user_service,
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ValidateConditionsCommandRequest {
    pub login: String,
    pub license_plate: String,
    pub conditions: String,
}

impl ValidateConditionsCommandRequest {
    pub fn new(login: &str, license_plate: &str, conditions: &str) -> Self {
        Self {
            login: login.to_string(),
            license_plate: license_plate.to_string(),
            conditions: conditions.to_string(),
        }
    }
}

#[async_trait]
impl Command<ValidateConditionsCommandRequest, ResponseMessage> for ValidateConditionsCommand {
    async fn execute(&self, req: ValidateConditionsCommandRequest) -> Result<ResponseMessage, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        self.vehicle_service.validate_conditions(req.license_plate.as_str(), req.conditions.as_str()).await
            .map_err(CommandError::from)
            .map(|valid| ResponseMessage::outcome(valid,
                                                  "Vehicle conditions validated successfully!",
                                                  "Vehicle conditions validation failed."))
    }
}
