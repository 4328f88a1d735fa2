use async_trait::async_trait;
use serde::Deserialize;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::vehicles::domain::VehicleService;
use crate::vehicles::dto::VehicleDto;

pub(crate) struct UpdateVehicleCommand {
    user_service: Box<dyn UserService>,
    vehicle_service: Box<dyn VehicleService>,
}

impl UpdateVehicleCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>, vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            user_service,
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UpdateVehicleCommandRequest {
    pub login: String,
    pub license_plate: String,
    pub vehicle: VehicleDto,
}

impl UpdateVehicleCommandRequest {
    pub fn new(login: &str, license_plate: &str, vehicle: VehicleDto) -> Self {
        Self {
            login: login.to_string(),
            license_plate: license_plate.to_string(),
            vehicle,
        }
    }
}

#[async_trait]
impl Command<UpdateVehicleCommandRequest, ResponseMessage> for UpdateVehicleCommand {
    async fn execute(&self, req: UpdateVehicleCommandRequest) -> Result<ResponseMessage, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        self.vehicle_service.update_vehicle(req.license_plate.as_str(), &req.vehicle).await
            .map_err(CommandError::from).map(|_| ResponseMessage::new(true, "Vehicle updated successfully!"))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::library::Role;
    use crate::core::testing::{seed_user, user_service, vehicle_service};
    use crate::vehicles::command::update_vehicle_cmd::{UpdateVehicleCommand, UpdateVehicleCommandRequest};
    use crate::vehicles::dto::VehicleDto;

    #[tokio::test]
    async fn test_should_run_update_vehicle() {
        let admin = seed_user("upd-admin", Role::Admin).await;
        let _ = vehicle_service().register_vehicle(&VehicleDto::car("UPD-1", 10.0, 4)).await.expect("should register");

        let cmd = UpdateVehicleCommand::new(user_service(), vehicle_service());
        let replacement = VehicleDto::car("UPD-1", 25.0, 2).with_color("Red");
        let res = cmd.execute(UpdateVehicleCommandRequest::new(admin.as_str(), "UPD-1", replacement.clone())).await.expect("should update");
        assert_eq!("Vehicle updated successfully!", res.message.as_str());
        let stored = vehicle_service().find_vehicle_by_plate("UPD-1").await.expect("should find").expect("should exist");
        assert_eq!(replacement, stored);
    }

    #[tokio::test]
    async fn test_should_not_update_vehicle_for_user() {
        let login = seed_user("upd-user", Role::User).await;
        let _ = vehicle_service().register_vehicle(&VehicleDto::car("UPD-2", 10.0, 4)).await.expect("should register");

        let cmd = UpdateVehicleCommand::new(user_service(), vehicle_service());
        let err = cmd.execute(UpdateVehicleCommandRequest::new(login.as_str(), "UPD-2", VehicleDto::car("UPD-2", 99.0, 2))).await.unwrap_err();
        assert!(matches!(err, CommandError::Access { .. }));
        let stored = vehicle_service().find_vehicle_by_plate("UPD-2").await.expect("should find").expect("should exist");
        assert_eq!(10.0, stored.rental_value);
    }
}
