use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::VehicleKind;
use crate::users::domain::UserService;
use crate::vehicles::domain::VehicleService;
use crate::vehicles::dto::VehicleDto;

pub(crate) struct ListByKindCommand {
    user_service: Box<dyn UserService>,
    vehicle_service: Box<dyn VehicleService>,
}

impl ListByKindCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>, vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            user_service,
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListByKindCommandRequest {
    pub login: String,
    pub kind: VehicleKind,
}

impl ListByKindCommandRequest {
    pub fn new(login: &str, kind: VehicleKind) -> Self {
        Self {
            login: login.to_string(),
            kind,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListByKindCommandResponse {
    pub vehicles: Vec<VehicleDto>,
}

impl ListByKindCommandResponse {
    pub fn new(vehicles: Vec<VehicleDto>) -> Self {
        Self {
            vehicles,
        }
    }
}

#[async_trait]
impl Command<ListByKindCommandRequest, ListByKindCommandResponse> for ListByKindCommand {
    async fn execute(&self, req: ListByKindCommandRequest) -> Result<ListByKindCommandResponse, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        self.vehicle_service.list_by_kind(req.kind).await.map_err(CommandError::from).map(ListByKindCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::library::{Role, VehicleKind};
    use crate::core::testing::{seed_user, user_service, vehicle_service};
    use crate::vehicles::command::list_by_kind_cmd::{ListByKindCommand, ListByKindCommandRequest};
    use crate::vehicles::domain::model::VehicleDetails;
    use crate::vehicles::dto::VehicleDto;

    #[tokio::test]
    async fn test_should_run_list_by_kind() {
        let admin = seed_user("kind-admin", Role::Admin).await;
        let svc = vehicle_service();
        let _ = svc.register_vehicle(&VehicleDto::new("KIND-V1", 30.0, VehicleDetails::Van { seating_capacity: 9 })).await.expect("should register");
        let _ = svc.register_vehicle(&VehicleDto::new("KIND-V2", 30.0, VehicleDetails::Van { seating_capacity: 7 })).await.expect("should register");
        let _ = svc.update_availability("KIND-V2", false).await.expect("should update");

        let cmd = ListByKindCommand::new(user_service(), vehicle_service());
        let res = cmd.execute(ListByKindCommandRequest::new(admin.as_str(), VehicleKind::Van)).await.expect("should list");
        assert!(res.vehicles.iter().all(|v| v.details.kind() == VehicleKind::Van && v.available));
        assert!(res.vehicles.iter().any(|v| v.license_plate == "KIND-V1"));
        assert!(!res.vehicles.iter().any(|v| v.license_plate == "KIND-V2"));
    }

    #[tokio::test]
    async fn test_should_deny_list_by_kind_for_unknown_login() {
        let cmd = ListByKindCommand::new(user_service(), vehicle_service());
        let err = cmd.execute(ListByKindCommandRequest::new("kind-nobody", VehicleKind::Car)).await.unwrap_err();
        assert!(matches!(err, CommandError::Access { .. }));
    }
}
