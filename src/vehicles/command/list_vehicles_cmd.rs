use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::vehicles::domain::VehicleService;
use crate::vehicles::dto::VehicleDto;

pub(crate) struct ListVehiclesCommand {
    vehicle_service: Box<dyn VehicleService>,
}

impl ListVehiclesCommand {
    pub(crate) fn new(vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListVehiclesCommandRequest {
    pub available_only: bool,
}

impl ListVehiclesCommandRequest {
    pub fn new(available_only: bool) -> Self {
        Self {
            available_only,
        }
    }
}


#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct ListVehiclesCommandResponse {
    pub vehicles: Vec<VehicleDto>,
}

impl ListVehiclesCommandResponse {
    pub fn new(vehicles: Vec<VehicleDto>) -> Self {
        Self {
            vehicles,
        }
    }
}

#[async_trait]
impl Command<ListVehiclesCommandRequest, ListVehiclesCommandResponse> for ListVehiclesCommand {
    async fn execute(&self, req: ListVehiclesCommandRequest) -> Result<ListVehiclesCommandResponse, CommandError> {
        let res = if req.available_only {
            self.vehicle_service.list_available().await
        } else {
            self.vehicle_service.list_vehicles().await
        };
        res.map_err(CommandError::from).map(ListVehiclesCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::vehicles::command::list_vehicles_cmd::{ListVehiclesCommand, ListVehiclesCommandRequest};
    use crate::vehicles::dto::VehicleDto;
    use crate::core::testing::vehicle_service;

    #[tokio::test]
    async fn test_should_run_list_vehicles() {
        let svc = vehicle_service();
        let _ = svc.register_vehicle(&VehicleDto::car("LIST-1", 10.0, 4)).await.expect("should register");
        let _ = svc.register_vehicle(&VehicleDto::car("LIST-2", 10.0, 4)).await.expect("should register");
        let _ = svc.update_availability("LIST-2", false).await.expect("should update");

        let cmd = ListVehiclesCommand::new(vehicle_service());
        let all = cmd.execute(ListVehiclesCommandRequest::new(false)).await.expect("should list");
        assert!(all.vehicles.iter().any(|v| v.license_plate == "LIST-2"));
        let available = cmd.execute(ListVehiclesCommandRequest::new(true)).await.expect("should list");
        assert!(available.vehicles.iter().any(|v| v.license_plate == "LIST-1"));
        assert!(!available.vehicles.iter().any(|v| v.license_plate == "LIST-2"));
        assert_eq!("[]", serde_json::to_string(&super::ListVehiclesCommandResponse::new(vec![])).unwrap());
    }
}
