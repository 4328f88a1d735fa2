use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::command::{Command, CommandError};
use crate::vehicles::domain::VehicleService;

pub(crate) struct CountByColorCommand {
    vehicle_service: Box<dyn VehicleService>,
}

impl CountByColorCommand {
    pub(crate) fn new(vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CountByColorCommandRequest {
    pub color: String,
}

impl CountByColorCommandRequest {
    pub fn new(color: &str) -> Self {
        Self {
            color: color.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
pub(crate) struct CountByColorCommandResponse {
    pub count: usize,
}

impl CountByColorCommandResponse {
    pub fn new(count: usize) -> Self {
        Self {
            count,
        }
    }
}

#[async_trait]
impl Command<CountByColorCommandRequest, CountByColorCommandResponse> for CountByColorCommand {
    async fn execute(&self, req: CountByColorCommandRequest) -> Result<CountByColorCommandResponse, CommandError> {
        let candidates = self.vehicle_service.list_vehicles().await.map_err(CommandError::from)?;
        let matched = self.vehicle_service.list_by_color(req.color.as_str(), &candidates);
        Ok(CountByColorCommandResponse::new(matched.len()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;
    use crate::gateway::factory::create_publisher;
    use crate::vehicles::command::count_by_color_cmd::{CountByColorCommand, CountByColorCommandRequest};
    use crate::vehicles::dto::VehicleDto;
    use crate::vehicles::factory;

    #[tokio::test]
    async fn test_should_run_count_by_color() {
        let svc = factory::create_vehicle_service(&Configuration::new("test"),
                                                  factory::create_vehicle_repository(), create_publisher(GatewayPublisherVia::Memory));
        let _ = svc.register_vehicle(&VehicleDto::car("COL-1", 10.0, 4).with_color("Red")).await.expect("should register");
        let _ = svc.register_vehicle(&VehicleDto::car("COL-2", 10.0, 4).with_color("RED")).await.expect("should register");
        let _ = svc.register_vehicle(&VehicleDto::car("COL-3", 10.0, 4).with_color("Blue")).await.expect("should register");
        let _ = svc.register_vehicle(&VehicleDto::car("COL-4", 10.0, 4)).await.expect("should register");

        let cmd = CountByColorCommand::new(svc);
        let res = cmd.execute(CountByColorCommandRequest::new("red")).await.expect("should count");
        assert_eq!(2, res.count);
        assert_eq!("2", serde_json::to_string(&res).unwrap());
        let res = cmd.execute(CountByColorCommandRequest::new("green")).await.expect("should count");
        assert_eq!(0, res.count);
    }
}
