use std::sync::Arc;
use axum::http::StatusCode;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::gateway::GatewayPublisherVia;
use crate::gateway::events::EventPublisher;
use crate::gateway::factory::create_publisher;
use crate::users::factory::create_user_repository;
use crate::users::repository::UserRepository;
use crate::vehicles::factory::create_vehicle_repository;
use crate::vehicles::repository::VehicleRepository;

// AppState owns the stores for the lifetime of the process
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) users: Arc<dyn UserRepository>,
    pub(crate) vehicles: Arc<dyn VehicleRepository>,
    pub(crate) publisher: Arc<dyn EventPublisher>,
}

impl AppState {
    pub fn new(branch: &str, via: GatewayPublisherVia) -> AppState {
        AppState {
            config: Configuration::new(branch),
            users: create_user_repository(),
            vehicles: create_vehicle_repository(),
            publisher: create_publisher(via),
        }
    }
}

pub(crate) type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Access { message, .. } => {
                (StatusCode::FORBIDDEN, message)
            }
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
        }
    }
}
