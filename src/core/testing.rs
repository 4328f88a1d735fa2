use lazy_static::lazy_static;
use crate::core::controller::AppState;
use crate::core::library::Role;
use crate::gateway::GatewayPublisherVia;
use crate::users::domain::UserService;
use crate::users::dto::UserDto;
use crate::users::factory::create_user_service;
use crate::vehicles::domain::VehicleService;
use crate::vehicles::factory::create_vehicle_service;

lazy_static! {
    static ref SHARED_STATE: AppState = AppState::new("test", GatewayPublisherVia::Memory);
}

pub(crate) fn shared_state() -> AppState {
    SHARED_STATE.clone()
}

pub(crate) fn vehicle_service() -> Box<dyn VehicleService> {
    let state = shared_state();
    create_vehicle_service(&state.config, state.vehicles, state.publisher)
}

pub(crate) fn user_service() -> Box<dyn UserService> {
    let state = shared_state();
    create_user_service(&state.config, state.users, state.publisher)
}

// registers a user in the shared store and returns its login
pub(crate) async fn seed_user(login: &str, role: Role) -> String {
    let _ = user_service().register_user(&UserDto::new(login, "secret", role)).await.expect("should seed user");
    login.to_string()
}
