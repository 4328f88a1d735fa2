use axum::{
    body::{Bytes, HttpBody},
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    BoxError, Router,
};
use crate::core::controller::AppState;
use crate::rentals::controller::{rent_vehicle, return_vehicle};
use crate::users::controller::{admin_tasks, create_restrictions, list_users, register_user, validate_user};
use crate::vehicles::controller::{bulk_upload, count_by_color, delete_vehicle, list_available,
                                  list_available_cars, list_available_motorcycles, list_available_trucks,
                                  list_available_vans, list_vehicles, register_car, register_motorcycle,
                                  register_truck, register_van, update_availability, update_vehicle,
                                  usage_report, validate_conditions};

// build_router mounts every user, vehicle and rental endpoint on one state
pub(crate) fn build_router<B>(state: AppState) -> Router<(), B>
where
    B: HttpBody + Send + 'static,
    B::Data: Into<Bytes> + Send,
    B::Error: Into<BoxError>,
{
    let max_upload_bytes = state.config.max_upload_bytes;
    Router::new()
        .route("/users/register", post(register_user))
        .route("/users/validate", post(validate_user))
        .route("/users/all", get(list_users))
        .route("/users/admin/tasks", get(admin_tasks))
        .route("/users/createRestrictions", post(create_restrictions))
        .route("/vehicles/registerCar", post(register_car))
        .route("/vehicles/registerMotorcycle", post(register_motorcycle))
        .route("/vehicles/registerTruck", post(register_truck))
        .route("/vehicles/registerVan", post(register_van))
        .route("/vehicles/all", get(list_vehicles))
        .route("/vehicles/available", get(list_available))
        .route("/vehicles/available/cars", get(list_available_cars))
        .route("/vehicles/available/motorcycles", get(list_available_motorcycles))
        .route("/vehicles/available/trucks", get(list_available_trucks))
        .route("/vehicles/available/vans", get(list_available_vans))
        .route("/vehicles/availability/:plate", put(update_availability))
        .route("/vehicles/validateConditions/:plate", put(validate_conditions))
        .route("/vehicles/update/:plate", put(update_vehicle))
        .route("/vehicles/delete/:plate", delete(delete_vehicle))
        .route("/vehicles/rent/:plate", post(rent_vehicle))
        .route("/vehicles/return/:plate", post(return_vehicle))
        .route("/vehicles/usageReport", get(usage_report))
        .route("/vehicles/bulkUpload", post(bulk_upload).layer(DefaultBodyLimit::max(max_upload_bytes)))
        .route("/vehicles/vehicles/color/:color/count", get(count_by_color))
        .with_state(state)
}
