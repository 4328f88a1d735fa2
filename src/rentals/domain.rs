use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::users::dto::UserDto;
use crate::vehicles::dto::VehicleDto;

pub mod ledger;
pub mod model;
pub mod service;

#[async_trait]
pub(crate) trait RentalService: Sync + Send {
    // flips the first available vehicle with the plate, false when none is available
    async fn rent(&self, license_plate: &str, user: &UserDto) -> LibraryResult<bool>;
    // flips the first rented vehicle with the plate back, false when none is rented
    async fn returned(&self, license_plate: &str) -> LibraryResult<bool>;
}

// RentalLedger records who rented which vehicle and when
#[async_trait]
pub(crate) trait RentalLedger: Sync + Send {
    async fn rent(&self, vehicle: &VehicleDto, user: &UserDto) -> LibraryResult<bool>;
    async fn returned(&self, vehicle: &VehicleDto) -> LibraryResult<bool>;
    async fn list_rented(&self) -> LibraryResult<Vec<VehicleDto>>;
}
