pub(crate) mod memory_vehicle_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::vehicles::domain::model::VehicleEntity;

#[async_trait]
pub(crate) trait VehicleRepository: Repository<VehicleEntity> {
    // sets the flag on the first vehicle with the plate, false when absent
    async fn set_available(&self, license_plate: &str, available: bool) -> LibraryResult<bool>;

    // flips the first vehicle with the plate whose flag equals `from`, as one step
    async fn flip_available(&self, license_plate: &str, from: bool) -> LibraryResult<bool>;
}
