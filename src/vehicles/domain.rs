pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::{LibraryResult, VehicleKind};
use crate::vehicles::dto::VehicleDto;

#[async_trait]
pub(crate) trait VehicleService: Sync + Send {
    async fn register_vehicle(&self, vehicle: &VehicleDto) -> LibraryResult<()>;
    async fn update_availability(&self, license_plate: &str, available: bool) -> LibraryResult<bool>;
    async fn validate_conditions(&self, license_plate: &str, conditions: &str) -> LibraryResult<bool>;
    async fn list_by_kind(&self, kind: VehicleKind) -> LibraryResult<Vec<VehicleDto>>;
    async fn update_vehicle(&self, license_plate: &str, vehicle: &VehicleDto) -> LibraryResult<bool>;
    async fn delete_vehicle(&self, license_plate: &str) -> LibraryResult<usize>;
    async fn find_vehicle_by_plate(&self, license_plate: &str) -> LibraryResult<Option<VehicleDto>>;
    async fn list_vehicles(&self) -> LibraryResult<Vec<VehicleDto>>;
    async fn list_available(&self) -> LibraryResult<Vec<VehicleDto>>;
    fn list_by_color(&self, color: &str, candidates: &[VehicleDto]) -> Vec<VehicleDto>;
    async fn generate_usage_report(&self, start_date: &str, end_date: &str) -> LibraryResult<String>;
    async fn bulk_upload(&self, file_name: &str, contents: &[u8]) -> LibraryResult<()>;
}
