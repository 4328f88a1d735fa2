use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::core::domain::Configuration;
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::{LibraryResult, VehicleKind};
use crate::gateway::events::EventPublisher;
use crate::vehicles::Vehicle;
use crate::vehicles::domain::VehicleService;
use crate::vehicles::domain::model::VehicleEntity;
use crate::vehicles::dto::VehicleDto;
use crate::vehicles::repository::VehicleRepository;

pub(crate) struct VehicleServiceImpl {
    branch_id: String,
    vehicle_repository: Arc<dyn VehicleRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl VehicleServiceImpl {
    pub(crate) fn new(config: &Configuration, vehicle_repository: Arc<dyn VehicleRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            vehicle_repository,
            events_publisher,
        }
    }

    async fn query(&self, predicate: HashMap<String, String>) -> LibraryResult<Vec<VehicleDto>> {
        let res = self.vehicle_repository.query(&predicate).await?;
        Ok(res.iter().map(VehicleDto::from).collect())
    }
}

#[async_trait]
impl VehicleService for VehicleServiceImpl {
    async fn register_vehicle(&self, vehicle: &VehicleDto) -> LibraryResult<()> {
        let _ = self.vehicle_repository.create(&VehicleEntity::from(vehicle)).await?;
        info!(license_plate = vehicle.license_plate.as_str(), kind = vehicle.details.kind().to_string().as_str(), "vehicle registered");
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "vehicle_registered", "vehicles", vehicle.license_plate.as_str(),
            &branch_metadata(self.branch_id.as_str()), vehicle)?).await?;
        Ok(())
    }

    async fn update_availability(&self, license_plate: &str, available: bool) -> LibraryResult<bool> {
        let found = self.vehicle_repository.set_available(license_plate, available).await?;
        if !found {
            debug!(license_plate, "availability not updated, vehicle not found");
            return Ok(false);
        }
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "vehicle_availability_updated", "vehicles", license_plate,
            &branch_metadata(self.branch_id.as_str()), &available)?).await?;
        Ok(true)
    }

    async fn validate_conditions(&self, license_plate: &str, conditions: &str) -> LibraryResult<bool> {
        let found = self.find_vehicle_by_plate(license_plate).await?.is_some();
        debug!(license_plate, conditions, found, "vehicle conditions checked");
        Ok(found)
    }

    async fn list_by_kind(&self, kind: VehicleKind) -> LibraryResult<Vec<VehicleDto>> {
        self.query(HashMap::from([("kind".to_string(), kind.to_string()),
            ("available".to_string(), true.to_string())])).await
    }

    async fn update_vehicle(&self, license_plate: &str, vehicle: &VehicleDto) -> LibraryResult<bool> {
        let updated = self.vehicle_repository.update(license_plate, &VehicleEntity::from(vehicle)).await?;
        if updated == 0 {
            debug!(license_plate, "vehicle not updated, not found");
            return Ok(false);
        }
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "vehicle_updated", "vehicles", license_plate,
            &branch_metadata(self.branch_id.as_str()), vehicle)?).await?;
        Ok(true)
    }

    async fn delete_vehicle(&self, license_plate: &str) -> LibraryResult<usize> {
        let removed = self.vehicle_repository.delete(license_plate).await?;
        info!(license_plate, removed, "vehicles deleted");
        if removed > 0 {
            let _ = self.events_publisher.publish(&DomainEvent::deleted(
                "vehicle_deleted", "vehicles", license_plate,
                &branch_metadata(self.branch_id.as_str()), &removed)?).await?;
        }
        Ok(removed)
    }

    async fn find_vehicle_by_plate(&self, license_plate: &str) -> LibraryResult<Option<VehicleDto>> {
        match self.vehicle_repository.get(license_plate).await {
            Ok(vehicle) => Ok(Some(VehicleDto::from(&vehicle))),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn list_vehicles(&self) -> LibraryResult<Vec<VehicleDto>> {
        self.query(HashMap::new()).await
    }

    async fn list_available(&self) -> LibraryResult<Vec<VehicleDto>> {
        let all = self.list_vehicles().await?;
        Ok(all.into_iter().filter(|v| v.is_available()).collect())
    }

    fn list_by_color(&self, color: &str, candidates: &[VehicleDto]) -> Vec<VehicleDto> {
        candidates.iter()
            .filter(|v| v.color.as_deref().map_or(false, |c| c.to_lowercase() == color.to_lowercase()))
            .cloned()
            .collect()
    }

    async fn generate_usage_report(&self, start_date: &str, end_date: &str) -> LibraryResult<String> {
        Ok(format!("Usage report from {} to {}", start_date, end_date))
    }

    async fn bulk_upload(&self, file_name: &str, contents: &[u8]) -> LibraryResult<()> {
        // the loader accepts uploads without parsing them
        info!(file_name, bytes = contents.len(), "bulk upload received");
        Ok(())
    }
}

impl From<&VehicleEntity> for VehicleDto {
    fn from(other: &VehicleEntity) -> Self {
        Self {
            license_plate: other.license_plate.to_string(),
            kilometers: other.kilometers,
            rental_value: other.rental_value,
            electric: other.electric,
            available: other.available,
            color: other.color.clone(),
            details: other.details.clone(),
        }
    }
}

impl From<&VehicleDto> for VehicleEntity {
    fn from(other: &VehicleDto) -> Self {
        Self {
            license_plate: other.license_plate.to_string(),
            kilometers: other.kilometers,
            rental_value: other.rental_value,
            electric: other.electric,
            available: other.available,
            color: other.color.clone(),
            details: other.details.clone(),
        }
    }
}
