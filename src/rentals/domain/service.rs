use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::core::domain::Configuration;
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::rentals::domain::RentalService;
use crate::users::dto::UserDto;
use crate::vehicles::repository::VehicleRepository;

pub(crate) struct RentalServiceImpl {
    branch_id: String,
    vehicle_repository: Arc<dyn VehicleRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl RentalServiceImpl {
    pub(crate) fn new(config: &Configuration, vehicle_repository: Arc<dyn VehicleRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            vehicle_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl RentalService for RentalServiceImpl {
    async fn rent(&self, license_plate: &str, user: &UserDto) -> LibraryResult<bool> {
        if !self.vehicle_repository.flip_available(license_plate, true).await? {
            debug!(license_plate, login = user.login.as_str(), "no available vehicle to rent");
            return Ok(false);
        }
        info!(license_plate, login = user.login.as_str(), "vehicle rented");
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "vehicle_rented", "rentals", license_plate,
            &branch_metadata(self.branch_id.as_str()), &user.login)?).await?;
        Ok(true)
    }

    async fn returned(&self, license_plate: &str) -> LibraryResult<bool> {
        if !self.vehicle_repository.flip_available(license_plate, false).await? {
            debug!(license_plate, "no rented vehicle to return");
            return Ok(false);
        }
        info!(license_plate, "vehicle returned");
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "vehicle_returned", "rentals", license_plate,
            &branch_metadata(self.branch_id.as_str()), &license_plate)?).await?;
        Ok(true)
    }
}
