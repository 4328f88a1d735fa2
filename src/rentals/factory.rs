use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::rentals::domain::{RentalLedger, RentalService};
use crate::rentals::domain::ledger::MemoryRentalLedger;
use crate::rentals::domain::service::RentalServiceImpl;
use crate::vehicles::repository::VehicleRepository;

pub(crate) fn create_rental_service(config: &Configuration, vehicle_repository: Arc<dyn VehicleRepository>,
                                    events_publisher: Arc<dyn EventPublisher>) -> Box<dyn RentalService> {
    Box::new(RentalServiceImpl::new(config, vehicle_repository, events_publisher))
}

pub(crate) fn create_rental_ledger(config: &Configuration, vehicle_repository: Arc<dyn VehicleRepository>) -> Box<dyn RentalLedger> {
    Box::new(MemoryRentalLedger::new(config, vehicle_repository))
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;
    use crate::rentals::factory::create_rental_ledger;
    use crate::vehicles::factory::create_vehicle_repository;

    #[tokio::test]
    async fn test_should_create_empty_ledger() {
        let ledger = create_rental_ledger(&Configuration::new("test"), create_vehicle_repository());
        assert!(ledger.list_rented().await.expect("should list").is_empty());
    }
}
