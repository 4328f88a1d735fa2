use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::utils::memory::MemoryRepository;
use crate::vehicles::domain::VehicleService;
use crate::vehicles::domain::model::VehicleEntity;
use crate::vehicles::domain::service::VehicleServiceImpl;
use crate::vehicles::repository::VehicleRepository;

pub(crate) fn create_vehicle_repository() -> Arc<dyn VehicleRepository> {
    Arc::new(MemoryRepository::<VehicleEntity>::new("vehicles"))
}

pub(crate) fn create_vehicle_service(config: &Configuration, vehicle_repository: Arc<dyn VehicleRepository>,
                                     events_publisher: Arc<dyn EventPublisher>) -> Box<dyn VehicleService> {
    Box::new(VehicleServiceImpl::new(config, vehicle_repository, events_publisher))
}
