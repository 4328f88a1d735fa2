use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::utils::memory::MemoryRepository;
use crate::vehicles::domain::model::VehicleEntity;
use crate::vehicles::repository::VehicleRepository;

#[async_trait]
impl VehicleRepository for MemoryRepository<VehicleEntity> {
    async fn set_available(&self, license_plate: &str, available: bool) -> LibraryResult<bool> {
        Ok(self.update_first(|v| v.license_plate == license_plate,
                             |v| v.available = available).await)
    }

    async fn flip_available(&self, license_plate: &str, from: bool) -> LibraryResult<bool> {
        Ok(self.update_first(|v| v.license_plate == license_plate && v.available == from,
                             |v| v.available = !from).await)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::vehicles::domain::model::{VehicleDetails, VehicleEntity};
    use crate::vehicles::factory::create_vehicle_repository;

    #[tokio::test]
    async fn test_should_set_available_on_first_match() {
        let repo = create_vehicle_repository();
        let _ = repo.create(&VehicleEntity::new("ABC1", 10.0, VehicleDetails::Car { number_of_doors: 4 })).await.expect("should create");
        let _ = repo.create(&VehicleEntity::new("ABC1", 20.0, VehicleDetails::Car { number_of_doors: 2 })).await.expect("should create");
        assert!(repo.set_available("ABC1", false).await.expect("should set"));
        assert!(!repo.set_available("NONE", false).await.expect("should set"));
        let available = repo.query(&HashMap::from([("available".to_string(), "true".to_string())])).await.expect("should query");
        assert_eq!(1, available.len());
        assert_eq!(20.0, available[0].rental_value);
    }

    #[tokio::test]
    async fn test_should_flip_only_from_expected_state() {
        let repo = create_vehicle_repository();
        let _ = repo.create(&VehicleEntity::new("V1", 10.0, VehicleDetails::Van { seating_capacity: 9 })).await.expect("should create");
        assert!(!repo.flip_available("V1", false).await.expect("should flip"));
        assert!(repo.flip_available("V1", true).await.expect("should flip"));
        assert!(!repo.flip_available("V1", true).await.expect("should flip"));
        assert!(!repo.get("V1").await.expect("should get").available);
    }

    #[tokio::test]
    async fn test_should_flip_second_duplicate_when_first_is_taken() {
        let repo = create_vehicle_repository();
        let _ = repo.create(&VehicleEntity::new("D1", 10.0, VehicleDetails::Motorcycle { has_sidecar: false })).await.expect("should create");
        let _ = repo.create(&VehicleEntity::new("D1", 11.0, VehicleDetails::Motorcycle { has_sidecar: true })).await.expect("should create");
        assert!(repo.flip_available("D1", true).await.expect("should flip"));
        assert!(repo.flip_available("D1", true).await.expect("should flip"));
        assert!(!repo.flip_available("D1", true).await.expect("should flip"));
    }
}
