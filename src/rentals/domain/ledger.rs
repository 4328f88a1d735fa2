use std::sync::Arc;
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::rentals::domain::RentalLedger;
use crate::rentals::domain::model::RentedVehicleEntity;
use crate::users::dto::UserDto;
use crate::vehicles::Vehicle;
use crate::vehicles::dto::VehicleDto;
use crate::vehicles::repository::VehicleRepository;

const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

// MemoryRentalLedger keeps active rentals beside the vehicle store. Availability
// is always read from and written to the store itself.
pub(crate) struct MemoryRentalLedger {
    branch_id: String,
    vehicle_repository: Arc<dyn VehicleRepository>,
    rentals: RwLock<Vec<RentedVehicleEntity>>,
}

impl MemoryRentalLedger {
    pub(crate) fn new(config: &Configuration, vehicle_repository: Arc<dyn VehicleRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            vehicle_repository,
            rentals: RwLock::new(vec![]),
        }
    }
}

#[async_trait]
impl RentalLedger for MemoryRentalLedger {
    async fn rent(&self, vehicle: &VehicleDto, user: &UserDto) -> LibraryResult<bool> {
        let mut rentals = self.rentals.write().await;
        if !self.vehicle_repository.flip_available(vehicle.license_plate.as_str(), true).await? {
            debug!(license_plate = vehicle.license_plate.as_str(), "vehicle absent or already rented");
            return Ok(false);
        }
        let mut rented = vehicle.clone();
        rented.available = false;
        let row = RentedVehicleEntity::new(self.branch_id.as_str(), user, &rented);
        info!(license_plate = vehicle.license_plate.as_str(), rental_id = row.rental_id.as_str(),
            login = user.login.as_str(), "rental recorded");
        rentals.push(row);
        Ok(true)
    }

    async fn returned(&self, vehicle: &VehicleDto) -> LibraryResult<bool> {
        let mut rentals = self.rentals.write().await;
        let Some(pos) = rentals.iter().position(|r| r.vehicle.license_plate == vehicle.license_plate) else {
            debug!(license_plate = vehicle.license_plate.as_str(), "no rental recorded for vehicle");
            return Ok(false);
        };
        let row = rentals.remove(pos);
        if !self.vehicle_repository.flip_available(vehicle.license_plate.as_str(), false).await? {
            debug!(license_plate = vehicle.license_plate.as_str(), "no rented vehicle left in the store");
        }
        let days = rental_days(row.rental_date, Utc::now().naive_utc());
        info!(license_plate = vehicle.license_plate.as_str(), rental_id = row.rental_id.as_str(),
            days, rent_due = row.vehicle.calculate_rent(days), "rental closed");
        row.vehicle.perform_maintenance();
        Ok(true)
    }

    async fn list_rented(&self) -> LibraryResult<Vec<VehicleDto>> {
        let rentals = self.rentals.read().await;
        Ok(rentals.iter().map(|r| r.vehicle.clone()).collect())
    }
}

// every started day is charged, with a minimum of one
pub(crate) fn rental_days(rented_at: NaiveDateTime, returned_at: NaiveDateTime) -> i32 {
    let seconds = (returned_at - rented_at).num_seconds().max(0);
    ((seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY).max(1) as i32
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use chrono::{Duration, Utc};
    use crate::core::domain::Configuration;
    use crate::core::library::Role;
    use crate::rentals::domain::RentalLedger;
    use crate::rentals::domain::ledger::{MemoryRentalLedger, rental_days};
    use crate::users::dto::UserDto;
    use crate::vehicles::domain::model::VehicleEntity;
    use crate::vehicles::dto::VehicleDto;
    use crate::vehicles::factory::create_vehicle_repository;

    #[tokio::test]
    async fn test_should_record_and_close_rentals() {
        let repo = create_vehicle_repository();
        let car = VehicleDto::car("ABC1", 10.0, 4);
        let _ = repo.create(&VehicleEntity::from(&car)).await.expect("should create");
        let ledger = MemoryRentalLedger::new(&Configuration::new("test"), repo.clone());
        let user = UserDto::new("alice", "pw", Role::User);

        assert!(ledger.rent(&car, &user).await.expect("should rent"));
        assert!(!ledger.rent(&car, &user).await.expect("should not rent twice"));
        assert!(!repo.get("ABC1").await.expect("should get").available);
        let rented = ledger.list_rented().await.expect("should list");
        assert_eq!(vec!["ABC1".to_string()], rented.iter().map(|v| v.license_plate.clone()).collect::<Vec<_>>());

        assert!(ledger.returned(&car).await.expect("should return"));
        assert!(ledger.list_rented().await.expect("should list").is_empty());
        assert!(repo.get("ABC1").await.expect("should get").available);
        assert!(!ledger.returned(&car).await.expect("should not return twice"));
    }

    #[tokio::test]
    async fn test_should_not_rent_vehicle_missing_from_store() {
        let ledger = MemoryRentalLedger::new(&Configuration::new("test"), create_vehicle_repository());
        let user = UserDto::new("alice", "pw", Role::User);
        assert!(!ledger.rent(&VehicleDto::car("NONE", 10.0, 4), &user).await.expect("should not rent"));
        assert!(ledger.list_rented().await.expect("should list").is_empty());
    }

    #[tokio::test]
    async fn test_should_return_the_rented_duplicate() {
        let repo = create_vehicle_repository();
        let _ = repo.create(&VehicleEntity::from(&VehicleDto::car("D1", 10.0, 4))).await.expect("should create");
        let _ = repo.create(&VehicleEntity::from(&VehicleDto::car("D1", 11.0, 4))).await.expect("should create");
        let ledger = MemoryRentalLedger::new(&Configuration::new("test"), repo.clone());

        assert!(repo.flip_available("D1", true).await.expect("should rent first"));
        assert!(ledger.rent(&VehicleDto::car("D1", 11.0, 4), &UserDto::new("alice", "pw", Role::User)).await.expect("should rent second"));
        assert!(repo.flip_available("D1", false).await.expect("should return first"));

        assert!(ledger.returned(&VehicleDto::car("D1", 11.0, 4)).await.expect("should return second"));
        let available = repo.query(&HashMap::from([("available".to_string(), "true".to_string())])).await.expect("should query");
        assert_eq!(2, available.len());
    }

    #[tokio::test]
    async fn test_should_charge_started_days() {
        let start = Utc::now().naive_utc();
        assert_eq!(1, rental_days(start, start));
        assert_eq!(1, rental_days(start, start + Duration::hours(3)));
        assert_eq!(1, rental_days(start, start + Duration::days(1)));
        assert_eq!(2, rental_days(start, start + Duration::days(1) + Duration::seconds(1)));
        assert_eq!(1, rental_days(start, start - Duration::hours(1)));
    }
}
