use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::core::domain::Identifiable;
use crate::users::dto::UserDto;
use crate::utils::date::serializer;
use crate::vehicles::dto::VehicleDto;

// RentedVehicleEntity is one ledger row for a vehicle currently out on rent.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct RentedVehicleEntity {
    pub rental_id: String,
    pub branch_id: String,
    pub user: UserDto,
    pub vehicle: VehicleDto,
    #[serde(with = "serializer")]
    pub rental_date: NaiveDateTime,
}

impl RentedVehicleEntity {
    pub fn new(branch_id: &str, user: &UserDto, vehicle: &VehicleDto) -> Self {
        Self {
            rental_id: Uuid::new_v4().to_string(),
            branch_id: branch_id.to_string(),
            user: user.clone(),
            vehicle: vehicle.clone(),
            rental_date: Utc::now().naive_utc(),
        }
    }
}

impl Identifiable for RentedVehicleEntity {
    fn key(&self) -> String {
        self.rental_id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use crate::core::domain::Identifiable;
    use crate::core::library::Role;
    use crate::rentals::domain::model::RentedVehicleEntity;
    use crate::users::dto::UserDto;
    use crate::vehicles::dto::VehicleDto;

    #[tokio::test]
    async fn test_should_build_rented_vehicle() {
        let user = UserDto::new("alice", "pw", Role::User);
        let row = RentedVehicleEntity::new("test", &user, &VehicleDto::car("ABC1", 10.0, 4));
        assert_eq!("test", row.branch_id.as_str());
        assert_eq!("ABC1", row.vehicle.license_plate.as_str());
        assert_eq!(row.rental_id, row.key());
        assert!(row.rental_date <= Utc::now().naive_utc());
    }

    #[tokio::test]
    async fn test_should_serialize_rental_date() {
        let user = UserDto::new("alice", "pw", Role::User);
        let row = RentedVehicleEntity::new("test", &user, &VehicleDto::car("ABC1", 10.0, 4));
        let json = serde_json::to_string(&row).expect("should serialize");
        let parsed: RentedVehicleEntity = serde_json::from_str(json.as_str()).expect("should parse");
        assert_eq!(row, parsed);
    }
}
