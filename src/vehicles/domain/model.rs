use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::VehicleKind;

// VehicleEntity is the stored vehicle: shared fields plus the variant payload
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct VehicleEntity {
    pub license_plate: String,
    pub kilometers: i32,
    pub rental_value: f64,
    pub electric: bool,
    pub available: bool,
    pub color: Option<String>,
    #[serde(flatten)]
    pub details: VehicleDetails,
}

// VehicleDetails carries the per-variant field, tagged by `kind`
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub(crate) enum VehicleDetails {
    Car {
        #[serde(default)]
        number_of_doors: i32,
    },
    Motorcycle {
        #[serde(default)]
        has_sidecar: bool,
    },
    Truck {
        #[serde(default)]
        cargo_capacity: f64,
    },
    Van {
        #[serde(default)]
        seating_capacity: i32,
    },
}

impl VehicleDetails {
    pub fn kind(&self) -> VehicleKind {
        match self {
            VehicleDetails::Car { .. } => VehicleKind::Car,
            VehicleDetails::Motorcycle { .. } => VehicleKind::Motorcycle,
            VehicleDetails::Truck { .. } => VehicleKind::Truck,
            VehicleDetails::Van { .. } => VehicleKind::Van,
        }
    }
}

impl VehicleEntity {
    pub fn new(license_plate: &str, rental_value: f64, details: VehicleDetails) -> Self {
        Self {
            license_plate: license_plate.to_string(),
            kilometers: 0,
            rental_value,
            electric: false,
            available: true,
            color: None,
            details,
        }
    }
}

impl Identifiable for VehicleEntity {
    fn key(&self) -> String {
        self.license_plate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::VehicleKind;
    use crate::vehicles::domain::model::{VehicleDetails, VehicleEntity};

    #[tokio::test]
    async fn test_should_build_vehicle() {
        let vehicle = VehicleEntity::new("ABC1", 10.0, VehicleDetails::Car { number_of_doors: 4 });
        assert_eq!("ABC1", vehicle.license_plate.as_str());
        assert!(vehicle.available);
        assert_eq!(VehicleKind::Car, vehicle.details.kind());
    }

    #[tokio::test]
    async fn test_should_serialize_kind_tag() {
        let vehicle = VehicleEntity::new("T1", 50.0, VehicleDetails::Truck { cargo_capacity: 12.5 });
        let value = serde_json::to_value(&vehicle).expect("should serialize");
        assert_eq!("Truck", value["kind"].as_str().unwrap_or_default());
        assert_eq!(12.5, value["cargo_capacity"].as_f64().unwrap_or_default());
        let parsed: VehicleEntity = serde_json::from_value(value).expect("should parse");
        assert_eq!(vehicle, parsed);
    }
}
