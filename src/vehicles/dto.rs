use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;
use crate::core::domain::Identifiable;
use crate::core::library::VehicleKind;
use crate::vehicles::Vehicle;
use crate::vehicles::domain::model::VehicleDetails;


// VehicleDto abstracts a rentable vehicle of any variant. Only `kind` is required.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct VehicleDto {
    #[serde(default)]
    pub license_plate: String,
    #[serde(default)]
    pub kilometers: i32,
    #[serde(default)]
    pub rental_value: f64,
    #[serde(default)]
    pub electric: bool,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(flatten)]
    pub details: VehicleDetails,
}

fn default_available() -> bool {
    true
}

impl VehicleDto {
    pub(crate) fn new(license_plate: &str, rental_value: f64, details: VehicleDetails) -> Self {
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

    pub(crate) fn car(license_plate: &str, rental_value: f64, number_of_doors: i32) -> Self {
        Self::new(license_plate, rental_value, VehicleDetails::Car { number_of_doors })
    }

    pub(crate) fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    // parses a variant-specific body, which does not need to carry its own kind
    pub(crate) fn from_json_of_kind(mut json: Value, kind: VehicleKind) -> serde_json::Result<Self> {
        if let Value::Object(ref mut fields) = json {
            fields.insert("kind".to_string(), Value::String(kind.to_string()));
        }
        serde_json::from_value(json)
    }
}

impl Identifiable for VehicleDto {
    fn key(&self) -> String {
        self.license_plate.to_string()
    }
}

impl Vehicle for VehicleDto {
    fn kind(&self) -> VehicleKind {
        self.details.kind()
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn perform_maintenance(&self) {
        info!(license_plate = self.license_plate.as_str(), "performing maintenance on the {}", self.kind());
    }

    fn calculate_rent(&self, days: i32) -> f64 {
        days as f64 * self.rental_value
    }
}
