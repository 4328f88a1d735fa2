use crate::core::domain::Identifiable;
use crate::core::library::VehicleKind;

pub mod command;
pub mod domain;
pub mod dto;
pub mod factory;
pub mod repository;
pub mod controller;

// Vehicle is the capability every variant exposes
pub(crate) trait Vehicle: Identifiable {
    fn kind(&self) -> VehicleKind;
    fn is_available(&self) -> bool;
    fn perform_maintenance(&self);
    fn calculate_rent(&self, days: i32) -> f64;
}
