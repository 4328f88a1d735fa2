pub mod rent_vehicle_cmd;
pub mod return_vehicle_cmd;
