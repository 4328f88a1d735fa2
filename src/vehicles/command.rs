pub mod bulk_upload_cmd;
pub mod count_by_color_cmd;
pub mod delete_vehicle_cmd;
pub mod list_by_kind_cmd;
pub mod list_vehicles_cmd;
pub mod register_vehicle_cmd;
pub mod update_availability_cmd;
pub mod update_vehicle_cmd;
pub mod usage_report_cmd;
pub mod validate_conditions_cmd;
