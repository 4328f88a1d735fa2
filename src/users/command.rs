pub mod admin_task_cmd;
pub mod create_restrictions_cmd;
pub mod list_users_cmd;
pub mod register_user_cmd;
pub mod validate_user_cmd;
