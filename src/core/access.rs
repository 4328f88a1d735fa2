use tracing::warn;
use crate::core::library::{ADMIN_REQUIRED, LibraryError, LibraryResult, Role};
use crate::users::User;
use crate::users::domain::UserService;
use crate::users::dto::UserDto;

// authorize resolves the first user with the login and requires the given role.
// A blank login never resolves, even when a user was registered without one.
pub(crate) async fn authorize(user_service: &dyn UserService, login: &str, required: Role) -> LibraryResult<UserDto> {
    if login.trim().is_empty() {
        warn!("access denied for blank login");
        return Err(denied(required));
    }
    match user_service.find_user_by_login(login).await? {
        Some(user) if user.is_role(required) => Ok(user),
        Some(user) => {
            warn!(login, role = user.role.to_string().as_str(), required = required.to_string().as_str(), "access denied");
            Err(denied(required))
        }
        None => {
            warn!(login, "access denied for unknown login");
            Err(denied(required))
        }
    }
}

pub(crate) async fn authorize_admin(user_service: &dyn UserService, login: &str) -> LibraryResult<UserDto> {
    authorize(user_service, login, Role::Admin).await
}

fn denied(required: Role) -> LibraryError {
    match required {
        Role::Admin => LibraryError::access_denied(ADMIN_REQUIRED, Some("403".to_string())),
        Role::User => LibraryError::access_denied("Access denied. User role required.", Some("403".to_string())),
    }
}
