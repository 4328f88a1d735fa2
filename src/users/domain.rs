pub mod model;
pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::users::dto::UserDto;

#[async_trait]
pub(crate) trait UserService: Sync + Send {
    async fn register_user(&self, user: &UserDto) -> LibraryResult<()>;
    async fn validate_user(&self, login: &str, password: &str) -> LibraryResult<bool>;
    async fn find_user_by_login(&self, login: &str) -> LibraryResult<Option<UserDto>>;
    async fn list_users(&self) -> LibraryResult<Vec<UserDto>>;
    async fn create_restrictions(&self, user: &UserDto) -> LibraryResult<()>;
}
