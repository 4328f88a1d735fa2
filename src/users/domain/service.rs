use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::core::domain::Configuration;
use crate::core::events::{branch_metadata, DomainEvent};
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::users::domain::UserService;
use crate::users::domain::model::UserEntity;
use crate::users::dto::UserDto;
use crate::users::repository::UserRepository;

pub(crate) struct UserServiceImpl {
    branch_id: String,
    user_repository: Arc<dyn UserRepository>,
    events_publisher: Arc<dyn EventPublisher>,
}

impl UserServiceImpl {
    pub(crate) fn new(config: &Configuration, user_repository: Arc<dyn UserRepository>,
                      events_publisher: Arc<dyn EventPublisher>) -> Self {
        UserServiceImpl {
            branch_id: config.branch_id.to_string(),
            user_repository,
            events_publisher,
        }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn register_user(&self, user: &UserDto) -> LibraryResult<()> {
        let _ = self.user_repository.create(&UserEntity::from(user)).await?;
        info!(login = user.login.as_str(), "user registered: {}", user.name);
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "user_registered", "users", user.login.as_str(), &branch_metadata(self.branch_id.as_str()), &user.login)?).await?;
        Ok(())
    }

    async fn validate_user(&self, login: &str, password: &str) -> LibraryResult<bool> {
        let res = self.user_repository.query(
            &HashMap::from([("login".to_string(), login.to_string()),
                ("password".to_string(), password.to_string())])).await?;
        Ok(!res.is_empty())
    }

    async fn find_user_by_login(&self, login: &str) -> LibraryResult<Option<UserDto>> {
        match self.user_repository.get(login).await {
            Ok(user) => Ok(Some(UserDto::from(&user))),
            Err(err) if err.is_not_found() => {
                debug!(login, "user not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    async fn list_users(&self) -> LibraryResult<Vec<UserDto>> {
        let res = self.user_repository.query(&HashMap::new()).await?;
        Ok(res.iter().map(UserDto::from).collect())
    }

    async fn create_restrictions(&self, user: &UserDto) -> LibraryResult<()> {
        info!(login = user.login.as_str(), "restrictions requested");
        Ok(())
    }
}

impl From<&UserEntity> for UserDto {
    fn from(other: &UserEntity) -> Self {
        Self {
            id: other.id.to_string(),
            name: other.name.to_string(),
            age: other.age,
            role: other.role,
            has_vision_impairment: other.has_vision_impairment,
            has_hearing_impairment: other.has_hearing_impairment,
            login: other.login.to_string(),
            password: other.password.to_string(),
        }
    }
}

impl From<&UserDto> for UserEntity {
    fn from(other: &UserDto) -> Self {
        Self {
            id: other.id.to_string(),
            name: other.name.to_string(),
            age: other.age,
            role: other.role,
            has_vision_impairment: other.has_vision_impairment,
            has_hearing_impairment: other.has_hearing_impairment,
            login: other.login.to_string(),
            password: other.password.to_string(),
        }
    }
}
