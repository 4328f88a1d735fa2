use std::sync::Arc;
use crate::core::domain::Configuration;
use crate::gateway::events::EventPublisher;
use crate::users::domain::UserService;
use crate::users::domain::model::UserEntity;
use crate::users::domain::service::UserServiceImpl;
use crate::users::repository::UserRepository;
use crate::utils::memory::MemoryRepository;

pub(crate) fn create_user_repository() -> Arc<dyn UserRepository> {
    Arc::new(MemoryRepository::<UserEntity>::new("users"))
}

pub(crate) fn create_user_service(config: &Configuration, user_repository: Arc<dyn UserRepository>,
                                  events_publisher: Arc<dyn EventPublisher>) -> Box<dyn UserService> {
    Box::new(UserServiceImpl::new(config, user_repository, events_publisher))
}
