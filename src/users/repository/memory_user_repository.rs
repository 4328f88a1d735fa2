use crate::users::domain::model::UserEntity;
use crate::users::repository::UserRepository;
use crate::utils::memory::MemoryRepository;

impl UserRepository for MemoryRepository<UserEntity> {}
