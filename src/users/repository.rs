pub(crate) mod memory_user_repository;

use crate::core::repository::Repository;
use crate::users::domain::model::UserEntity;

pub(crate) trait UserRepository: Repository<UserEntity> {}
