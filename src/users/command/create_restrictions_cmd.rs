use async_trait::async_trait;
use serde::Deserialize;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::users::dto::UserDto;

pub(crate) struct CreateRestrictionsCommand {
    user_service: Box<dyn UserService>,
}

impl CreateRestrictionsCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateRestrictionsCommandRequest {
    pub login: String,
    pub user: UserDto,
}

impl CreateRestrictionsCommandRequest {
    pub fn new(login: &str, user: UserDto) -> Self {
        Self {
            login: login.to_string(),
            user,
        }
    }
}

#[async_trait]
impl Command<CreateRestrictionsCommandRequest, ResponseMessage> for CreateRestrictionsCommand {
    async fn execute(&self, req: CreateRestrictionsCommandRequest) -> Result<ResponseMessage, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        self.user_service.create_restrictions(&req.user).await
            .map_err(CommandError::from).map(|_| ResponseMessage::new(true, "Restrictions created successfully!"))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::library::Role;
    use crate::core::testing::{seed_user, user_service};
    use crate::users::command::create_restrictions_cmd::{CreateRestrictionsCommand, CreateRestrictionsCommandRequest};
    use crate::users::dto::UserDto;

    #[tokio::test]
    async fn test_should_run_create_restrictions() {
        let admin = seed_user("restrict-admin", Role::Admin).await;
        let mut user = UserDto::new("restricted", "pw", Role::User);
        user.has_vision_impairment = true;
        let cmd = CreateRestrictionsCommand::new(user_service());
        let res = cmd.execute(CreateRestrictionsCommandRequest::new(admin.as_str(), user)).await.expect("should create");
        assert_eq!("Restrictions created successfully!", res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_deny_create_restrictions_for_unknown_login() {
        let cmd = CreateRestrictionsCommand::new(user_service());
        let err = cmd.execute(CreateRestrictionsCommandRequest::new("restrict-nobody", UserDto::default())).await.unwrap_err();
        assert!(matches!(err, CommandError::Access { .. }));
    }
}
