use async_trait::async_trait;
use serde::Deserialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::users::dto::UserDto;

pub(crate) struct RegisterUserCommand {
    user_service: Box<dyn UserService>,
}

impl RegisterUserCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub(crate) struct RegisterUserCommandRequest {
    pub user: UserDto,
}

impl RegisterUserCommandRequest {
    pub fn new(user: UserDto) -> Self {
        Self {
            user,
        }
    }
}

#[async_trait]
impl Command<RegisterUserCommandRequest, ResponseMessage> for RegisterUserCommand {
    async fn execute(&self, req: RegisterUserCommandRequest) -> Result<ResponseMessage, CommandError> {
        self.user_service.register_user(&req.user).await
            .map_err(CommandError::from).map(|_| ResponseMessage::new(true, "User registered successfully!"))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::Command;
    use crate::core::library::Role;
    use crate::core::testing::user_service;
    use crate::users::command::register_user_cmd::{RegisterUserCommand, RegisterUserCommandRequest};
    use crate::users::dto::UserDto;

    #[tokio::test]
    async fn test_should_run_register_user() {
        let cmd = RegisterUserCommand::new(user_service());
        let res = cmd.execute(RegisterUserCommandRequest::new(UserDto::new("reg-user", "pw", Role::User))).await.expect("should register");
        assert!(res.success);
        assert_eq!("User registered successfully!", res.message.as_str());
        assert!(user_service().find_user_by_login("reg-user").await.expect("should find").is_some());
    }

    #[tokio::test]
    async fn test_should_parse_partial_user() {
        let req: RegisterUserCommandRequest = serde_json::from_str(r#"{"login":"partial","role":"ADMIN"}"#).expect("should parse");
        assert_eq!("partial", req.user.login.as_str());
        assert_eq!(Role::Admin, req.user.role);
        assert_eq!("", req.user.password.as_str());
    }
}
