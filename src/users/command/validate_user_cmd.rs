use async_trait::async_trait;
use serde::Deserialize;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;

pub(crate) struct ValidateUserCommand {
    user_service: Box<dyn UserService>,
}

impl ValidateUserCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

// only the credentials of the posted user record are inspected
#[derive(Debug, Deserialize)]
pub(crate) struct ValidateUserCommandRequest {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub password: String,
}

impl ValidateUserCommandRequest {
    pub fn new(login: &str, password: &str) -> Self {
        Self {
            login: login.to_string(),
            password: password.to_string(),
        }
    }
}

#[async_trait]
impl Command<ValidateUserCommandRequest, ResponseMessage> for ValidateUserCommand {
    async fn execute(&self, req: ValidateUserCommandRequest) -> Result<ResponseMessage, CommandError> {
        self.user_service.validate_user(req.login.as_str(), req.password.as_str()).await
            .map_err(CommandError::from)
            .map(|valid| ResponseMessage::outcome(valid, "User validated successfully!", "Invalid login or password."))
    }
}
