use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;

pub(crate) struct AdminTaskCommand {
    user_service: Box<dyn UserService>,
}

impl AdminTaskCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>) -> Self {
        Self {
            user_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AdminTaskCommandRequest {
    pub login: String,
}

impl AdminTaskCommandRequest {
    pub fn new(login: &str) -> Self {
        Self {
            login: login.to_string(),
        }
    }
}

#[async_trait]
impl Command<AdminTaskCommandRequest, ResponseMessage> for AdminTaskCommand {
    async fn execute(&self, req: AdminTaskCommandRequest) -> Result<ResponseMessage, CommandError> {
        let admin = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        info!(login = admin.login.as_str(), "admin task performed");
        Ok(ResponseMessage::new(true, "Admin task performed!"))
    }
}
