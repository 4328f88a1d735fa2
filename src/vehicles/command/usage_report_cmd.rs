use async_trait::async_trait;
use serde::Deserialize;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::vehicles::domain::VehicleService;

pub(crate) struct UsageReportCommand {
    user_service: Box<dyn UserService>,
    vehicle_service: Box<dyn VehicleService>,
}

impl UsageReportCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>, vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            user_service,
            vehicle_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsageReportCommandRequest {
    pub login: String,
    pub start_date: String,
    pub end_date: String,
}

impl UsageReportCommandRequest {
    pub fn new(login: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            login: login.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }
}

#[async_trait]
impl Command<UsageReportCommandRequest, ResponseMessage> for UsageReportCommand {
    async fn execute(&self, req: UsageReportCommandRequest) -> Result<ResponseMessage, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        self.vehicle_service.generate_usage_report(req.start_date.as_str(), req.end_date.as_str()).await
            .map_err(CommandError::from).map(|report| ResponseMessage::new(true, report.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use crate::core::command::{Command, CommandError};
    use crate::core::library::Role;
    use crate::core::testing::{seed_user, user_service, vehicle_service};
    use crate::vehicles::command::usage_report_cmd::{UsageReportCommand, UsageReportCommandRequest};

    #[tokio::test]
    async fn test_should_run_usage_report() {
        let admin = seed_user("report-admin", Role::Admin).await;
        let cmd = UsageReportCommand::new(user_service(), vehicle_service());
        let res = cmd.execute(UsageReportCommandRequest::new(admin.as_str(), "2024-01-01", "2024-01-31")).await.expect("should report");
        assert_eq!("Usage report from 2024-01-01 to 2024-01-31", res.message.as_str());
    }

    #[tokio::test]
    async fn test_should_deny_usage_report_for_user() {
        let login = seed_user("report-user", Role::User).await;
        let cmd = UsageReportCommand::new(user_service(), vehicle_service());
        let err = cmd.execute(UsageReportCommandRequest::new(login.as_str(), "a", "b")).await.unwrap_err();
        assert!(matches!(err, CommandError::Access { .. }));
    }
}
