use async_trait::async_trait;
use tracing::warn;
use crate::core::access::authorize_admin;
use crate::core::command::{Command, CommandError};
use crate::core::library::ResponseMessage;
use crate::users::domain::UserService;
use crate::vehicles::domain::VehicleService;

pub(crate) struct BulkUploadCommand {
    user_service: Box<dyn UserService>,
    vehicle_service: Box<dyn VehicleService>,
}

impl BulkUploadCommand {
    pub(crate) fn new(user_service: Box<dyn UserService>, vehicle_service: Box<dyn VehicleService>) -> Self {
        Self {
            user_service,
            vehicle_service,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct UploadedFile {
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl UploadedFile {
    pub fn new(file_name: &str, contents: Vec<u8>) -> Self {
        Self {
            file_name: file_name.to_string(),
            contents,
        }
    }
}

// upload carries the reason when the multipart body could not be read
#[derive(Debug)]
pub(crate) struct BulkUploadCommandRequest {
    pub login: String,
    pub upload: Result<UploadedFile, String>,
}

impl BulkUploadCommandRequest {
    pub fn new(login: &str, upload: Result<UploadedFile, String>) -> Self {
        Self {
            login: login.to_string(),
            upload,
        }
    }
}

#[async_trait]
impl Command<BulkUploadCommandRequest, ResponseMessage> for BulkUploadCommand {
    async fn execute(&self, req: BulkUploadCommandRequest) -> Result<ResponseMessage, CommandError> {
        let _ = authorize_admin(self.user_service.as_ref(), req.login.as_str()).await.map_err(CommandError::from)?;
        let res = match req.upload {
            Ok(file) => self.vehicle_service.bulk_upload(file.file_name.as_str(), &file.contents).await
                .map_err(|err| err.to_string()),
            Err(reason) => Err(reason),
        };
        match res {
            Ok(_) => Ok(ResponseMessage::new(true, "Bulk upload successful!")),
            Err(reason) => {
                warn!(reason = reason.as_str(), "bulk upload failed");
                Ok(ResponseMessage::new(false, format!("Bulk upload failed: {}", reason).as_str()))
            }
        }
    }
}
