use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

pub(crate) const ADMIN_REQUIRED: &str = "Access denied. Admin role required.";

#[derive(Debug)]
pub enum LibraryError {
    AccessDenied {
        message: String,
        reason_code: Option<String>,
    },
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
}

impl LibraryError {
    pub fn access_denied(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::AccessDenied { message: message.to_string(), reason_code }
    }

    pub fn not_found(message: &str) -> LibraryError {
        LibraryError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> LibraryError {
        LibraryError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> LibraryError {
        LibraryError::Runtime { message: message.to_string(), reason_code }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, LibraryError::NotFound { .. })
    }
}

impl From<serde_json::Error> for LibraryError {
    fn from(err: serde_json::Error) -> Self {
        LibraryError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LibraryError::AccessDenied { message, .. } => {
                write!(f, "{}", message)
            }
            LibraryError::NotFound { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            LibraryError::Serialization { message } => {
                write!(f, "{}", message)
            }
            LibraryError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for stores and services.
pub type LibraryResult<T> = Result<T, LibraryError>;

// ResponseMessage is the {success, message} body returned by text-style endpoints
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ResponseMessage {
    pub success: bool,
    pub message: String,
}

impl ResponseMessage {
    pub fn new(success: bool, message: &str) -> Self {
        Self {
            success,
            message: message.to_string(),
        }
    }

    // picks the success or failure message by outcome
    pub fn outcome(success: bool, ok_message: &str, failed_message: &str) -> Self {
        if success {
            Self::new(true, ok_message)
        } else {
            Self::new(false, failed_message)
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub(crate) enum Role {
    #[default]
    User,
    Admin,
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "ADMIN" => Role::Admin,
            _ => Role::User,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Role::User => write!(f, "USER"),
            Role::Admin => write!(f, "ADMIN"),
        }
    }
}

#[derive(Debug, PartialEq, Clone, Copy, Serialize, Deserialize)]
pub(crate) enum VehicleKind {
    Car,
    Motorcycle,
    Truck,
    Van,
}

impl From<String> for VehicleKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Motorcycle" => VehicleKind::Motorcycle,
            "Truck" => VehicleKind::Truck,
            "Van" => VehicleKind::Van,
            _ => VehicleKind::Car,
        }
    }
}

impl Display for VehicleKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            VehicleKind::Car => write!(f, "Car"),
            VehicleKind::Motorcycle => write!(f, "Motorcycle"),
            VehicleKind::Truck => write!(f, "Truck"),
            VehicleKind::Van => write!(f, "Van"),
        }
    }
}
