use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::Role;

// UserEntity is the stored user; the password is kept in plaintext
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct UserEntity {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub role: Role,
    pub has_vision_impairment: bool,
    pub has_hearing_impairment: bool,
    pub login: String,
    pub password: String,
}

impl UserEntity {
    pub fn new(login: &str, password: &str, role: Role) -> Self {
        Self {
            id: login.to_string(),
            name: login.to_string(),
            age: 0,
            role,
            has_vision_impairment: false,
            has_hearing_impairment: false,
            login: login.to_string(),
            password: password.to_string(),
        }
    }
}

impl Identifiable for UserEntity {
    fn key(&self) -> String {
        self.login.to_string()
    }
}
