use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::Role;
use crate::users::User;


// UserDto abstracts a registered renter or administrator. Registration validates
// nothing, so every field falls back to its default when missing.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct UserDto {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub role: Role,
    pub has_vision_impairment: bool,
    pub has_hearing_impairment: bool,
    pub login: String,
    pub password: String,
}

impl UserDto {
    pub(crate) fn new(login: &str, password: &str, role: Role) -> Self {
        Self {
            id: login.to_string(),
            name: login.to_string(),
            login: login.to_string(),
            password: password.to_string(),
            role,
            ..Default::default()
        }
    }
}

impl Identifiable for UserDto {
    fn key(&self) -> String {
        self.login.to_string()
    }
}

impl User for UserDto {
    fn is_role(&self, match_role: Role) -> bool {
        self.role == match_role
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::Role;
    use crate::users::User;
    use crate::users::dto::UserDto;

    #[tokio::test]
    async fn test_should_build_user() {
        let user = UserDto::new("alice", "secret", Role::User);
        assert_eq!("alice", user.login.as_str());
        assert!(!user.is_role(Role::Admin));
        assert!(user.is_role(Role::User));
        assert!(UserDto::new("root", "secret", Role::Admin).is_role(Role::Admin));
    }

    #[tokio::test]
    async fn test_should_default_missing_fields() {
        let user: UserDto = serde_json::from_str(r#"{"login": "bob", "role": "ADMIN"}"#).expect("should parse");
        assert_eq!("bob", user.login.as_str());
        assert_eq!("", user.password.as_str());
        assert_eq!(0, user.age);
        assert!(user.is_role(Role::Admin));

        let user: UserDto = serde_json::from_str("{}").expect("should parse");
        assert_eq!(Role::User, user.role);
    }
}
