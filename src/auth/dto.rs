use serde::{Deserialize, Serialize};

use crate::users::dto::PublicUser;

/// Request body for user registration.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "customer".into()
}

/// Request body for login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response returned after a successful login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub user: PublicUser,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_defaults_role_to_customer() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"mario","email":"mario@example.com","password":"supersecret"}"#,
        )
        .unwrap();
        assert_eq!(req.role, "customer");
    }

    #[test]
    fn register_accepts_explicit_role() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"luigi","email":"l@example.com","password":"supersecret","role":"restaurant_owner"}"#,
        )
        .unwrap();
        assert_eq!(req.role, "restaurant_owner");
    }
}
