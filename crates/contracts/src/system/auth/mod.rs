use anyhow::ensure;
use serde::{Deserialize, Serialize};

/// Simulated round-trip of the login form
pub const LOGIN_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub full_name: String,
    pub email: String,
    pub role: String,
}

impl UserInfo {
    /// The single administrator profile of the console
    pub fn admin() -> Self {
        Self {
            full_name: "Admin User".to_string(),
            email: "admin@cityhall.gov".to_string(),
            role: "Super Administrator".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminSession {
    /// Address typed into the form
    pub login: String,
    pub user: UserInfo,
    pub remember_me: bool,
}

/// Accepts any non-empty email and password. Nothing is verified.
pub fn simulate_login(request: &LoginRequest) -> anyhow::Result<AdminSession> {
    ensure!(
        !request.email.is_empty() && !request.password.is_empty(),
        "Please enter valid credentials."
    );
    Ok(AdminSession {
        login: request.email.clone(),
        user: UserInfo::admin(),
        remember_me: request.remember_me,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.into(),
            password: password.into(),
            remember_me: false,
        }
    }

    #[test]
    fn test_any_credentials_pass() {
        let session = simulate_login(&request("someone@cityhall.gov", "x")).unwrap();
        assert_eq!(session.login, "someone@cityhall.gov");
        assert_eq!(session.user.full_name, "Admin User");
    }

    #[test]
    fn test_empty_fields_fail() {
        assert!(simulate_login(&request("", "secret")).is_err());
        let err = simulate_login(&request("a@b.c", "")).unwrap_err();
        assert_eq!(err.to_string(), "Please enter valid credentials.");
    }

    #[test]
    fn test_blank_but_non_empty_email_passes() {
        let session = simulate_login(&request("   ", "secret")).unwrap();
        assert_eq!(session.login, "   ");
    }
}
