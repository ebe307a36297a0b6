use serde::{Deserialize, Serialize};

/// Body of the login and registration calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(rename = "usuario")]
    pub nickname: String,
    #[serde(rename = "senha")]
    pub password: String,
}

impl AuthUser {
    pub fn new<N: Into<String>, P: Into<String>>(nickname: N, password: P) -> Self {
        Self {
            nickname: nickname.into(),
            password: password.into(),
        }
    }
}

/// A user as returned by `/user/me`, `/user/login` and `/user/info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i32,
    pub user_nick: String,
    pub user_name: Option<String>,
    pub user_status: Option<String>,
    pub user_email: Option<String>,
}
