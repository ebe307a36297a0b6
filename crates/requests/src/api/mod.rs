use const_format::concatcp;

pub mod error;
pub mod payloads;

pub const USER_BASE_PATH: &str = "/user/";

/// Routes served by the chat backend's `/user` scope
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint {
    UserMe,
    UserLogin,
    UserRegister,
    UserLogout,
    UserInfo,
}

impl Endpoint {
    pub const fn path(&self) -> &str {
        use Endpoint::*;
        match self {
            UserMe => concatcp!(USER_BASE_PATH, "me"),
            UserLogin => concatcp!(USER_BASE_PATH, "login"),
            UserRegister => concatcp!(USER_BASE_PATH, "registrar"),
            UserLogout => concatcp!(USER_BASE_PATH, "sair"),
            UserInfo => concatcp!(USER_BASE_PATH, "info"),
        }
    }
}
