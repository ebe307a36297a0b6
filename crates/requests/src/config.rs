use crate::api::error::RequestError;

/// Name of the variable holding the backend's host[:port]
pub const BACKEND_HOST_VAR: &str = "PUBLIC_URL_BACKEND";

/// Where the chat backend lives
#[derive(Debug, Clone, PartialEq)]
pub struct RequestConfig {
    backend_host: String,
}

impl RequestConfig {
    /// Taken verbatim, an empty host is only noticed when a request is sent
    pub fn new<S: Into<String>>(backend_host: S) -> Self {
        Self { backend_host: backend_host.into() }
    }

    /// Uses the `PUBLIC_URL_BACKEND` value baked in when the crate was compiled
    pub fn from_build_env() -> Result<Self, RequestError> {
        Self::from_value(option_env!("PUBLIC_URL_BACKEND"))
    }

    /// Loads `.env` if there is one and reads `PUBLIC_URL_BACKEND` from the process env
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, RequestError> {
        crate::load_dotenv().map_err(|e| RequestError::Configuration {
            message: format!("Failed to load .env: {e}"),
        })?;
        Self::from_value(std::env::var(BACKEND_HOST_VAR).ok().as_deref())
    }

    fn from_value(value: Option<&str>) -> Result<Self, RequestError> {
        match value {
            Some(host) if !host.trim().is_empty() => Ok(Self::new(host)),
            Some(_) => Err(RequestError::Configuration {
                message: format!("{BACKEND_HOST_VAR} is empty"),
            }),
            None => Err(RequestError::Configuration {
                message: format!("{BACKEND_HOST_VAR} is not set"),
            }),
        }
    }

    pub fn backend_host(&self) -> &str {
        &self.backend_host
    }
}
