use http::{
    header::{HeaderValue, CONTENT_TYPE},
    HeaderMap, Method,
};
use serde::Serialize;
use tracing::debug;

use crate::api::error::RequestError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Fetch credentials mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    Omit,
    SameOrigin,
    /// Send and accept cookies on cross-origin requests too
    Include,
}

#[cfg(feature = "wasm")]
impl From<Credentials> for web_sys::RequestCredentials {
    fn from(value: Credentials) -> Self {
        match value {
            Credentials::Omit => web_sys::RequestCredentials::Omit,
            Credentials::SameOrigin => web_sys::RequestCredentials::SameOrigin,
            Credentials::Include => web_sys::RequestCredentials::Include,
        }
    }
}

/// A fully described JSON request, ready to hand to a [`Transport`]
///
/// Always carries `Content-Type: application/json` and [`Credentials::Include`].
/// Only a POST has a body.
///
/// [`Transport`]: crate::transport::Transport
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRequest {
    url: String,
    method: Method,
    headers: HeaderMap,
    body: Option<String>,
    credentials: Credentials,
}

impl JsonRequest {
    pub fn get<U: Into<String>>(url: U) -> Self {
        Self::build(Method::GET, url.into(), None)
    }

    /// Serializes `body` up front so a bad payload fails before anything is sent
    pub fn post<U: Into<String>, B: Serialize + ?Sized>(
        url: U,
        body: &B,
    ) -> Result<Self, RequestError> {
        let body = serde_json::to_string(body)?;
        Ok(Self::build(Method::POST, url.into(), Some(body)))
    }

    fn build(method: Method, url: String, body: Option<String>) -> Self {
        debug!("JsonRequest::build({method}, {url})");
        let mut headers = HeaderMap::with_capacity(1);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));

        Self {
            url,
            method,
            headers,
            body,
            credentials: Credentials::Include,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// The serialized JSON text, if any
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn credentials(&self) -> Credentials {
        self.credentials
    }
}
