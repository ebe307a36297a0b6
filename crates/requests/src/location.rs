use crate::api::error::RequestError;

/// Supplies the protocol of the page the front-end is running on
pub trait OriginProvider {
    /// The protocol (http/https) including a trailing ':'
    fn protocol(&self) -> Result<String, RequestError>;
}

/// Always reports the same protocol
#[derive(Debug, Clone, PartialEq)]
pub struct FixedOrigin {
    protocol: String,
}

impl FixedOrigin {
    pub fn new<S: Into<String>>(protocol: S) -> Self {
        Self { protocol: protocol.into() }
    }

    pub fn http() -> Self {
        Self::new("http:")
    }

    pub fn https() -> Self {
        Self::new("https:")
    }
}

impl OriginProvider for FixedOrigin {
    fn protocol(&self) -> Result<String, RequestError> {
        Ok(self.protocol.clone())
    }
}

#[cfg(feature = "wasm")]
pub use browser::*;

#[cfg(feature = "wasm")]
mod browser {
    use leptos::leptos_dom::helpers::location as leptos_loc;

    use super::OriginProvider;
    use crate::api::error::{RequestError, ResultContext};

    /// Reads `window.location` of the current page
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrowserLocation;

    impl OriginProvider for BrowserLocation {
        fn protocol(&self) -> Result<String, RequestError> {
            let loc = leptos_loc();
            loc.protocol().map_err(RequestError::from).context("location.protocol")
        }
    }
}
