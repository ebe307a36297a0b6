use http::header::CONTENT_TYPE;
use mime::{Mime, APPLICATION_JSON};
use serde::de::DeserializeOwned;

use crate::{api::error::RequestError, request::JsonRequest};

#[cfg(feature = "wasm")]
mod fetch;
#[cfg(feature = "wasm")]
pub use fetch::*;

#[cfg(any(test, feature = "testing"))]
mod recording;
#[cfg(any(test, feature = "testing"))]
pub use recording::*;

/// Sends a [`JsonRequest`] and hands back whatever response came back
///
/// Implementations must not inspect the status: a 404 is a successful send.
/// Only failures to get a response at all are errors.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type Response: JsonResponse;

    async fn send(&self, request: JsonRequest) -> Result<Self::Response, RequestError>;
}

/// Read access to a response returned by a [`Transport`]
#[allow(async_fn_in_trait)]
pub trait JsonResponse: Sized {
    fn status(&self) -> u16;

    fn header(&self, name: &str) -> Option<String>;

    async fn text(&self) -> Result<String, RequestError>;

    /// True for 2xx statuses
    fn ok(&self) -> bool {
        (200..300).contains(&self.status())
    }

    fn content_type(&self) -> Option<String> {
        self.header(CONTENT_TYPE.as_str())
    }

    /// Whether the server labelled the body as json (parameters like charset ignored)
    fn is_json(&self) -> bool {
        self.content_type()
            .and_then(|v| v.parse::<Mime>().ok())
            .map_or(false, |m| m.essence_str() == APPLICATION_JSON.essence_str())
    }

    async fn json<T: DeserializeOwned>(&self) -> Result<T, RequestError> {
        let text = self.text().await?;
        serde_json::from_str(&text).map_err(|e| RequestError::Body { message: e.to_string() })
    }
}
