//! Call sites for the front-end that don't want to hold a client
//!
//! Each call builds a [`RequestClient::browser`] so the configuration is read
//! every time.

use gloo::net::http::Response;
use serde::Serialize;

use crate::{api::error::RequestError, client::RequestClient};

pub async fn post_json<B: Serialize + ?Sized>(
    url: &str,
    body: &B,
) -> Result<Response, RequestError> {
    RequestClient::browser()?.post_json(url, body).await
}

pub async fn get_json(url: &str) -> Result<Response, RequestError> {
    RequestClient::browser()?.get_json(url).await
}

pub async fn request_profile() -> Result<Response, RequestError> {
    RequestClient::browser()?.request_profile().await
}
