use gloo::net::http::{Method, RequestBuilder, Response};
use tracing::debug;

use super::{JsonResponse, Transport};
use crate::{api::error::RequestError, request::JsonRequest};

/// Browser `fetch` via gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    type Response = Response;

    async fn send(&self, request: JsonRequest) -> Result<Response, RequestError> {
        let method = request.method();
        let url = request.url();

        // gloo-net carries its own copy of the http types
        let gloo_method = Method::from_bytes(method.as_str().as_bytes())
            .map_err(|e| RequestError::Transport { message: format!("Method {method}: {e}") })?;

        let mut builder = RequestBuilder::new(url)
            .method(gloo_method)
            .credentials(request.credentials().into());

        for (name, value) in request.headers() {
            let value = value.to_str().map_err(|e| RequestError::Transport {
                message: format!("Header {name} is not valid text: {e}"),
            })?;
            builder = builder.header(name.as_str(), value);
        }

        debug!("FetchTransport::send::build");
        let built = match request.body() {
            Some(body) => builder.body(body.to_owned()),
            None => builder.build(),
        }?;

        debug!("FetchTransport::send({method}, {url})");
        let response = built.send().await?;

        debug!("FetchTransport::send::status {}", response.status());
        Ok(response)
    }
}

impl JsonResponse for Response {
    fn status(&self) -> u16 {
        Response::status(self)
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers().get(name)
    }

    async fn text(&self) -> Result<String, RequestError> {
        Response::text(self).await.map_err(|e| RequestError::Body { message: e.to_string() })
    }
}
