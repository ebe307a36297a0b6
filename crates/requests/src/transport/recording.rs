use std::{cell::RefCell, collections::VecDeque, rc::Rc};

use http::{header::CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use tracing::debug;

use super::{JsonResponse, Transport};
use crate::{
    api::error::RequestError,
    request::{JsonRequest, JSON_CONTENT_TYPE},
};

/// A canned response handed out by [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq)]
pub struct MockResponse {
    status: u16,
    headers: HeaderMap,
    body: String,
}

impl MockResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: String::new(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
        self
    }

    pub fn with_text<S: Into<String>>(mut self, body: S) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the body and labels it as json
    pub fn with_json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, RequestError> {
        self.body = serde_json::to_string(body)?;
        self.headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(self)
    }
}

impl JsonResponse for MockResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn header(&self, name: &str) -> Option<String> {
        self.headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
    }

    async fn text(&self) -> Result<String, RequestError> {
        Ok(self.body.clone())
    }
}

#[derive(Debug, Default)]
struct Recording {
    requests: Vec<JsonRequest>,
    replies: VecDeque<Result<MockResponse, RequestError>>,
}

/// Transport double that records every request and answers from a script
///
/// Clones share the same recording, so keep one handle for assertions and
/// give the other to the client. When the script runs out every request gets
/// an empty 200.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransport {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered request
    pub fn reply(&self, response: MockResponse) -> &Self {
        self.inner.borrow_mut().replies.push_back(Ok(response));
        self
    }

    /// Queue a transport failure for the next unanswered request
    pub fn fail(&self, error: RequestError) -> &Self {
        self.inner.borrow_mut().replies.push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<JsonRequest> {
        self.inner.borrow().requests.clone()
    }

    pub fn last_request(&self) -> Option<JsonRequest> {
        self.inner.borrow().requests.last().cloned()
    }
}

impl Transport for RecordingTransport {
    type Response = MockResponse;

    async fn send(&self, request: JsonRequest) -> Result<MockResponse, RequestError> {
        debug!("RecordingTransport::send({}, {})", request.method(), request.url());
        let mut inner = self.inner.borrow_mut();
        inner.requests.push(request);
        inner.replies.pop_front().unwrap_or_else(|| Ok(MockResponse::new(200)))
    }
}
