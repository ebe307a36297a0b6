use thiserror::Error;

#[cfg(feature = "wasm")]
pub use js::*;

#[cfg(feature = "wasm")]
mod js {
    use thiserror::Error;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::js_sys::{
        Error as GenericJsError,
        RangeError as JsRangeError,
        ReferenceError as JsReferenceError,
        SyntaxError as JsSyntaxError,
        TypeError as JsTypeError,
        UriError as JsUriError,
    };

    use super::RequestError;

    #[derive(Debug, Clone, Error)]
    pub enum JsError {
        #[error("GenericJs Error: {0:?}")]
        GenericJs(GenericJsError),
        #[error("JsRange Error: {0:?}")]
        JsRange(JsRangeError),
        #[error("JsReference Error: {0:?}")]
        JsReference(JsReferenceError),
        #[error("JsSyntax Error: {0:?}")]
        JsSyntax(JsSyntaxError),
        #[error("JsType Error: {0:?}")]
        JsType(JsTypeError),
        #[error("JsUri Error: {0:?}")]
        JsUri(JsUriError),
        #[error("UnknownJsValue Error: {0:?}")]
        UnknownJsValue(String),
    }

    impl From<JsValue> for JsError {
        fn from(err: JsValue) -> JsError {
            if err.is_instance_of::<JsRangeError>() {
                return JsError::JsRange(err.into());
            }
            if err.is_instance_of::<JsReferenceError>() {
                return JsError::JsReference(err.into());
            }
            if err.is_instance_of::<JsSyntaxError>() {
                return JsError::JsSyntax(err.into());
            }
            if err.is_instance_of::<JsTypeError>() {
                return JsError::JsType(err.into());
            }
            if err.is_instance_of::<JsUriError>() {
                return JsError::JsUri(err.into());
            }
            if err.is_instance_of::<GenericJsError>() {
                return JsError::GenericJs(err.into());
            }
            JsError::UnknownJsValue(format!("{:?}", err))
        }
    }

    impl From<JsValue> for RequestError {
        fn from(value: JsValue) -> Self {
            Self::Js { inner: JsError::from(value) }
        }
    }

    /// gloo-net only fails before a response exists, so everything it reports
    /// is a transport failure from the caller's point of view
    impl From<gloo::net::Error> for RequestError {
        fn from(value: gloo::net::Error) -> Self {
            Self::Transport { message: format!("gloo-net error: {value}") }
        }
    }
}

#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// The body could not be turned into JSON. Raised before any network activity
    #[error("Serialization error: {message}")]
    Serialization { message: String },
    /// The request never produced a response (unreachable, DNS, aborted, bad url)
    #[error("Transport error: {message}")]
    Transport { message: String },
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// Reading or decoding a response body failed
    #[error("Response body error: {message}")]
    Body { message: String },
    #[cfg(feature = "wasm")]
    #[error("{inner}")]
    Js { inner: JsError },

    #[error("{context}: {inner}")]
    WithContext { context: String, inner: Box<Self> },
}

impl RequestError {
    /// Strips any context layers and returns the error that was originally raised
    pub fn root(&self) -> &Self {
        match self {
            Self::WithContext { inner, .. } => inner.root(),
            e => e,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization { message: value.to_string() }
    }
}

pub trait ErrorContext<E>: Sized {
    /// Add helpful context to errors
    ///
    /// `context` is provided as a closure to avoid potential formatting cost if
    /// the result isn't an error
    #[allow(dead_code)]
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> E;
    /// Add helpful context to errors
    fn context<S: Into<String>>(self, context: S) -> E;
}

pub trait ResultContext<T, E: ErrorContext<E>> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E>;
    fn context<S: Into<String>>(self, context: S) -> Result<T, E>;
}

impl<E: Into<RequestError>> ErrorContext<RequestError> for E {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> RequestError {
        self.context(context())
    }
    fn context<S: Into<String>>(self, context: S) -> RequestError {
        RequestError::WithContext {
            context: context.into(),
            inner: Box::new(self.into()),
        }
    }
}

impl<T, E: ErrorContext<E>> ResultContext<T, E> for Result<T, E> {
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, context: F) -> Result<T, E> {
        self.context(context())
    }
    fn context<S: Into<String>>(self, context: S) -> Result<T, E> {
        self.map_err(|e| e.context(context))
    }
}
