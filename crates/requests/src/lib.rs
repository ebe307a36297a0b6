//! JSON request helpers for the chat front-end

use std::path::PathBuf;

pub mod api;
pub mod client;
pub mod config;
#[cfg(feature = "wasm")]
pub mod fetch_fns;
pub mod location;
pub mod request;
pub mod transport;
pub mod utils;

pub use api::error::RequestError;
pub use client::RequestClient;
pub use config::RequestConfig;
pub use request::{Credentials, JsonRequest};

#[cfg(not(target_arch = "wasm32"))]
pub use utils::tracing::configure_tracing;

pub fn load_dotenv() -> Result<Option<PathBuf>, dotenv::Error> {
    match dotenv::dotenv() {
        // Swallow NotFound error since the .env is optional
        Err(dotenv::Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        r => r.map(Some),
    }
}
