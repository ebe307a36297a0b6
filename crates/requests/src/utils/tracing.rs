//! Subscriber setup. Browser console under `wasm`, stderr natively.
//!
//! Both default to showing this crate's own events at debug level and
//! nothing else.

use tracing::Level;

/// Crate target used for the default filter
pub const TRACING_TARGET: &str = env!("CARGO_CRATE_NAME");
pub const DEFAULT_LEVEL: Level = Level::DEBUG;

#[cfg(feature = "wasm")]
pub use console::*;

#[cfg(not(target_arch = "wasm32"))]
pub use native::*;

#[cfg(feature = "wasm")]
mod console {
    use std::sync::Once;

    use time::format_description::well_known::Iso8601;
    use tracing_subscriber::{
        filter::Targets,
        fmt::{format::Pretty, time::UtcTime},
        layer::SubscriberExt,
        util::{SubscriberInitExt, TryInitError},
    };
    use tracing_web::{performance_layer, MakeWebConsoleWriter};

    use super::{DEFAULT_LEVEL, TRACING_TARGET};

    /// Writes request events to the browser console
    ///
    /// Fails if the page already installed its own subscriber
    pub fn configure_console_tracing() -> Result<(), TryInitError> {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false) // Only partially supported across browsers
            .with_timer(UtcTime::new(Iso8601::DEFAULT))
            .with_writer(MakeWebConsoleWriter::new());
        let perf_layer = performance_layer().with_details_from_fields(Pretty::default());
        let targets = Targets::new().with_target(TRACING_TARGET, DEFAULT_LEVEL);

        tracing_subscriber::registry()
            .with(fmt_layer)
            .with(perf_layer)
            .with(targets)
            .try_init()
    }

    /// First call installs the console subscriber, later calls do nothing
    pub fn configure_console_tracing_once() {
        static ONCE: Once = Once::new();
        ONCE.call_once(|| {
            if let Err(e) = configure_console_tracing() {
                tracing::debug!("configure_console_tracing::skipped: {e}");
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use tracing::subscriber::SetGlobalDefaultError;
    use tracing_subscriber::EnvFilter;

    use super::{DEFAULT_LEVEL, TRACING_TARGET};

    /// `RUST_LOG` if set, otherwise this crate's events at debug
    pub fn default_filter() -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{TRACING_TARGET}={}", DEFAULT_LEVEL.as_str().to_lowercase()))
        })
    }

    pub fn configure_tracing() -> Result<(), SetGlobalDefaultError> {
        tracing::subscriber::set_global_default(
            tracing_subscriber::FmtSubscriber::builder()
                .with_env_filter(default_filter())
                .with_line_number(true)
                .with_file(true)
                .finish(),
        )
    }
}
