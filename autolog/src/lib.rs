// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! # autolog
//!
//! A static logging facade that looks up a logger per call, named after the caller.
//!
//! Callers never declare a logger of their own. Every call resolves the calling
//! module (or source file), asks the installed [`LoggerFactory`] for a logger of that
//! name, and forwards the message, marker and error to it unchanged.
//!
//! ## Features
//!
//! - `backend_log` (default): loggers forward to the [`log`](https://docs.rs/log) crate,
//!   using the channel name as the `log` target. Markers and errors travel as
//!   key-values.
//!
//! - `backend_tracing`: loggers forward to [`tracing`](https://docs.rs/tracing). Tracing
//!   targets are static, so the channel name is recorded as a `channel` field instead.
//!
//! When both features are enabled, `backend_tracing` takes precedence. Either default
//! can be replaced at runtime with [`set_factory`] or, for one thread, [`with_factory`].
//!
//! ## Example
//!
//! ```ignore
//! use autolog::{Log, Marker, info, warn};
//!
//! static AUDIT: Marker = Marker::new("AUDIT");
//!
//! // Channel is this module's path.
//! info!("listening on {}", addr);
//! warn!(marker: &AUDIT, "login failed for {user}");
//! autolog::error!(err: &io_err, "could not open {}", path.display());
//!
//! // Channel is this source file.
//! Log::info("started");
//! if Log::is_debug_enabled() {
//!     Log::debug(format_args!("state = {state:?}"));
//! }
//! ```

#[cfg(not(any(feature = "backend_log", feature = "backend_tracing")))]
compile_error!("Either `backend_log` or `backend_tracing` feature must be enabled.");

#[macro_use]
mod macros;

#[cfg(all(feature = "backend_log", not(feature = "backend_tracing")))]
pub mod backend_log;

#[cfg(feature = "backend_tracing")]
pub mod backend_tracing;

pub mod channel;
mod facade;
mod marker;
mod noop;
pub mod provider;
mod record;

use core::fmt;
use core::str::FromStr;

pub use facade::Log;
pub use marker::Marker;
pub use noop::{NoOpFactory, NoOpLogger};
pub use provider::{Logger, LoggerFactory, SetFactoryError, set_boxed_factory, set_factory, with_factory};
pub use record::Record;

#[cfg(all(feature = "backend_log", not(feature = "backend_tracing")))]
pub use backend_log::LogFactory as DefaultFactory;

#[cfg(feature = "backend_tracing")]
pub use backend_tracing::TracingFactory as DefaultFactory;

/// Log level that abstracts over backend-specific level types.
///
/// Levels are ordered from most severe to least severe: `Error` > `Warn` > `Info` > `Debug` > `Trace`.
/// This ordering is used by logging implementations to filter messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Serious problems that need immediate attention.
    Error,
    /// Potential issues or unexpected situations.
    Warn,
    /// General informational messages.
    Info,
    /// Debugging information useful during development.
    Debug,
    /// Very verbose debugging, typically disabled in production.
    Trace,
}

impl Level {
    /// Every level, most severe first.
    pub const ALL: [Level; 5] = [
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
        Level::Trace,
    ];

    /// Upper-case name of the level, as most formatters print it.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Error => "ERROR",
            Level::Warn => "WARN",
            Level::Info => "INFO",
            Level::Debug => "DEBUG",
            Level::Trace => "TRACE",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing a [`Level`] from an unknown name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown log level `{0}`")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Level::Error),
            "warn" | "warning" => Ok(Level::Warn),
            "info" => Ok(Level::Info),
            "debug" => Ok(Level::Debug),
            "trace" => Ok(Level::Trace),
            _ => Err(ParseLevelError(s.to_owned())),
        }
    }
}

/// Internal module exposing helpers for use by exported macros.
///
/// This module is public only because macros need access to it at the call site.
/// It is not part of the public API and should not be used directly.
/// Breaking changes to this module are not considered semver violations.
#[doc(hidden)]
pub mod __private {
    use core::fmt;
    use core::panic::Location;

    use crate::{Level, Marker, Record};

    /// Coerces any concrete error into the trait object carried by [`Record`].
    #[inline]
    pub fn as_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> &'a (dyn std::error::Error + 'static) {
        err
    }

    /// Entry point of the logging macros.
    #[track_caller]
    pub fn log(
        level: Level,
        channel: &str,
        module_path: Option<&'static str>,
        marker: Option<&Marker>,
        error: Option<&(dyn std::error::Error + 'static)>,
        args: fmt::Arguments<'_>,
    ) {
        let channel = crate::channel::resolve(Some(channel));
        let record = Record::new(level, channel, args, Location::caller())
            .with_module_path(module_path)
            .with_marker(marker)
            .with_error(error);
        crate::provider::logger(channel).log(&record);
    }

    /// Entry point of the `enabled!` family of macros.
    pub fn enabled(level: Level, channel: &str, marker: Option<&Marker>) -> bool {
        let channel = crate::channel::resolve(Some(channel));
        crate::provider::logger(channel).enabled(level, marker)
    }
}
