// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use core::fmt::Display;
use core::panic::Location;
use std::error::Error;
use std::sync::Arc;

use crate::{Level, Logger, Marker, Record, channel, provider};

/// Static logging facade.
///
/// `Log` has no values; it only groups functions. Each function resolves a logger named after
/// the source file it was called from (see [`channel::from_location`]) and forwards its
/// arguments to it unchanged. Facade functions are `#[track_caller]`, so the channel is always
/// the code outside the facade, and calls made from inside this crate report as
/// [`FACADE_CHANNEL`](crate::channel::FACADE_CHANNEL).
///
/// The channel is the file name exactly as the compiler reports it through
/// [`Location::file`]. For the calling crate that is usually a relative path such as
/// `src/db/pool.rs`; for a dependency built from a registry or a git checkout it can be an
/// absolute path into the cargo home. Use the macros for a module-path channel
/// (`my_app::db::pool`), or pass one explicitly with `channel:`.
///
/// Messages are anything `Display`: a `&str`, a `String`, or `format_args!(..)` when the
/// message has arguments.
///
/// ```ignore
/// use autolog::Log;
///
/// Log::info("cache warmed");
/// Log::warn_with_error(format_args!("retrying {path}"), &err);
/// if Log::is_trace_enabled() {
///     Log::trace(format_args!("{:?}", expensive_dump()));
/// }
/// ```
///
/// `Log` cannot be constructed:
///
/// ```compile_fail
/// let _log = autolog::Log {};
/// ```
pub enum Log {}

/// Generates the enabled checks and the four message shapes of one level.
macro_rules! define_level_fns {
    (
        $level:ident,
        $is_enabled:ident,
        $is_enabled_for:ident,
        $log:ident,
        $log_with_error:ident,
        $log_with_marker:ident,
        $log_with_marker_error:ident
    ) => {
        #[doc = concat!("Whether the caller's logger has the ", stringify!($level), " level enabled.")]
        #[track_caller]
        pub fn $is_enabled() -> bool {
            Self::enabled(Level::$level, None)
        }

        #[doc = concat!("Whether the caller's logger has the ", stringify!($level), " level enabled for `marker`.")]
        #[track_caller]
        pub fn $is_enabled_for(marker: &Marker) -> bool {
            Self::enabled(Level::$level, Some(marker))
        }

        #[doc = concat!("Log `msg` at the ", stringify!($level), " level.")]
        #[track_caller]
        pub fn $log(msg: impl Display) {
            Self::log(Level::$level, None, msg, None);
        }

        #[doc = concat!("Log `msg` with an attached error at the ", stringify!($level), " level.")]
        #[track_caller]
        pub fn $log_with_error(msg: impl Display, err: &(dyn Error + 'static)) {
            Self::log(Level::$level, None, msg, Some(err));
        }

        #[doc = concat!("Log `msg` tagged with `marker` at the ", stringify!($level), " level.")]
        #[track_caller]
        pub fn $log_with_marker(marker: &Marker, msg: impl Display) {
            Self::log(Level::$level, Some(marker), msg, None);
        }

        #[doc = concat!("Log `msg` tagged with `marker` and with an attached error at the ", stringify!($level), " level.")]
        #[track_caller]
        pub fn $log_with_marker_error(marker: &Marker, msg: impl Display, err: &(dyn Error + 'static)) {
            Self::log(Level::$level, Some(marker), msg, Some(err));
        }
    };
}

impl Log {
    /// Channel name the caller's logger is looked up by.
    #[track_caller]
    pub fn channel() -> &'static str {
        channel::from_location(Location::caller())
    }

    /// Name reported by the caller's logger.
    #[track_caller]
    pub fn name() -> String {
        Self::logger().name().to_owned()
    }

    /// Whether the caller's logger would emit a record at `level`, optionally tagged with `marker`.
    #[track_caller]
    pub fn enabled(level: Level, marker: Option<&Marker>) -> bool {
        Self::logger().enabled(level, marker)
    }

    /// Log `msg` at `level`, optionally tagged with `marker` and carrying `error`.
    #[track_caller]
    pub fn log(
        level: Level,
        marker: Option<&Marker>,
        msg: impl Display,
        error: Option<&(dyn Error + 'static)>,
    ) {
        let location = Location::caller();
        let channel = channel::from_location(location);
        provider::logger(channel).log(
            &Record::new(level, channel, format_args!("{msg}"), location)
                .with_marker(marker)
                .with_error(error),
        );
    }

    #[track_caller]
    fn logger() -> Arc<dyn Logger> {
        provider::logger(Self::channel())
    }

    define_level_fns!(
        Trace,
        is_trace_enabled,
        is_trace_enabled_for,
        trace,
        trace_with_error,
        trace_with_marker,
        trace_with_marker_error
    );
    define_level_fns!(
        Debug,
        is_debug_enabled,
        is_debug_enabled_for,
        debug,
        debug_with_error,
        debug_with_marker,
        debug_with_marker_error
    );
    define_level_fns!(
        Info,
        is_info_enabled,
        is_info_enabled_for,
        info,
        info_with_error,
        info_with_marker,
        info_with_marker_error
    );
    define_level_fns!(
        Warn,
        is_warn_enabled,
        is_warn_enabled_for,
        warn,
        warn_with_error,
        warn_with_marker,
        warn_with_marker_error
    );
    define_level_fns!(
        Error,
        is_error_enabled,
        is_error_enabled_for,
        error,
        error_with_error,
        error_with_marker,
        error_with_marker_error
    );
}
