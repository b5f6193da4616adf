// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Public logging macros.
//!
//! Every macro names its logger after the calling module (`module_path!()`), unless a
//! `channel:` is given. The message takes `format_args!` syntax and may be preceded by
//! optional prefixes, in this order:
//! - `channel: expr` - an explicit channel name
//! - `marker: expr` - a `&Marker` to attach
//! - `err: expr` - a reference to a `std::error::Error + 'static` to attach
//!
//! `err:` takes a reference to a concrete error type, or a `&dyn Error`. A
//! `Box<dyn Error>` has to be reborrowed as `&*boxed`, since `&boxed` is a reference to
//! the box rather than to the error.
//!
//! ```ignore
//! info!("plain message");
//! debug!("formatted {} {:?}", a, b);
//! warn!(marker: &AUDIT, "user {user} locked out");
//! error!(err: &e, "write failed");
//! error!(err: &*boxed_err, "write failed");
//! error!(channel: "my_app::jobs", marker: &AUDIT, err: &e, "job {id} aborted");
//! ```

/// Log at the specified level.
#[macro_export]
macro_rules! log {
    ($level:expr, channel: $channel:expr, $($rest:tt)+) => {
        $crate::__log_impl!($level, $channel; $($rest)+)
    };
    ($level:expr, $($rest:tt)+) => {
        $crate::__log_impl!($level, module_path!(); $($rest)+)
    };
}

/// Internal macro splitting off the optional `marker:` and `err:` prefixes.
///
/// Not intended for direct use; called by the public logging macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __log_impl {
    ($level:expr, $channel:expr; marker: $marker:expr, err: $err:expr, $($arg:tt)+) => {
        $crate::__private::log(
            $level,
            $channel,
            ::core::option::Option::Some(module_path!()),
            ::core::option::Option::Some($marker),
            ::core::option::Option::Some($crate::__private::as_error($err)),
            format_args!($($arg)+),
        )
    };
    ($level:expr, $channel:expr; marker: $marker:expr, $($arg:tt)+) => {
        $crate::__private::log(
            $level,
            $channel,
            ::core::option::Option::Some(module_path!()),
            ::core::option::Option::Some($marker),
            ::core::option::Option::None,
            format_args!($($arg)+),
        )
    };
    ($level:expr, $channel:expr; err: $err:expr, $($arg:tt)+) => {
        $crate::__private::log(
            $level,
            $channel,
            ::core::option::Option::Some(module_path!()),
            ::core::option::Option::None,
            ::core::option::Option::Some($crate::__private::as_error($err)),
            format_args!($($arg)+),
        )
    };
    ($level:expr, $channel:expr; $($arg:tt)+) => {
        $crate::__private::log(
            $level,
            $channel,
            ::core::option::Option::Some(module_path!()),
            ::core::option::Option::None,
            ::core::option::Option::None,
            format_args!($($arg)+),
        )
    };
}

/// Whether the calling module's logger would emit a record at the specified level.
///
/// Accepts the same optional `channel:` and `marker:` prefixes as [`log!`].
#[macro_export]
macro_rules! enabled {
    (channel: $channel:expr, marker: $marker:expr, $level:expr $(,)?) => {
        $crate::__private::enabled($level, $channel, ::core::option::Option::Some($marker))
    };
    (channel: $channel:expr, $level:expr $(,)?) => {
        $crate::__private::enabled($level, $channel, ::core::option::Option::None)
    };
    (marker: $marker:expr, $level:expr $(,)?) => {
        $crate::__private::enabled($level, module_path!(), ::core::option::Option::Some($marker))
    };
    ($level:expr $(,)?) => {
        $crate::__private::enabled($level, module_path!(), ::core::option::Option::None)
    };
}

/// Helper macro to work around the inability to use `$` in nested macro definitions.
macro_rules! with_dollar_sign {
    ($($body:tt)*) => {
        macro_rules! __with_dollar_sign { $($body)* }
        __with_dollar_sign!($);
    }
}

macro_rules! define_log_macro {
    ($name:ident, $enabled:ident, $level:ident) => {
        with_dollar_sign! {
            ($d:tt) => {
                #[doc = concat!("Log at the ", stringify!($level), " level.")]
                #[macro_export]
                macro_rules! $name {
                    ($d($d arg:tt)+) => {
                        $crate::log!($crate::Level::$level, $d($d arg)+)
                    };
                }

                #[doc = concat!("Whether the ", stringify!($level), " level is enabled for the caller.")]
                #[macro_export]
                macro_rules! $enabled {
                    ($d($d key:ident : $d value:expr),* $d(,)?) => {
                        $crate::enabled!($d($d key: $d value,)* $crate::Level::$level)
                    };
                }
            }
        }
    };
}

define_log_macro!(error, error_enabled, Error);
define_log_macro!(warn, warn_enabled, Warn);
define_log_macro!(info, info_enabled, Info);
define_log_macro!(debug, debug_enabled, Debug);
define_log_macro!(trace, trace_enabled, Trace);
