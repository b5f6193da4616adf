// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Channel name resolution.
//!
//! A channel name is the string a [`LoggerFactory`](crate::LoggerFactory) uses to hand out a
//! logger. The facade derives it from whoever called it: the calling module's path for the
//! macros, the calling source file for [`Log`](crate::Log). Calls that originate inside this
//! crate are not a real caller, so they report as [`FACADE_CHANNEL`].

use core::panic::Location;

/// Channel name used when no caller outside the facade can be found.
pub const FACADE_CHANNEL: &str = concat!(env!("CARGO_CRATE_NAME"), "::Log");

/// Module path of this crate's root.
const CRATE_PATH: &str = env!("CARGO_CRATE_NAME");

/// Returns `candidate` unless it is missing, empty, or names code inside the facade crate,
/// in which case [`FACADE_CHANNEL`] is returned.
pub fn resolve(candidate: Option<&str>) -> &str {
    match candidate {
        Some(name) if !name.is_empty() && !is_facade_module(name) => name,
        _ => FACADE_CHANNEL,
    }
}

/// Channel name for a call made from `location`.
///
/// The channel is the caller's source file. Locations inside this crate's own sources
/// fall back to [`FACADE_CHANNEL`].
pub fn from_location(location: &'static Location<'static>) -> &'static str {
    let file = location.file();
    if is_facade_file(file) {
        FACADE_CHANNEL
    } else {
        resolve(Some(file))
    }
}

/// Channel named after the type `T`, e.g. `my_app::net::Server`.
pub fn of<T: ?Sized>() -> &'static str {
    resolve(Some(core::any::type_name::<T>()))
}

fn is_facade_module(name: &str) -> bool {
    name.strip_prefix(CRATE_PATH)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with("::"))
}

fn is_facade_file(file: &str) -> bool {
    // Every source file of this crate sits next to this one.
    let src_dir = file!().trim_end_matches("channel.rs");
    !src_dir.is_empty() && file.starts_with(src_dir)
}
