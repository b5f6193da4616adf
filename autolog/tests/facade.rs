// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Tests for the autolog facade.
//!
//! Every test installs a capturing factory for its own thread, so the tests run in parallel
//! and work with either backend.

use std::io;
use std::sync::{Arc, Mutex};

use autolog::channel::{self, FACADE_CHANNEL};
use autolog::{
    Level, Log, Logger, LoggerFactory, Marker, Record, debug, debug_enabled, enabled, error,
    error_enabled, info, info_enabled, log, trace, trace_enabled, warn, warn_enabled, with_factory,
};

static AUDIT: Marker = Marker::new("AUDIT");

/// Everything a logger was handed for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Call {
    channel: String,
    level: Level,
    message: String,
    marker: Option<String>,
    error: Option<String>,
    module_path: Option<String>,
    line: u32,
}

/// Test double recording every lookup and every record.
#[derive(Default)]
struct Capture {
    lookups: Mutex<Vec<String>>,
    calls: Mutex<Vec<Call>>,
    enabled_queries: Mutex<Vec<(String, Level, Option<String>)>>,
    min_level: Option<Level>,
}

impl Capture {
    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn last(&self) -> Call {
        self.calls().pop().expect("no call was captured")
    }
}

struct CaptureLogger {
    name: String,
    capture: Arc<Capture>,
}

impl Logger for CaptureLogger {
    fn name(&self) -> &str {
        &self.name
    }

    fn enabled(&self, level: Level, marker: Option<&Marker>) -> bool {
        self.capture.enabled_queries.lock().unwrap().push((
            self.name.clone(),
            level,
            marker.map(|m| m.name().to_owned()),
        ));
        let level_ok = self.capture.min_level.is_none_or(|min| level <= min);
        level_ok && marker.is_none_or(|m| !m.contains_name("MUTED"))
    }

    fn log(&self, record: &Record<'_>) {
        self.capture.calls.lock().unwrap().push(Call {
            channel: record.channel().to_owned(),
            level: record.level(),
            message: record.args().to_string(),
            marker: record.marker().map(ToString::to_string),
            error: record.error().map(ToString::to_string),
            module_path: record.module_path().map(str::to_owned),
            line: record.location().line(),
        });
    }
}

struct CaptureFactory(Arc<Capture>);

impl LoggerFactory for CaptureFactory {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        self.0.lookups.lock().unwrap().push(channel.to_owned());
        Arc::new(CaptureLogger {
            name: channel.to_owned(),
            capture: Arc::clone(&self.0),
        })
    }
}

fn capture_with(capture: Capture, f: impl FnOnce()) -> Arc<Capture> {
    let capture = Arc::new(capture);
    with_factory(Arc::new(CaptureFactory(Arc::clone(&capture))), f);
    capture
}

fn capture(f: impl FnOnce()) -> Arc<Capture> {
    capture_with(Capture::default(), f)
}

fn io_error() -> io::Error {
    io::Error::new(io::ErrorKind::PermissionDenied, "disk is read-only")
}

#[test]
fn test_macro_channel_is_calling_module() {
    let captured = capture(|| info!("hello"));
    let call = captured.last();
    assert_eq!(call.channel, module_path!());
    assert_eq!(call.module_path.as_deref(), Some(module_path!()));
    assert_eq!(*captured.lookups.lock().unwrap(), [module_path!()]);
}

mod billing {
    pub fn charge() {
        autolog::warn!("card declined");
    }

    pub fn channel() -> &'static str {
        module_path!()
    }
}

#[test]
fn test_macro_channel_follows_nested_modules() {
    let captured = capture(billing::charge);
    assert_eq!(captured.last().channel, billing::channel());
    assert!(billing::channel().ends_with("::billing"));
}

#[test]
fn test_log_fn_channel_is_calling_file() {
    let captured = capture(|| Log::info("hello"));
    assert_eq!(captured.last().channel, file!());
    assert_eq!(captured.last().module_path, None);
    assert_eq!(Log::channel(), file!());
}

#[inline(never)]
fn wrapper_without_track_caller() -> u32 {
    Log::debug("from wrapper");
    line!() - 1
}

#[test]
fn test_log_fn_reports_the_immediate_caller() {
    let mut expected_line = 0;
    let captured = capture(|| expected_line = wrapper_without_track_caller());
    assert_eq!(captured.last().line, expected_line);
}

#[test]
fn test_explicit_channel() {
    let captured = capture(|| {
        info!(channel: "my_app::jobs", "job {} started", 7);
        info!(channel: FACADE_CHANNEL, "pretending to be the facade");
        info!(channel: "", "no name");
    });
    let channels: Vec<_> = captured.calls().into_iter().map(|c| c.channel).collect();
    assert_eq!(channels, ["my_app::jobs", FACADE_CHANNEL, FACADE_CHANNEL]);
}

#[test]
fn test_type_channel() {
    struct Scheduler;
    assert_eq!(channel::of::<Scheduler>(), std::any::type_name::<Scheduler>());
    assert!(channel::of::<Scheduler>().ends_with("Scheduler"));

    let captured = capture(|| debug!(channel: channel::of::<Scheduler>(), "tick"));
    assert!(captured.last().channel.ends_with("Scheduler"));
}

#[test]
fn test_macros_forward_every_shape() {
    let err = io_error();
    let user = "alice";
    let captured = capture(|| {
        info!("plain");
        info!("one {}", 1);
        info!("two {} {}", 1, "b");
        info!("many {user} {} {:?} {:>3}", 1.5, Some(2), 7);
        info!(marker: &AUDIT, "marked {}", user);
        info!(err: &err, "failed");
        info!(marker: &AUDIT, err: &err, "marked and failed {}", 3);
        info!(channel: "x::y", marker: &AUDIT, err: &err, "everything");
    });

    let calls = captured.calls();
    let shapes: Vec<_> = calls
        .iter()
        .map(|c| (c.message.as_str(), c.marker.as_deref(), c.error.as_deref()))
        .collect();
    assert_eq!(
        shapes,
        [
            ("plain", None, None),
            ("one 1", None, None),
            ("two 1 b", None, None),
            ("many alice 1.5 Some(2)   7", None, None),
            ("marked alice", Some("AUDIT"), None),
            ("failed", None, Some("disk is read-only")),
            ("marked and failed 3", Some("AUDIT"), Some("disk is read-only")),
            ("everything", Some("AUDIT"), Some("disk is read-only")),
        ]
    );
    assert!(calls.iter().all(|c| c.level == Level::Info));
}

#[test]
fn test_boxed_error_is_reborrowed() {
    let boxed: Box<dyn std::error::Error> = Box::new(io_error());
    let captured = capture(|| {
        error!(err: &*boxed, "boxed");
        Log::error_with_error("boxed", &*boxed);
    });
    let errors: Vec<_> = captured.calls().into_iter().map(|c| c.error).collect();
    assert_eq!(
        errors,
        [
            Some("disk is read-only".to_owned()),
            Some("disk is read-only".to_owned()),
        ]
    );
}

#[test]
fn test_level_macros() {
    let captured = capture(|| {
        error!("e");
        warn!("w");
        info!("i");
        debug!("d");
        trace!("t");
        log!(Level::Warn, "dynamic {}", "level");
    });
    let levels: Vec<_> = captured.calls().into_iter().map(|c| (c.level, c.message)).collect();
    assert_eq!(
        levels,
        [
            (Level::Error, "e".to_owned()),
            (Level::Warn, "w".to_owned()),
            (Level::Info, "i".to_owned()),
            (Level::Debug, "d".to_owned()),
            (Level::Trace, "t".to_owned()),
            (Level::Warn, "dynamic level".to_owned()),
        ]
    );
}

#[test]
fn test_log_fns_forward_every_shape() {
    let err = io_error();
    let captured = capture(|| {
        Log::trace("t");
        Log::debug(format_args!("d {}", 1));
        Log::info(String::from("i"));
        Log::warn_with_error("w", &err);
        Log::error_with_marker(&AUDIT, format_args!("e {}", 2));
        Log::info_with_marker_error(&AUDIT, "both", &err);
        Log::log(Level::Debug, None, "generic", Some(&err));
    });

    let calls = captured.calls();
    let shapes: Vec<_> = calls
        .iter()
        .map(|c| {
            (
                c.level,
                c.message.as_str(),
                c.marker.as_deref(),
                c.error.as_deref(),
            )
        })
        .collect();
    assert_eq!(
        shapes,
        [
            (Level::Trace, "t", None, None),
            (Level::Debug, "d 1", None, None),
            (Level::Info, "i", None, None),
            (Level::Warn, "w", None, Some("disk is read-only")),
            (Level::Error, "e 2", Some("AUDIT"), None),
            (Level::Info, "both", Some("AUDIT"), Some("disk is read-only")),
            (Level::Debug, "generic", None, Some("disk is read-only")),
        ]
    );
    assert!(calls.iter().all(|c| c.channel == file!()));
}

#[test]
fn test_every_level_has_every_shape() {
    let err = io_error();
    let captured = capture(|| {
        Log::trace_with_error("x", &err);
        Log::trace_with_marker(&AUDIT, "x");
        Log::trace_with_marker_error(&AUDIT, "x", &err);
        Log::debug_with_error("x", &err);
        Log::debug_with_marker(&AUDIT, "x");
        Log::debug_with_marker_error(&AUDIT, "x", &err);
        Log::info_with_error("x", &err);
        Log::info_with_marker(&AUDIT, "x");
        Log::warn("x");
        Log::warn_with_marker(&AUDIT, "x");
        Log::warn_with_marker_error(&AUDIT, "x", &err);
        Log::error("x");
        Log::error_with_error("x", &err);
        Log::error_with_marker_error(&AUDIT, "x", &err);
    });
    assert_eq!(captured.calls().len(), 14);
    assert_eq!(captured.lookups.lock().unwrap().len(), 14);
}

#[test]
fn test_marker_with_references_is_forwarded_whole() {
    let security = Marker::new("SECURITY").with(AUDIT.clone());
    let captured = capture(|| warn!(marker: &security, "token reuse"));
    assert_eq!(captured.last().marker.as_deref(), Some("SECURITY [ AUDIT ]"));
}

#[test]
fn test_enabled_checks() {
    let muted = Marker::new("MUTED");
    let mut flags = Vec::new();
    let captured = capture_with(
        Capture {
            min_level: Some(Level::Info),
            ..Capture::default()
        },
        || {
            flags.push(Log::is_error_enabled());
            flags.push(Log::is_warn_enabled());
            flags.push(Log::is_info_enabled());
            flags.push(Log::is_debug_enabled());
            flags.push(Log::is_trace_enabled());
            flags.push(Log::is_error_enabled_for(&muted));
            flags.push(Log::is_warn_enabled_for(&AUDIT));
            flags.push(Log::is_info_enabled_for(&AUDIT));
            flags.push(Log::is_debug_enabled_for(&AUDIT));
            flags.push(Log::is_trace_enabled_for(&AUDIT));
            flags.push(Log::enabled(Level::Warn, None));
        },
    );
    assert_eq!(
        flags,
        [true, true, true, false, false, false, true, true, false, false, true]
    );
    let queries = captured.enabled_queries.lock().unwrap();
    assert_eq!(queries.len(), flags.len());
    assert!(queries.iter().all(|(channel, _, _)| channel == file!()));
    assert_eq!(queries[5], (file!().to_owned(), Level::Error, Some("MUTED".to_owned())));
}

#[test]
fn test_enabled_macros() {
    let muted = Marker::new("MUTED");
    let mut flags = Vec::new();
    let captured = capture_with(
        Capture {
            min_level: Some(Level::Warn),
            ..Capture::default()
        },
        || {
            flags.push(error_enabled!());
            flags.push(warn_enabled!());
            flags.push(info_enabled!());
            flags.push(debug_enabled!());
            flags.push(trace_enabled!());
            flags.push(error_enabled!(marker: &muted));
            flags.push(warn_enabled!(channel: "my_app::db"));
            flags.push(enabled!(Level::Error));
            flags.push(enabled!(channel: "my_app::db", marker: &AUDIT, Level::Warn));
        },
    );
    assert_eq!(flags, [true, true, false, false, false, false, true, true, true]);

    let queries = captured.enabled_queries.lock().unwrap();
    assert_eq!(queries[0].0, module_path!());
    assert_eq!(queries[6].0, "my_app::db");
    assert_eq!(
        queries[8],
        ("my_app::db".to_owned(), Level::Warn, Some("AUDIT".to_owned()))
    );
}

#[test]
fn test_name_is_the_callers_channel() {
    let mut name = String::new();
    capture(|| name = Log::name());
    assert_eq!(name, file!());
}

#[test]
fn test_every_call_resolves_a_fresh_logger() {
    let captured = capture(|| {
        for i in 0..3 {
            info!("round {i}");
        }
        Log::info("once more");
    });
    assert_eq!(captured.lookups.lock().unwrap().len(), 4);
}

#[test]
fn test_factory_panic_propagates() {
    struct Broken;
    impl LoggerFactory for Broken {
        fn logger(&self, channel: &str) -> Arc<dyn Logger> {
            panic!("no logger for {channel}");
        }
    }

    let result = std::panic::catch_unwind(|| {
        with_factory(Arc::new(Broken), || info!("lost"));
    });
    let payload = result.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .unwrap_or_default();
    assert_eq!(message, format!("no logger for {}", module_path!()));
}

#[test]
fn test_uninhabited_facade() {
    fn absurd(log: Log) -> ! {
        match log {}
    }
    let _ = absurd as fn(Log) -> !;
}
