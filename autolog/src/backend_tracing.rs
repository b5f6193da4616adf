// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Tracing backend implementation.
//!
//! This module provides the default provider when using the `tracing` crate. Tracing callsites
//! carry a static target, so the channel name cannot become the event's target the way it does
//! with the `log` backend. It is recorded in a `channel` field instead, next to `marker` and
//! `error` when present. Events are emitted inside whatever span is current, so spans opened
//! with `tracing` directly still nest around facade calls.

use std::sync::Arc;

use crate::{Level, Logger, LoggerFactory, Marker, Record};

impl crate::Level {
    /// Converts this level to the corresponding `tracing::Level`.
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            crate::Level::Error => tracing::Level::ERROR,
            crate::Level::Warn => tracing::Level::WARN,
            crate::Level::Info => tracing::Level::INFO,
            crate::Level::Debug => tracing::Level::DEBUG,
            crate::Level::Trace => tracing::Level::TRACE,
        }
    }
}

/// Factory handing out loggers that emit `tracing` events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingFactory;

impl LoggerFactory for TracingFactory {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        Arc::new(TracingLogger {
            channel: channel.to_owned(),
        })
    }
}

/// Logger for one channel, emitting `tracing` events.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    channel: String,
}

/// Tracing levels must be constants at the callsite, so the runtime level is matched here.
macro_rules! dispatch_by_level {
    ($level:expr, $mac:ident!()) => {
        match $level {
            Level::Error => tracing::$mac!(tracing::Level::ERROR),
            Level::Warn => tracing::$mac!(tracing::Level::WARN),
            Level::Info => tracing::$mac!(tracing::Level::INFO),
            Level::Debug => tracing::$mac!(tracing::Level::DEBUG),
            Level::Trace => tracing::$mac!(tracing::Level::TRACE),
        }
    };
    ($level:expr, $mac:ident!($($arg:tt)*)) => {
        match $level {
            Level::Error => tracing::$mac!(tracing::Level::ERROR, $($arg)*),
            Level::Warn => tracing::$mac!(tracing::Level::WARN, $($arg)*),
            Level::Info => tracing::$mac!(tracing::Level::INFO, $($arg)*),
            Level::Debug => tracing::$mac!(tracing::Level::DEBUG, $($arg)*),
            Level::Trace => tracing::$mac!(tracing::Level::TRACE, $($arg)*),
        }
    };
}

impl Logger for TracingLogger {
    fn name(&self) -> &str {
        &self.channel
    }

    fn enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        dispatch_by_level!(level, enabled!())
    }

    fn log(&self, record: &Record<'_>) {
        let channel = self.channel.as_str();
        let marker = record.marker().map(tracing::field::display);
        let error = record.error();
        let file = record.location().file();
        let line = record.location().line();
        dispatch_by_level!(
            record.level(),
            event!(
                channel,
                marker,
                error,
                caller.file = file,
                caller.line = line,
                "{}",
                record.args()
            )
        );
    }
}
