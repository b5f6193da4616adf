// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Log backend implementation.
//!
//! This module provides the default provider when using the `log` crate. Each logger uses its
//! channel name as the `log` target, so the usual target-based filters (`RUST_LOG=my_app::db=debug`
//! with `env_logger`, for instance) apply per caller.
//!
//! `log` has no notion of markers or attached errors. Both are passed along as structured
//! key-values via the `kv` feature:
//! - `marker`: captured with `Display`, which includes the marker's references
//! - `error`: captured as the error itself, so a `log::Log` can walk its `source()` chain

use std::sync::Arc;

use crate::{Level, Logger, LoggerFactory, Marker, Record};

impl crate::Level {
    /// Converts this level to the corresponding `log::Level`.
    pub const fn to_log_level(self) -> log::Level {
        match self {
            crate::Level::Error => log::Level::Error,
            crate::Level::Warn => log::Level::Warn,
            crate::Level::Info => log::Level::Info,
            crate::Level::Debug => log::Level::Debug,
            crate::Level::Trace => log::Level::Trace,
        }
    }
}

/// Factory handing out loggers that forward to the global `log` logger.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFactory;

impl LoggerFactory for LogFactory {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        Arc::new(LogLogger {
            target: channel.to_owned(),
        })
    }
}

/// Logger for one `log` target.
#[derive(Debug, Clone)]
pub struct LogLogger {
    target: String,
}

impl Logger for LogLogger {
    fn name(&self) -> &str {
        &self.target
    }

    fn enabled(&self, level: Level, _marker: Option<&Marker>) -> bool {
        let level = level.to_log_level();
        level <= log::max_level()
            && log::logger().enabled(
                &log::Metadata::builder()
                    .level(level)
                    .target(&self.target)
                    .build(),
            )
    }

    fn log(&self, record: &Record<'_>) {
        if record.level().to_log_level() > log::max_level() {
            return;
        }

        let marker = record.marker().map(log::kv::Value::from_display);
        let error = record.error().map(log::kv::Value::from_dyn_error);
        let kvs: Vec<(&str, log::kv::Value<'_>)> = [("marker", marker), ("error", error)]
            .into_iter()
            .filter_map(|(key, value)| Some((key, value?)))
            .collect();

        let location = record.location();
        log::logger().log(
            &log::Record::builder()
                .args(*record.args())
                .level(record.level().to_log_level())
                .target(&self.target)
                .module_path_static(record.module_path())
                .file_static(Some(location.file()))
                .line(Some(location.line()))
                .key_values(&kvs)
                .build(),
        );
    }
}
