// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Provider that discards everything.

use std::sync::Arc;

use crate::{Level, Logger, LoggerFactory, Marker, Record};

/// A factory whose loggers drop every record and report every level as disabled.
///
/// Useful for silencing a thread with [`with_factory`](crate::with_factory), or for
/// benchmarks where logging overhead should be eliminated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpFactory;

impl LoggerFactory for NoOpFactory {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        Arc::new(NoOpLogger {
            name: channel.to_owned(),
        })
    }
}

/// Logger handed out by [`NoOpFactory`].
#[derive(Debug, Clone, Default)]
pub struct NoOpLogger {
    name: String,
}

impl Logger for NoOpLogger {
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    fn enabled(&self, _level: Level, _marker: Option<&Marker>) -> bool {
        false
    }

    #[inline]
    fn log(&self, _record: &Record<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_factory_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpFactory>();
        assert_send_sync::<NoOpLogger>();
    }

    #[test]
    fn test_noop_logger_keeps_name_and_disables_all() {
        let logger = NoOpFactory.logger("my_app::db");
        assert_eq!(logger.name(), "my_app::db");
        for level in Level::ALL {
            assert!(!logger.enabled(level, None));
        }
        let record = Record::new(
            Level::Error,
            "my_app::db",
            format_args!("dropped"),
            core::panic::Location::caller(),
        );
        logger.log(&record);
    }
}
