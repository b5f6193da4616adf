// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

//! Logger providers.
//!
//! The facade owns no loggers. On every call it asks the current [`LoggerFactory`] for the
//! logger of the caller's channel and forwards to it. The current factory is, in order:
//!
//! 1. the factory installed for this thread by [`with_factory`], if one is running;
//! 2. the process-wide factory installed by [`set_factory`] / [`set_boxed_factory`];
//! 3. the backend's [`DefaultFactory`](crate::DefaultFactory).

use std::cell::RefCell;
use std::sync::Arc;

use once_cell::race::OnceBox;
use thiserror::Error;

use crate::{Level, Marker, Record};

/// A named logger handed out by a [`LoggerFactory`].
pub trait Logger: Send + Sync {
    /// Channel name this logger was created for.
    fn name(&self) -> &str;

    /// Whether a record at `level`, optionally tagged with `marker`, would be emitted.
    fn enabled(&self, level: Level, marker: Option<&Marker>) -> bool;

    /// Emits `record`. Implementations do their own level filtering.
    fn log(&self, record: &Record<'_>);
}

/// Gets or creates the logger for a channel name.
pub trait LoggerFactory: Send + Sync {
    /// Returns the logger for `channel`. Called once per log call; caching is up to the factory.
    fn logger(&self, channel: &str) -> Arc<dyn Logger>;
}

impl<F: LoggerFactory + ?Sized> LoggerFactory for Arc<F> {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        (**self).logger(channel)
    }
}

impl<F: LoggerFactory + ?Sized> LoggerFactory for Box<F> {
    fn logger(&self, channel: &str) -> Arc<dyn Logger> {
        (**self).logger(channel)
    }
}

/// Possible errors from installing a process-wide factory.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetFactoryError {
    #[error("a logger factory has already been installed")]
    AlreadyInstalled,
}

static FACTORY: OnceBox<Box<dyn LoggerFactory>> = OnceBox::new();

std::thread_local! {
    static SCOPED: RefCell<Option<Arc<dyn LoggerFactory>>> = const { RefCell::new(None) };
}

/// Installs the process-wide logger factory.
///
/// This can succeed only once; later calls return [`SetFactoryError::AlreadyInstalled`] and
/// leave the first factory in place.
pub fn set_factory<F: LoggerFactory + 'static>(factory: F) -> Result<(), SetFactoryError> {
    set_boxed_factory(Box::new(factory))
}

/// Boxed form of [`set_factory`].
pub fn set_boxed_factory(factory: Box<dyn LoggerFactory>) -> Result<(), SetFactoryError> {
    FACTORY
        .set(Box::new(factory))
        .map_err(|_| SetFactoryError::AlreadyInstalled)
}

/// Runs `f` with `factory` serving every facade call made on the current thread.
///
/// Nested calls shadow outer ones. The previous factory is restored when `f` returns or
/// unwinds.
pub fn with_factory<R>(factory: Arc<dyn LoggerFactory>, f: impl FnOnce() -> R) -> R {
    let previous = SCOPED.with(|s| s.replace(Some(factory)));
    let _restore = ScopeGuard { previous };
    f()
}

/// RAII guard that puts back the outer scoped factory when dropped.
struct ScopeGuard {
    previous: Option<Arc<dyn LoggerFactory>>,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        let previous = self.previous.take();
        // Ignore the error raised while the thread-local is being torn down.
        let _ = SCOPED.try_with(|s| s.replace(previous));
    }
}

/// Looks up the logger for `channel` from the current factory.
///
/// The thread-local borrow is released before the factory runs, so a factory may itself log
/// through the facade.
pub fn logger(channel: &str) -> Arc<dyn Logger> {
    let scoped = SCOPED.try_with(|s| s.borrow().clone()).ok().flatten();
    if let Some(factory) = scoped {
        return factory.logger(channel);
    }
    match FACTORY.get() {
        Some(factory) => factory.logger(channel),
        None => crate::DefaultFactory.logger(channel),
    }
}
