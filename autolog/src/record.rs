// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use core::fmt;
use core::panic::Location;
use std::error::Error;

use crate::{Level, Marker};

/// A single log call, as handed to a [`Logger`](crate::Logger).
///
/// The message is kept as unformatted [`fmt::Arguments`]; it is up to the logger whether and
/// how to render it.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    level: Level,
    channel: &'a str,
    args: fmt::Arguments<'a>,
    marker: Option<&'a Marker>,
    error: Option<&'a (dyn Error + 'static)>,
    location: &'static Location<'static>,
    module_path: Option<&'static str>,
}

impl<'a> Record<'a> {
    /// Creates a record with no marker, error or module path.
    pub fn new(
        level: Level,
        channel: &'a str,
        args: fmt::Arguments<'a>,
        location: &'static Location<'static>,
    ) -> Self {
        Self {
            level,
            channel,
            args,
            marker: None,
            error: None,
            location,
            module_path: None,
        }
    }

    /// Attaches a marker.
    #[must_use]
    pub fn with_marker(mut self, marker: Option<&'a Marker>) -> Self {
        self.marker = marker;
        self
    }

    /// Attaches an error.
    #[must_use]
    pub fn with_error(mut self, error: Option<&'a (dyn Error + 'static)>) -> Self {
        self.error = error;
        self
    }

    /// Sets the module the call was made from.
    #[must_use]
    pub fn with_module_path(mut self, module_path: Option<&'static str>) -> Self {
        self.module_path = module_path;
        self
    }

    /// Severity of the call.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Channel name the logger was looked up by.
    pub fn channel(&self) -> &'a str {
        self.channel
    }

    /// The unformatted message.
    pub fn args(&self) -> &fmt::Arguments<'a> {
        &self.args
    }

    pub fn marker(&self) -> Option<&'a Marker> {
        self.marker
    }

    /// Error attached to the call, if any.
    pub fn error(&self) -> Option<&'a (dyn Error + 'static)> {
        self.error
    }

    /// Source location of the call into the facade.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Module the call was made from. Only known for macro calls.
    pub fn module_path(&self) -> Option<&'static str> {
        self.module_path
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("channel", &self.channel)
            .field("args", &self.args)
            .field("marker", &self.marker.map(Marker::name))
            .field("error", &self.error.map(|e| e.to_string()))
            .field("location", &self.location)
            .field("module_path", &self.module_path)
            .finish()
    }
}
