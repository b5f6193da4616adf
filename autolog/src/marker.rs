// Copyright (c) Microsoft Corporation.
// Licensed under the MIT license.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A named tag that can be attached to a log call.
///
/// Markers let a logging backend route or filter records independently of their level, e.g.
/// sending everything marked `AUDIT` to a separate sink. A marker may reference other markers;
/// [`contains`](Self::contains) looks through those references recursively.
///
/// Two markers are equal when their names are equal, whatever they reference.
///
/// ```ignore
/// static AUDIT: Marker = Marker::new("AUDIT");
///
/// let mut security = Marker::new("SECURITY");
/// security.add(AUDIT.clone());
/// assert!(security.contains_name("AUDIT"));
/// ```
#[derive(Debug, Clone)]
pub struct Marker {
    name: Cow<'static, str>,
    references: Vec<Marker>,
}

impl Marker {
    /// Creates a marker with a static name and no references.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            references: Vec::new(),
        }
    }

    /// Creates a marker whose name is only known at runtime.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            references: Vec::new(),
        }
    }

    /// The marker's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Adds a reference to `other`. A marker already referenced by the same name is not
    /// added twice, and a marker never references itself.
    pub fn add(&mut self, other: Marker) {
        if other.name == self.name || self.references.contains(&other) {
            return;
        }
        self.references.push(other);
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, other: Marker) -> Self {
        self.add(other);
        self
    }

    /// Removes the direct reference named like `other`. Returns whether one was removed.
    pub fn remove(&mut self, other: &Marker) -> bool {
        let before = self.references.len();
        self.references.retain(|r| r != other);
        self.references.len() != before
    }

    /// Whether this marker references any other marker.
    pub fn has_references(&self) -> bool {
        !self.references.is_empty()
    }

    /// Direct references, in insertion order.
    pub fn references(&self) -> impl Iterator<Item = &Marker> {
        self.references.iter()
    }

    /// Whether this marker is `other` or references it, directly or transitively.
    pub fn contains(&self, other: &Marker) -> bool {
        self.contains_name(other.name())
    }

    /// Whether this marker is named `name` or references such a marker, directly or
    /// transitively.
    pub fn contains_name(&self, name: &str) -> bool {
        self.name() == name || self.references.iter().any(|r| r.contains_name(name))
    }
}

impl PartialEq for Marker {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Marker {}

impl Hash for Marker {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some((first, rest)) = self.references.split_first() {
            write!(f, " [ {first}")?;
            for r in rest {
                write!(f, ", {r}")?;
            }
            f.write_str(" ]")?;
        }
        Ok(())
    }
}
