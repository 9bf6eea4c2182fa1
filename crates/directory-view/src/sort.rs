//! Sort Specification
//!
//! Sort key + direction, and the tracker that decides the next spec
//! when the user picks a column.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Column the directory can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Email,
}

impl SortKey {
    /// All keys in control display order
    pub const ALL: [SortKey; 2] = [SortKey::Name, SortKey::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Email => "Email",
        }
    }

    /// The record field this key compares on
    pub fn field<'a>(&self, record: &'a Record) -> &'a str {
        match self {
            SortKey::Name => &record.name,
            SortKey::Email => &record.email,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Arrow shown next to the active sort button
    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Spec that results from the user requesting `key`.
    ///
    /// Same key flips the direction, a different key starts ascending.
    pub fn next(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Ascending)
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortKey::Name, SortDirection::Ascending)
    }
}

/// Owns the current sort spec
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SortSpecTracker {
    current: SortSpec,
}

impl SortSpecTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> SortSpec {
        self.current
    }

    pub fn request_sort(&mut self, key: SortKey) -> SortSpec {
        self.current = self.current.next(key);
        tracing::debug!(
            "[SORT] {} {:?}",
            self.current.key.as_str(),
            self.current.direction
        );
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_name_ascending() {
        let tracker = SortSpecTracker::new();
        assert_eq!(
            tracker.current(),
            SortSpec::new(SortKey::Name, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_same_key_alternates_direction() {
        let mut tracker = SortSpecTracker::new();
        assert_eq!(tracker.request_sort(SortKey::Name).direction, SortDirection::Descending);
        assert_eq!(tracker.request_sort(SortKey::Name).direction, SortDirection::Ascending);
        assert_eq!(tracker.request_sort(SortKey::Name).direction, SortDirection::Descending);
    }

    #[test]
    fn test_key_change_resets_to_ascending() {
        let mut tracker = SortSpecTracker::new();
        tracker.request_sort(SortKey::Name); // name descending

        let spec = tracker.request_sort(SortKey::Email);
        assert_eq!(spec, SortSpec::new(SortKey::Email, SortDirection::Ascending));

        // Toggle law restarts for the new key
        assert_eq!(tracker.request_sort(SortKey::Email).direction, SortDirection::Descending);
        assert_eq!(tracker.request_sort(SortKey::Email).direction, SortDirection::Ascending);

        // Coming back to name starts ascending regardless of its earlier direction
        assert_eq!(
            tracker.request_sort(SortKey::Name),
            SortSpec::new(SortKey::Name, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_key_names() {
        assert_eq!(SortKey::Email.as_str(), "email");
        assert_eq!(SortKey::Email.label(), "Email");
        assert_eq!(serde_json::to_string(&SortKey::Name).unwrap(), "\"name\"");
        assert_eq!(
            serde_json::to_string(&SortDirection::Descending).unwrap(),
            "\"descending\""
        );
    }
}
