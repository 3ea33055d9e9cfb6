//! Subject model.
//!
//! A subject is a named unit of required study work with a total-hours
//! requirement. The allocator consumes a list of subjects and distributes
//! their hours across a date range.

use serde::{Deserialize, Serialize};

/// A named unit of required study work.
///
/// `hours` is the total remaining work for the subject. It is only ever
/// decremented inside one allocation run's working copy — the input
/// subjects themselves are never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    /// Display name (non-empty after normalization).
    pub name: String,
    /// Total required study hours (positive after normalization).
    pub hours: f64,
}

impl Subject {
    /// Creates a new subject.
    pub fn new(name: impl Into<String>, hours: f64) -> Self {
        Self {
            name: name.into(),
            hours,
        }
    }

    /// Whether this subject carries any schedulable work.
    ///
    /// A subject with an empty (trimmed) name or non-positive hours is
    /// dropped by normalization and never reaches the allocator.
    pub fn is_schedulable(&self) -> bool {
        !self.name.trim().is_empty() && self.hours > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_new() {
        let s = Subject::new("Math", 4.0);
        assert_eq!(s.name, "Math");
        assert!((s.hours - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_is_schedulable() {
        assert!(Subject::new("Math", 4.0).is_schedulable());
        assert!(!Subject::new("", 4.0).is_schedulable());
        assert!(!Subject::new("   ", 4.0).is_schedulable());
        assert!(!Subject::new("Math", 0.0).is_schedulable());
        assert!(!Subject::new("Math", -1.0).is_schedulable());
    }

    #[test]
    fn test_subject_serde() {
        let s = Subject::new("Physics", 2.5);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"name":"Physics","hours":2.5}"#);

        let back: Subject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
