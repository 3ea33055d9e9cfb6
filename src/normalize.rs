//! Permissive input normalization.
//!
//! Cleans raw, untrusted subject entries into [`Subject`] values before
//! allocation. The policy is deliberately permissive: malformed entries
//! (blank name, non-numeric or non-positive hours) are silently dropped,
//! never surfaced as errors. The hosting layer owns any stricter
//! user-facing validation.
//!
//! # Coercion Rules
//! - `name`: any JSON value is coerced to a string (numbers and booleans
//!   via their display form), then trimmed.
//! - `hours`: numbers pass through; numeric strings are parsed; anything
//!   else coerces to 0 and the entry is dropped.
//!
//! Surviving subjects keep their input order, and normalization is
//! idempotent: a clean list passes through unchanged.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Subject;

/// A raw subject entry as received from an untrusted caller.
///
/// Both fields are free-form JSON so that a request body with missing,
/// null, or oddly-typed fields still deserializes; coercion happens in
/// [`normalize_subjects`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawSubject {
    /// Free-form name field. Missing → null.
    #[serde(default)]
    pub name: Value,
    /// Free-form hours field. Missing → null.
    #[serde(default)]
    pub hours: Value,
}

impl RawSubject {
    /// Creates a raw entry from already-typed values (test convenience).
    pub fn new(name: impl Into<Value>, hours: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            hours: hours.into(),
        }
    }
}

impl From<&Subject> for RawSubject {
    fn from(subject: &Subject) -> Self {
        Self {
            name: Value::from(subject.name.as_str()),
            hours: Value::from(subject.hours),
        }
    }
}

/// Normalizes raw entries into clean subjects.
///
/// Keeps an entry iff its trimmed name is non-empty AND its coerced hours
/// are positive. Output order matches input order. Never fails.
pub fn normalize_subjects(raw: &[RawSubject]) -> Vec<Subject> {
    raw.iter()
        .filter_map(|entry| {
            let name = coerce_name(&entry.name);
            let hours = coerce_hours(&entry.hours);
            if !name.is_empty() && hours > 0.0 {
                Some(Subject::new(name, hours))
            } else {
                None
            }
        })
        .collect()
}

/// Coerces an arbitrary JSON value to a trimmed name string.
fn coerce_name(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        // Null, arrays, and objects don't name a subject.
        _ => String::new(),
    }
}

/// Coerces an arbitrary JSON value to hours. Invalid or missing → 0.
fn coerce_hours(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}
