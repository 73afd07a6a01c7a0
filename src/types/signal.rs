//! Signal record types.
//!
//! A [`SignalRecord`] is the unit the registry produces for every registered
//! collector: the collector's stable name, its JSON payload, and its
//! availability state. Records are immutable once produced and are never
//! retried within a run.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome reported by a collector at its own boundary.
///
/// Collectors distinguish "the capability is not present here" from a genuine
/// collection failure: the former is a normal [`Probe::Unavailable`] value,
/// the latter is an `Err` from [`Collector::collect`](crate::Collector::collect).
/// The registry converts both into records without letting either abort the
/// batch.
#[derive(Debug, Clone, PartialEq)]
pub enum Probe {
    /// The capability exists and produced a JSON-serializable payload.
    Available(Value),
    /// The capability does not exist in this environment.
    Unavailable(String),
}

impl Probe {
    /// Report graceful unavailability with a short reason.
    ///
    /// The reason is logged for diagnostics but does not enter the record;
    /// an unavailable signal always canonicalizes as `value: null`.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable(reason.into())
    }
}

/// One collector's result, as merged into the aggregate signal set.
///
/// Field declaration order is serialization order and is part of the
/// canonical byte stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRecord {
    /// Stable signal key, unique within a run.
    pub name: String,
    /// Whether the underlying capability existed.
    pub available: bool,
    /// Collector payload; `null` when unavailable or failed.
    pub value: Value,
    /// Diagnostic description when collection itself failed.
    /// Unset (omitted from the canonical form) for available and
    /// gracefully-unavailable signals.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SignalRecord {
    /// Record for a collector that produced a payload.
    pub fn available(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            available: true,
            value,
            error: None,
        }
    }

    /// Record for a capability that does not exist in this environment.
    pub fn unavailable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: false,
            value: Value::Null,
            error: None,
        }
    }

    /// Record for a collector whose probe raised an error.
    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            available: false,
            value: Value::Null,
            error: Some(error.into()),
        }
    }
}
