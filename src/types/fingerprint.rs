//! Fingerprint result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::signal::SignalRecord;

/// The 128-bit identity hash formatted as four 8-hex-digit groups joined by
/// hyphens, e.g. `d2d665df-f1512dd1-a8f3c564-2c326650`.
///
/// This is a content-derived identifier: the same aggregate signal set (with
/// the documented volatile fields excluded) always produces the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FingerprintId(String);

impl FingerprintId {
    /// Wrap a formatted identity hash.
    pub fn new(hash: String) -> Self {
        Self(hash)
    }

    /// Get the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FingerprintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal artifact of one synthesis run.
///
/// Created once per invocation, never mutated afterwards, never cached
/// between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// The aggregate signal set, one record per registered collector in
    /// declaration order. Exposed for diagnostics.
    pub signals: Vec<SignalRecord>,
    /// The identity hash of the canonical signal encoding.
    pub id: FingerprintId,
    /// Fixed placeholder confidence score ([`crate::CONFIDENCE_SCORE`]).
    pub score: f64,
}

impl Fingerprint {
    /// Look up a signal record by name.
    pub fn signal(&self, name: &str) -> Option<&SignalRecord> {
        self.signals.iter().find(|s| s.name == name)
    }

    /// Number of signals that reported an available capability.
    pub fn available_count(&self) -> usize {
        self.signals.iter().filter(|s| s.available).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fingerprint_id_display() {
        let id = FingerprintId::new("00000000-00000000-00000000-00000000".to_string());
        assert_eq!(id.to_string(), "00000000-00000000-00000000-00000000");
        assert_eq!(id.as_str().len(), 35);
    }

    #[test]
    fn test_signal_lookup() {
        let fp = Fingerprint {
            signals: vec![
                SignalRecord::available("zone", json!({"offset_seconds": 0})),
                SignalRecord::unavailable("battery"),
            ],
            id: FingerprintId::new("00000000-00000000-00000000-00000000".to_string()),
            score: crate::CONFIDENCE_SCORE,
        };
        assert!(fp.signal("zone").is_some());
        assert!(fp.signal("missing").is_none());
        assert_eq!(fp.available_count(), 1);
    }
}
