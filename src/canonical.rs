//! Canonical serialization of the aggregate signal set.
//!
//! ## Determinism Guarantees
//!
//! - Top-level record order is registration order, never sorted
//! - Object keys serialize in the order each collector inserted them
//!   (`serde_json` with `preserve_order`)
//! - Unavailable signals always serialize as `value: null`
//! - Unset optional fields are omitted, not serialized as `null`
//!
//! ## What Is NOT Included
//!
//! Fields listed in [`EXCLUDED_FIELDS`] are cleared before serialization.
//! Currently that is only the runtime dark-mode flag: its state flips with
//! time of day and desktop theme, which would make the identifier unstable
//! across calls on the same machine. Nothing else is silently dropped; any
//! new exclusion must be added to the table.

use crate::types::SignalRecord;
use serde_json::Value;

/// Volatile `(signal name, field key)` pairs cleared from the canonical form.
pub const EXCLUDED_FIELDS: &[(&str, &str)] = &[(
    crate::collectors::runtime::NAME,
    crate::collectors::runtime::DARK_MODE_FIELD,
)];

/// Serialize the ordered signal set into its canonical string form.
///
/// The output feeds the byte encoder and then the identity hash. Two signal
/// sets that differ only in excluded fields canonicalize identically.
pub fn canonical_form(signals: &[SignalRecord]) -> Result<String, serde_json::Error> {
    let mut stable: Vec<SignalRecord> = signals.to_vec();
    for record in &mut stable {
        for &(signal, field) in EXCLUDED_FIELDS {
            if record.name == signal {
                if let Value::Object(map) = &mut record.value {
                    // shift_remove keeps the remaining keys in insertion order
                    map.shift_remove(field);
                }
            }
        }
    }
    serde_json::to_string(&stable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_determinism() {
        let signals = vec![
            SignalRecord::available("zone", json!({"offset_seconds": 19800})),
            SignalRecord::unavailable("battery"),
        ];
        assert_eq!(
            canonical_form(&signals).unwrap(),
            canonical_form(&signals).unwrap()
        );
    }

    #[test]
    fn test_record_order_is_preserved() {
        let a = SignalRecord::available("alpha", json!(1));
        let b = SignalRecord::available("beta", json!(2));

        let forward = canonical_form(&[a.clone(), b.clone()]).unwrap();
        let reversed = canonical_form(&[b, a]).unwrap();
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_key_insertion_order_is_preserved() {
        // preserve_order keeps map keys as inserted, not alphabetized
        let record = SignalRecord::available("device", json!({"os": "linux", "arch": "x86_64"}));
        let canonical = canonical_form(&[record]).unwrap();
        let os_pos = canonical.find("\"os\"").unwrap();
        let arch_pos = canonical.find("\"arch\"").unwrap();
        assert!(os_pos < arch_pos);
    }

    #[test]
    fn test_dark_mode_is_cleared() {
        let light = SignalRecord::available(
            crate::collectors::runtime::NAME,
            json!({"family": "unix", "dark_mode": false}),
        );
        let dark = SignalRecord::available(
            crate::collectors::runtime::NAME,
            json!({"family": "unix", "dark_mode": true}),
        );

        let c1 = canonical_form(&[light]).unwrap();
        let c2 = canonical_form(&[dark]).unwrap();
        assert_eq!(c1, c2);
        assert!(!c1.contains("dark_mode"));
    }

    #[test]
    fn test_dark_mode_in_other_signal_is_kept() {
        // The exclusion is scoped to the runtime record, not a global key ban
        let record = SignalRecord::available("display", json!({"dark_mode": true}));
        let canonical = canonical_form(&[record]).unwrap();
        assert!(canonical.contains("dark_mode"));
    }

    #[test]
    fn test_input_records_not_mutated() {
        let signals = vec![SignalRecord::available(
            crate::collectors::runtime::NAME,
            json!({"dark_mode": true}),
        )];
        let _ = canonical_form(&signals).unwrap();
        assert_eq!(signals[0].value, json!({"dark_mode": true}));
    }

    #[test]
    fn test_unavailable_serializes_as_null_value() {
        let canonical = canonical_form(&[SignalRecord::unavailable("battery")]).unwrap();
        assert!(canonical.contains("\"value\":null"));
        assert!(canonical.contains("\"available\":false"));
    }
}
