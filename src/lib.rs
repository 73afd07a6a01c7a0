//! # sense-kernel
//!
//! Deterministic aggregation of environment signals into a stable identifier.
//!
//! The kernel answers one question:
//!
//! > Given whatever signals this environment can produce, what is its
//! > **reproducible fingerprint**?
//!
//! ## Core Contract
//!
//! 1. Invoke every registered collector exactly once, in declaration order
//! 2. Convert each outcome into an immutable [`SignalRecord`], isolating failures
//! 3. Canonicalize the ordered record set, encode it, and hash it into a
//!    128-bit identifier
//!
//! ## Architecture
//!
//! ```text
//! Collectors → CollectorRegistry → Canonicalizer → Byte Encoder → Identity Hash
//!                     ↓                                                ↓
//!               ProbeContext                                  Fingerprint { id }
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Same signal values + same registration order → identical `id`
//! - Object keys serialize in insertion order, never sorted
//! - The volatile dark-mode flag is excluded from the canonical form
//! - No collector failure aborts the batch; no retry within a run

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod types;
pub mod encode;
pub mod signature;
pub mod identity;
pub mod canonical;
pub mod registry;
pub mod collectors;
pub mod synthesizer;

// Re-exports
pub use types::{Fingerprint, FingerprintId, Probe, SignalRecord};
pub use encode::encode;
pub use signature::signature_hash;
pub use identity::identity_hash;
pub use canonical::{canonical_form, EXCLUDED_FIELDS};
pub use registry::{CollectError, Collector, CollectorRegistry, ProbeContext};
pub use collectors::default_collectors;
pub use synthesizer::{synthesize, FingerprintSynthesizer, SynthesisConfig};

/// Schema version for the canonical signal encoding.
/// Increment on any change that alters the canonical byte stream.
pub const SENSE_SCHEMA_VERSION: &str = "1.0.0";

/// Fixed confidence score attached to every fingerprint result.
///
/// Reserved placeholder pending a real confidence model; not derived from
/// signal quality.
pub const CONFIDENCE_SCORE: f64 = 0.5;
