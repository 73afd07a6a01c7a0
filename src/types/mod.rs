//! Core types for the sense kernel.

pub mod fingerprint;
pub mod signal;

pub use fingerprint::{Fingerprint, FingerprintId};
pub use signal::{Probe, SignalRecord};
