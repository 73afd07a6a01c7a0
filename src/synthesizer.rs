//! Fingerprint synthesizer.
//!
//! Top-level orchestrator: runs the collector registry, canonicalizes the
//! aggregate signal set, encodes it, and hashes it into the identifier.
//!
//! ## Failure contract
//!
//! Per-signal failures degrade individual records to unavailable inside the
//! registry. A failure in the aggregation/hash pipeline itself degrades the
//! whole result to `None`: the synthesizer fails closed rather than
//! throwing.

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::canonical::canonical_form;
use crate::collectors::default_collectors;
use crate::encode::encode;
use crate::identity::identity_hash;
use crate::registry::{CollectorRegistry, ProbeContext};
use crate::types::{Fingerprint, FingerprintId, SignalRecord};

/// Seed for the identity hash of the canonical form.
const IDENTITY_SEED: u32 = 0;

/// Configuration for one synthesis call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Whether the geolocation collector may probe live position sources.
    /// When false it short-circuits to an unavailable placeholder.
    pub allow_geolocation: bool,
}

/// Error type for the orchestration stage.
///
/// Never surfaced to callers; converted to a `None` result at the public
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    /// The aggregate signal set could not be canonicalized.
    #[error("canonicalization failed: {0}")]
    Canonicalize(#[from] serde_json::Error),
}

/// Orchestrator owning the collector registry.
pub struct FingerprintSynthesizer {
    registry: CollectorRegistry,
}

impl FingerprintSynthesizer {
    /// Synthesizer over the default fixed collector set.
    pub fn new() -> Self {
        Self {
            registry: CollectorRegistry::new(default_collectors()),
        }
    }

    /// Synthesizer over a caller-supplied registry.
    pub fn with_registry(registry: CollectorRegistry) -> Self {
        Self { registry }
    }

    /// Run one synthesis pass.
    ///
    /// Returns the fingerprint result, or `None` if the aggregation pipeline
    /// itself failed after collection.
    pub async fn synthesize(&self, config: SynthesisConfig) -> Option<Fingerprint> {
        let cx = ProbeContext::new(config);
        let signals = self.registry.collect(&cx).await;
        self.assemble(signals)
    }

    /// Like [`synthesize`](Self::synthesize), with an explicit context
    /// (tests, embedding hosts that pin the environment).
    pub async fn synthesize_with_context(&self, cx: &ProbeContext) -> Option<Fingerprint> {
        let signals = self.registry.collect(cx).await;
        self.assemble(signals)
    }

    fn assemble(&self, signals: Vec<SignalRecord>) -> Option<Fingerprint> {
        match derive_id(&signals) {
            Ok(id) => Some(Fingerprint {
                signals,
                id,
                score: crate::CONFIDENCE_SCORE,
            }),
            Err(err) => {
                error!(error = %err, "fingerprint synthesis failed");
                None
            }
        }
    }
}

impl Default for FingerprintSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonicalize, encode, and hash an aggregate signal set.
pub(crate) fn derive_id(signals: &[SignalRecord]) -> Result<FingerprintId, SynthesisError> {
    let canonical = canonical_form(signals)?;
    let bytes = encode(&canonical);
    Ok(FingerprintId::new(identity_hash(&bytes, IDENTITY_SEED)))
}

/// Synthesize a fingerprint over the default collector set.
///
/// This is the library entry point; equivalent to
/// `FingerprintSynthesizer::new().synthesize(config)`.
pub async fn synthesize(config: SynthesisConfig) -> Option<Fingerprint> {
    FingerprintSynthesizer::new().synthesize(config).await
}
