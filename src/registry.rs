//! Collector registry.
//!
//! The registry owns the ordered collector list and is the sole writer of
//! the aggregate signal set. Each collector runs exactly once per synthesis
//! call; its outcome is converted into a [`SignalRecord`] slot written in
//! declaration order, regardless of how long the collector suspends. A
//! failing collector degrades its own slot and nothing else.

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::synthesizer::SynthesisConfig;
use crate::types::{Probe, SignalRecord};

/// Error type for signal collection.
///
/// These never cross the registry boundary: the registry converts them into
/// `available: false` records with the description attached.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    /// Probing the capability hit an I/O error.
    #[error("probe i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The capability produced data the collector could not interpret.
    #[error("malformed probe data: {0}")]
    Malformed(String),
}

/// Per-call context passed to every collector.
///
/// Replaces process-wide caches: the context is built when synthesis starts
/// and dropped when it returns. It snapshots the process environment once so
/// all collectors observe the same variables within a run.
#[derive(Debug)]
pub struct ProbeContext {
    config: SynthesisConfig,
    env: HashMap<String, String>,
}

impl ProbeContext {
    /// Build a context for one synthesis call, snapshotting the environment.
    /// Variables that are not valid Unicode are skipped rather than panicking.
    pub fn new(config: SynthesisConfig) -> Self {
        let env = std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { config, env }
    }

    /// Build a context with an explicit environment (tests, embedding hosts).
    pub fn with_env(config: SynthesisConfig, env: HashMap<String, String>) -> Self {
        Self { config, env }
    }

    /// The configuration for this synthesis call.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Look up a snapshotted environment variable.
    pub fn env(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// First set variable among `keys`, in order.
    pub fn env_first(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|k| self.env(k))
    }
}

/// One unit of signal-producing logic.
///
/// Implementations report graceful unavailability as
/// [`Probe::Unavailable`] and genuine probe failures as `Err`; they must not
/// panic. The registry depends on nothing else about a collector's output;
/// payloads are forwarded opaquely.
#[async_trait]
pub trait Collector: Send + Sync {
    /// Stable signal key; unique within a registry.
    fn name(&self) -> &'static str;

    /// Probe the environment and produce this collector's signal.
    async fn collect(&self, cx: &ProbeContext) -> Result<Probe, CollectError>;
}

/// Ordered collector set; invocation order is declaration order and is part
/// of the canonical form.
pub struct CollectorRegistry {
    collectors: Vec<Box<dyn Collector>>,
}

impl CollectorRegistry {
    /// Build a registry from an ordered collector list.
    pub fn new(collectors: Vec<Box<dyn Collector>>) -> Self {
        Self { collectors }
    }

    /// Number of registered collectors.
    pub fn len(&self) -> usize {
        self.collectors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.collectors.is_empty()
    }

    /// Run every collector once and assemble the aggregate signal set.
    ///
    /// Always returns exactly one record per registered collector, in
    /// declaration order. Collector errors are converted into failed records
    /// here and never propagate further.
    pub async fn collect(&self, cx: &ProbeContext) -> Vec<SignalRecord> {
        let mut signals = Vec::with_capacity(self.collectors.len());

        for collector in &self.collectors {
            let name = collector.name();
            let record = match collector.collect(cx).await {
                Ok(Probe::Available(value)) => SignalRecord::available(name, value),
                Ok(Probe::Unavailable(reason)) => {
                    debug!(signal = name, %reason, "capability not present");
                    SignalRecord::unavailable(name)
                }
                Err(err) => {
                    warn!(signal = name, error = %err, "signal collection failed");
                    SignalRecord::failed(name, err.to_string())
                }
            };
            signals.push(record);
        }

        signals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    struct FixedCollector {
        name: &'static str,
        value: Value,
    }

    #[async_trait]
    impl Collector for FixedCollector {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
            Ok(Probe::Available(self.value.clone()))
        }
    }

    struct FailingCollector;

    #[async_trait]
    impl Collector for FailingCollector {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
            Err(CollectError::Malformed("synthetic failure".to_string()))
        }
    }

    struct MissingCapability;

    #[async_trait]
    impl Collector for MissingCapability {
        fn name(&self) -> &'static str {
            "missing"
        }

        async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
            Ok(Probe::unavailable("api not present"))
        }
    }

    fn test_context() -> ProbeContext {
        ProbeContext::with_env(SynthesisConfig::default(), HashMap::new())
    }

    #[tokio::test]
    async fn test_records_match_declaration_order() {
        let registry = CollectorRegistry::new(vec![
            Box::new(FixedCollector { name: "b", value: json!(2) }),
            Box::new(FixedCollector { name: "a", value: json!(1) }),
            Box::new(FixedCollector { name: "c", value: json!(3) }),
        ]);

        let signals = registry.collect(&test_context()).await;
        let names: Vec<&str> = signals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn test_failure_is_isolated() {
        let registry = CollectorRegistry::new(vec![
            Box::new(FixedCollector { name: "first", value: json!("ok") }),
            Box::new(FailingCollector),
            Box::new(FixedCollector { name: "last", value: json!("ok") }),
        ]);

        let signals = registry.collect(&test_context()).await;
        assert_eq!(signals.len(), 3);
        assert!(signals[0].available);
        assert!(!signals[1].available);
        assert_eq!(
            signals[1].error.as_deref(),
            Some("malformed probe data: synthetic failure")
        );
        assert!(signals[2].available);
    }

    #[tokio::test]
    async fn test_unavailable_has_no_error() {
        let registry = CollectorRegistry::new(vec![Box::new(MissingCapability)]);
        let signals = registry.collect(&test_context()).await;
        assert!(!signals[0].available);
        assert_eq!(signals[0].value, Value::Null);
        assert!(signals[0].error.is_none());
    }

    #[tokio::test]
    async fn test_empty_registry() {
        let registry = CollectorRegistry::new(vec![]);
        assert!(registry.is_empty());
        assert!(registry.collect(&test_context()).await.is_empty());
    }

    #[test]
    fn test_context_env_snapshot() {
        let mut env = HashMap::new();
        env.insert("LANG".to_string(), "en_US.UTF-8".to_string());
        let cx = ProbeContext::with_env(SynthesisConfig::default(), env);
        assert_eq!(cx.env("LANG"), Some("en_US.UTF-8"));
        assert_eq!(cx.env("MISSING"), None);
        assert_eq!(cx.env_first(&["MISSING", "LANG"]), Some("en_US.UTF-8"));
    }
}
