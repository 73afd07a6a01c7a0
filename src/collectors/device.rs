//! Device signal: platform identity of the host.

use async_trait::async_trait;
use serde_json::json;
use std::env::consts;
use std::thread;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::signature::signature_hash;
use crate::types::Probe;

/// Signal key for the device collector.
pub const NAME: &str = "device";

/// Reports the compile-target platform facts plus a diagnostic signature
/// hash over the stable identity fields.
pub struct DeviceCollector;

#[async_trait]
impl Collector for DeviceCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
        let concurrency = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(0);
        let identity = format!("{}/{}/{}", consts::OS, consts::ARCH, consts::FAMILY);

        Ok(Probe::Available(json!({
            "os": consts::OS,
            "arch": consts::ARCH,
            "family": consts::FAMILY,
            "hardware_concurrency": concurrency,
            "device_hash": signature_hash(&identity),
        })))
    }
}
