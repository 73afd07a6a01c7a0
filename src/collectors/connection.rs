//! Network connection signal: interface inventory.

use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::types::Probe;

/// Signal key for the connection collector.
pub const NAME: &str = "connection";

const SYSFS_ROOT: &str = "/sys/class/net";

/// Enumerates network interfaces (excluding loopback) with their link state
/// and whether they are wireless.
pub struct ConnectionCollector;

#[async_trait]
impl Collector for ConnectionCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
        let root = Path::new(SYSFS_ROOT);
        if !root.is_dir() {
            return Ok(Probe::unavailable("interface listing not present"));
        }

        let mut names: Vec<String> = fs::read_dir(root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| name != "lo")
            .collect();
        names.sort();

        let interfaces: Vec<_> = names
            .iter()
            .map(|name| {
                let iface = root.join(name);
                let state = fs::read_to_string(iface.join("operstate"))
                    .map(|raw| raw.trim().to_string())
                    .unwrap_or_else(|_| "unknown".to_string());
                json!({
                    "name": name,
                    "state": state,
                    "wireless": iface.join("wireless").is_dir(),
                })
            })
            .collect();

        Ok(Probe::Available(json!({
            "interface_count": interfaces.len(),
            "interfaces": interfaces,
        })))
    }
}
