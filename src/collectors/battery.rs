//! Battery signal: charging state and charge level.

use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::types::Probe;

/// Signal key for the battery collector.
pub const NAME: &str = "battery";

const SYSFS_ROOT: &str = "/sys/class/power_supply";

/// Reads the first battery under the power-supply sysfs interface.
/// Unavailable on hosts without that interface or without a battery.
pub struct BatteryCollector;

#[async_trait]
impl Collector for BatteryCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
        let root = Path::new(SYSFS_ROOT);
        if !root.is_dir() {
            return Ok(Probe::unavailable("power supply interface not present"));
        }

        let mut supplies: Vec<_> = fs::read_dir(root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .collect();
        supplies.sort();

        for supply in supplies {
            let kind = read_trimmed(&supply.join("type")).unwrap_or_default();
            if kind != "Battery" {
                continue;
            }

            let status = read_trimmed(&supply.join("status")).unwrap_or_else(|_| "Unknown".into());
            let level = read_trimmed(&supply.join("capacity"))
                .ok()
                .and_then(|raw| raw.parse::<f64>().ok())
                .map(|percent| percent / 100.0);

            return Ok(Probe::Available(json!({
                "charging": status == "Charging" || status == "Full",
                "status": status,
                "level": level,
            })));
        }

        Ok(Probe::unavailable("no battery present"))
    }
}

fn read_trimmed(path: &Path) -> std::io::Result<String> {
    Ok(fs::read_to_string(path)?.trim().to_string())
}
