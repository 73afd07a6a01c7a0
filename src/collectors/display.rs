//! Display signal: which display server, if any, this process can reach.

use async_trait::async_trait;
use serde_json::json;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::types::Probe;

/// Signal key for the display collector.
pub const NAME: &str = "display";

/// Probes the Wayland and X11 connection variables. Unavailable on headless
/// hosts, which exercises the registry's unavailability path in production.
pub struct DisplayCollector;

#[async_trait]
impl Collector for DisplayCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, cx: &ProbeContext) -> Result<Probe, CollectError> {
        if let Some(wayland) = cx.env("WAYLAND_DISPLAY") {
            return Ok(Probe::Available(json!({
                "server": "wayland",
                "display": wayland,
            })));
        }
        if let Some(x11) = cx.env("DISPLAY") {
            return Ok(Probe::Available(json!({
                "server": "x11",
                "display": x11,
            })));
        }
        Ok(Probe::unavailable("no display server"))
    }
}
