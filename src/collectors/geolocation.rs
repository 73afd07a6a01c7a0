//! Geolocation signal, gated by configuration.
//!
//! Position never comes from a live radio on a host; deployments that know
//! their location export it via [`POSITION_ENV`] as `"<lat>,<lon>"`. When
//! `allow_geolocation` is off the collector short-circuits to an unavailable
//! placeholder without reading anything.

use async_trait::async_trait;
use serde_json::json;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::types::Probe;

/// Signal key for the geolocation collector.
pub const NAME: &str = "geolocation";

/// Environment variable carrying an operator-supplied position.
pub const POSITION_ENV: &str = "SENSE_GEOLOCATION";

/// Config-gated position collector.
pub struct GeolocationCollector;

#[async_trait]
impl Collector for GeolocationCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, cx: &ProbeContext) -> Result<Probe, CollectError> {
        if !cx.config().allow_geolocation {
            return Ok(Probe::unavailable("geolocation not permitted"));
        }

        let Some(raw) = cx.env(POSITION_ENV) else {
            return Ok(Probe::unavailable("no position provider"));
        };

        let (latitude, longitude) = parse_position(raw).map_err(CollectError::Malformed)?;
        Ok(Probe::Available(json!({
            "latitude": latitude,
            "longitude": longitude,
            "enabled": true,
        })))
    }
}

fn parse_position(raw: &str) -> Result<(f64, f64), String> {
    let mut parts = raw.splitn(2, ',');
    let latitude: f64 = parts
        .next()
        .map(str::trim)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| format!("bad latitude in {raw:?}"))?;
    let longitude: f64 = parts
        .next()
        .map(str::trim)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| format!("bad longitude in {raw:?}"))?;

    if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
        return Err(format!("position out of range: {raw:?}"));
    }
    Ok((latitude, longitude))
}
