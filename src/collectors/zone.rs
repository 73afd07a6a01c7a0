//! Timezone signal.
//!
//! Reports only the offset and zone name. Wall-clock timestamps are
//! deliberately not part of the payload: every signal feeds the identity
//! hash, and a timestamp would change the identifier on every call.

use async_trait::async_trait;
use chrono::{Local, Offset};
use serde_json::json;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::types::Probe;

/// Signal key for the timezone collector.
pub const NAME: &str = "zone";

/// Reports the host's UTC offset and configured zone name.
pub struct ZoneCollector;

#[async_trait]
impl Collector for ZoneCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, cx: &ProbeContext) -> Result<Probe, CollectError> {
        let offset_seconds = Local::now().offset().fix().local_minus_utc();

        Ok(Probe::Available(json!({
            "zone": cx.env("TZ"),
            "utc_offset": format_offset(offset_seconds),
            "offset_seconds": offset_seconds,
        })))
    }
}

/// Render an offset in seconds as `±HH:MM`.
fn format_offset(seconds: i32) -> String {
    let sign = if seconds < 0 { '-' } else { '+' };
    let abs = seconds.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 3600, (abs % 3600) / 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(0), "+00:00");
        assert_eq!(format_offset(19800), "+05:30");
        assert_eq!(format_offset(-18000), "-05:00");
        assert_eq!(format_offset(3600), "+01:00");
        assert_eq!(format_offset(-2_700), "-00:45");
    }
}
