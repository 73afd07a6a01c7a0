//! Runtime signal: facts about the hosting process and toolchain target.
//!
//! This is the record carrying the dark-mode flag. The flag is collected for
//! diagnostics but excluded from the canonical form (see
//! [`EXCLUDED_FIELDS`](crate::canonical::EXCLUDED_FIELDS)): theme state
//! flips with time of day and user preference on the same machine.

use async_trait::async_trait;
use serde_json::{json, Map, Value};
use std::env::consts;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::signature::signature_hash;
use crate::types::Probe;

/// Signal key for the runtime collector.
pub const NAME: &str = "runtime";

/// Field key of the volatile dark-mode flag inside the runtime payload.
pub const DARK_MODE_FIELD: &str = "dark_mode";

/// Reports toolchain-target facts, a signature hash over them, and the
/// volatile dark-mode flag.
pub struct RuntimeCollector;

#[async_trait]
impl Collector for RuntimeCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, cx: &ProbeContext) -> Result<Probe, CollectError> {
        let stable = json!({
            "runtime": "rust",
            "family": consts::FAMILY,
            "pointer_width": pointer_width(),
            "endian": endianness(),
            "kernel_version": env!("CARGO_PKG_VERSION"),
        });

        let mut payload: Map<String, Value> = stable
            .as_object()
            .cloned()
            .unwrap_or_default();
        payload.insert(
            "runtime_hash".to_string(),
            json!(signature_hash(&stable.to_string())),
        );
        payload.insert(DARK_MODE_FIELD.to_string(), json!(detect_dark_mode(cx)));

        Ok(Probe::Available(Value::Object(payload)))
    }
}

fn pointer_width() -> u32 {
    if cfg!(target_pointer_width = "64") {
        64
    } else if cfg!(target_pointer_width = "32") {
        32
    } else {
        16
    }
}

fn endianness() -> &'static str {
    if cfg!(target_endian = "big") {
        "big"
    } else {
        "little"
    }
}

/// Best-effort dark-theme detection from the desktop environment hints.
fn detect_dark_mode(cx: &ProbeContext) -> bool {
    if let Some(theme) = cx.env("GTK_THEME") {
        if theme.to_ascii_lowercase().contains("dark") {
            return true;
        }
    }
    if let Some(colors) = cx.env("COLORFGBG") {
        // terminal convention: "<fg>;<bg>", low background index means dark
        if let Some(background) = colors.rsplit(';').next() {
            if let Ok(index) = background.parse::<u8>() {
                return index < 8;
            }
        }
    }
    false
}
