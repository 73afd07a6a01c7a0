//! Media hardware signal: capture and audio device enumeration.

use async_trait::async_trait;
use serde_json::json;
use std::fs;
use std::path::Path;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::signature::signature_hash;
use crate::types::Probe;

/// Signal key for the media collector.
pub const NAME: &str = "media";

/// Enumerates video capture nodes (`/dev/video*`) and the sound subsystem
/// (`/dev/snd`). Each hardware class carries a signature hash of its device
/// list for quick comparison.
pub struct MediaCollector;

#[async_trait]
impl Collector for MediaCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, _cx: &ProbeContext) -> Result<Probe, CollectError> {
        let dev = Path::new("/dev");
        if !dev.is_dir() {
            return Ok(Probe::unavailable("device tree not present"));
        }

        let video = sorted_names(dev, |name| name.starts_with("video"))?;
        let audio = match fs::metadata("/dev/snd") {
            Ok(meta) if meta.is_dir() => sorted_names(Path::new("/dev/snd"), |_| true)?,
            _ => Vec::new(),
        };

        Ok(Probe::Available(json!({
            "can_enumerate": true,
            "video": hardware_class(video),
            "audio": hardware_class(audio),
        })))
    }
}

fn hardware_class(devices: Vec<String>) -> serde_json::Value {
    json!({
        "present": !devices.is_empty(),
        "hash": signature_hash(&devices.join(",")),
        "devices": devices,
    })
}

fn sorted_names(root: &Path, keep: impl Fn(&str) -> bool) -> std::io::Result<Vec<String>> {
    let mut names: Vec<String> = fs::read_dir(root)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| keep(name))
        .collect();
    // read_dir order is filesystem-dependent; sort for a stable payload
    names.sort();
    Ok(names)
}
