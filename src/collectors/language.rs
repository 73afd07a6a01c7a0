//! Language and locale signal, from the standard locale environment.

use async_trait::async_trait;
use serde_json::json;

use crate::registry::{CollectError, Collector, ProbeContext};
use crate::types::Probe;

/// Signal key for the language collector.
pub const NAME: &str = "language";

/// Reads `LC_ALL` / `LC_MESSAGES` / `LANG` (in precedence order) plus the
/// `LANGUAGE` fallback list.
pub struct LanguageCollector;

#[async_trait]
impl Collector for LanguageCollector {
    fn name(&self) -> &'static str {
        NAME
    }

    async fn collect(&self, cx: &ProbeContext) -> Result<Probe, CollectError> {
        let Some(locale) = cx.env_first(&["LC_ALL", "LC_MESSAGES", "LANG"]) else {
            return Ok(Probe::unavailable("no locale variables set"));
        };

        let all_languages: Vec<String> = cx
            .env("LANGUAGE")
            .map(|list| {
                list.split(':')
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Probe::Available(json!({
            "primary_language": primary_tag(locale),
            "all_languages": all_languages,
            "locale": locale,
        })))
    }
}

/// Reduce a locale string like `en_US.UTF-8` to the BCP 47-style tag `en-US`.
fn primary_tag(locale: &str) -> String {
    let base = locale.split('.').next().unwrap_or(locale);
    base.replace('_', "-")
}
