//! Application Configuration
//!
//! Defaults match the backend deployment; the host page may override them
//! with `<meta>` tags.

use wasm_bindgen::JsCast;

pub const DEFAULT_API_BASE: &str = "/api/todos";
pub const DEFAULT_NOTIFICATION_MS: u32 = 3000;

const META_API_BASE: &str = "todo-api-base";
const META_NOTIFICATION_MS: &str = "todo-notification-ms";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Collection URL, without trailing slash
    pub api_base: String,
    /// How long a notification stays visible
    pub notification_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            notification_ms: DEFAULT_NOTIFICATION_MS,
        }
    }
}

impl AppConfig {
    /// Apply raw override values; anything empty or unparsable keeps the default.
    pub fn with_overrides(mut self, api_base: Option<&str>, notification_ms: Option<&str>) -> Self {
        if let Some(base) = api_base.map(|b| b.trim().trim_end_matches('/')).filter(|b| !b.is_empty()) {
            self.api_base = base.to_string();
        }
        if let Some(ms) = notification_ms.and_then(|v| v.trim().parse::<u32>().ok()) {
            self.notification_ms = ms;
        }
        self
    }

    /// Read overrides from `<meta name=... content=...>` in the current document.
    pub fn from_document() -> Self {
        let api_base = meta_content(META_API_BASE);
        let notification_ms = meta_content(META_NOTIFICATION_MS);
        Self::default().with_overrides(api_base.as_deref(), notification_ms.as_deref())
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!(r#"meta[name="{}"]"#, name);
    let element = document.query_selector(&selector).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base, "/api/todos");
        assert_eq!(config.notification_ms, 3000);
    }

    #[test]
    fn test_overrides_applied() {
        let config = AppConfig::default().with_overrides(Some("https://example.org/api/todos/"), Some(" 1500 "));
        assert_eq!(config.api_base, "https://example.org/api/todos");
        assert_eq!(config.notification_ms, 1500);
    }

    #[test]
    fn test_invalid_overrides_keep_defaults() {
        let config = AppConfig::default().with_overrides(Some("  "), Some("soon"));
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::default().with_overrides(None, Some("-5"));
        assert_eq!(config, AppConfig::default());
    }
}
