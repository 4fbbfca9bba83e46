// Bridge and panel configuration
// Extensions ship no config file; these defaults can be overridden by the
// content-script glue with a JSON object.

use serde::Deserialize;

/// Duration of the `.container` slide transition in `panel.css`.
/// The close sequence waits exactly this long before tearing the iframe down.
pub const SLIDE_DURATION_MS: u32 = 300;

/// Class that drives the slide-in transition on `.container`.
pub const SLIDE_IN_CLASS: &str = "slide-in";

/// Page-level class toggled by the dark mode setting.
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IframeConfig {
    /// Element id of the injected iframe, used to find it again for removal
    pub element_id: String,
    /// Bundled page path, resolved with `chrome.runtime.getURL`
    pub page_path: String,
    pub width: String,
    pub height: String,
    pub z_index: String,
}

impl Default for IframeConfig {
    fn default() -> Self {
        Self {
            element_id: "extension-iframe".to_string(),
            page_path: "panel/index.html".to_string(),
            width: "470px".to_string(),
            height: "100vh".to_string(),
            // Maximum 32-bit z-index
            z_index: "2147483647".to_string(),
        }
    }
}

impl IframeConfig {
    /// Parse glue-provided overrides; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Inline style declarations applied to the iframe, in application order.
    pub fn style_properties(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("position", "fixed"),
            ("top", "0"),
            ("right", "0"),
            ("width", self.width.as_str()),
            ("height", self.height.as_str()),
            ("border", "none"),
            ("z-index", self.z_index.as_str()),
            ("background-color", "transparent"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_iframe_geometry() {
        let config = IframeConfig::default();
        assert_eq!(config.element_id, "extension-iframe");
        assert_eq!(config.width, "470px");

        let styles = config.style_properties();
        assert!(styles.contains(&("position", "fixed")));
        assert!(styles.contains(&("z-index", "2147483647")));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = IframeConfig::from_json(r#"{"width":"520px"}"#).unwrap();
        assert_eq!(config.width, "520px");
        assert_eq!(config.page_path, "panel/index.html");
        assert_eq!(config.height, "100vh");
    }

    #[test]
    fn test_malformed_override_is_rejected() {
        assert!(IframeConfig::from_json("[1, 2]").is_err());
    }
}
