//! Web-app manifest model.

use serde::Serialize;

/// An icon entry in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// The `manifest.webmanifest` document.
#[derive(Debug, Clone, Serialize)]
pub struct WebManifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub display: String,
    pub background_color: String,
    pub theme_color: String,
    pub icons: Vec<ManifestIcon>,
}

impl Default for WebManifest {
    fn default() -> Self {
        Self {
            name: "The Meme Lore".to_string(),
            short_name: "Meme Lore".to_string(),
            description: "The Archive of Internet Culture".to_string(),
            start_url: "/".to_string(),
            display: "standalone".to_string(),
            background_color: "#000000".to_string(),
            theme_color: "#000000".to_string(),
            icons: vec![ManifestIcon {
                src: "/favicon.ico".to_string(),
                sizes: "any".to_string(),
                mime_type: "image/x-icon".to_string(),
            }],
        }
    }
}

impl WebManifest {
    /// Serialize to the manifest file body.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
