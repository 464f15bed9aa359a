//! JSON-LD structured data for search engines.

use serde_json::{json, Value};

/// The `WebSite` structured-data block injected into the document head.
#[derive(Debug, Clone)]
pub struct StructuredData {
    pub name: String,
    pub url: String,
    pub description: String,
    /// Search URL template for the `SearchAction`; `{search_term_string}`
    /// is the placeholder schema.org expects.
    pub search_target: String,
    /// Social profile URLs for `sameAs`, once they exist.
    pub same_as: Vec<String>,
}

impl StructuredData {
    /// The site's `WebSite` block.
    pub fn web_site() -> Self {
        Self {
            name: "The Meme Lore".to_string(),
            url: "https://thememelore.com".to_string(),
            description: "The most comprehensive library of internet culture.".to_string(),
            search_target: "https://thememelore.com/search?q={search_term_string}".to_string(),
            same_as: Vec::new(),
        }
    }

    /// Build the JSON-LD value.
    pub fn to_value(&self) -> Value {
        json!({
            "@context": "https://schema.org",
            "@type": "WebSite",
            "name": self.name,
            "url": self.url,
            "description": self.description,
            "potentialAction": {
                "@type": "SearchAction",
                "target": self.search_target,
                "query-input": "required name=search_term_string",
            },
            "sameAs": self.same_as,
        })
    }

    /// Serialize for a `<script type="application/ld+json">` tag.
    pub fn to_script_json(&self) -> String {
        self.to_value().to_string()
    }
}
