//! Site metadata, link-preview cards, and robots directives.

/// Core document metadata for the site.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    /// Site name used for attribution fields.
    pub site_name: String,
    /// Title used when no page-specific title is given.
    pub default_title: String,
    /// Template applied to page-specific titles; `%s` is the page title.
    pub title_template: String,
    /// Meta description.
    pub description: String,
    /// Keyword list, rendered comma-separated.
    pub keywords: Vec<String>,
    /// Absolute base URL of the deployed site.
    pub base_url: String,
    /// Canonical URL of the landing page.
    pub canonical_url: String,
    /// Theme color for the browser chrome.
    pub theme_color: String,
    /// Author names for the `author` meta tag.
    pub authors: Vec<String>,
    /// Creator and publisher attribution.
    pub creator: String,
    pub publisher: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            site_name: "The Meme Lore".to_string(),
            default_title: "The Meme Lore - Archive of Internet Culture".to_string(),
            title_template: "%s | The Meme Lore".to_string(),
            description: "The most comprehensive library of internet culture. Explore the \
                          history, meaning, and evolution of memes from their origins to \
                          modern day viral sensations."
                .to_string(),
            keywords: vec![
                "memes".to_string(),
                "internet culture".to_string(),
                "meme history".to_string(),
                "viral trends".to_string(),
                "internet archive".to_string(),
                "meme encyclopedia".to_string(),
                "digital culture".to_string(),
            ],
            base_url: "https://thememelore.com".to_string(),
            canonical_url: "https://thememelore.com/".to_string(),
            theme_color: "#000000".to_string(),
            authors: vec!["The Meme Lore Team".to_string()],
            creator: "The Meme Lore".to_string(),
            publisher: "The Meme Lore".to_string(),
        }
    }
}

impl SiteMeta {
    /// Render a page title through the template, or fall back to the
    /// default title for the root page.
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            self.default_title.clone()
        } else {
            self.title_template.replace("%s", page)
        }
    }

    /// Keyword list as a `<meta name="keywords">` content string.
    pub fn keywords_content(&self) -> String {
        self.keywords.join(", ")
    }

    /// Author list as a `<meta name="author">` content string.
    pub fn authors_content(&self) -> String {
        self.authors.join(", ")
    }
}

/// Open Graph link-preview data.
#[derive(Debug, Clone)]
pub struct OpenGraphCard {
    pub kind: String,
    pub locale: String,
    pub url: String,
    pub title: String,
    pub description: String,
    pub site_name: String,
}

impl Default for OpenGraphCard {
    fn default() -> Self {
        Self {
            kind: "website".to_string(),
            locale: "en_US".to_string(),
            url: "https://thememelore.com".to_string(),
            title: "The Meme Lore - Archive of Internet Culture".to_string(),
            description: "Join the waitlist for the most comprehensive library of internet \
                          culture. Explore the history, meaning, and evolution of memes."
                .to_string(),
            site_name: "The Meme Lore".to_string(),
        }
    }
}

/// Twitter card link-preview data.
#[derive(Debug, Clone)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
}

impl Default for TwitterCard {
    fn default() -> Self {
        Self {
            card: "summary_large_image".to_string(),
            title: "The Meme Lore - Archive of Internet Culture".to_string(),
            description: "The archive is opening soon. Join us to explore the history and \
                          meaning behind internet culture."
                .to_string(),
        }
    }
}

/// Crawler directives rendered into `robots` and `googlebot` meta tags.
#[derive(Debug, Clone)]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
    /// Googlebot-specific extensions appended to the base directives.
    pub googlebot_extensions: Vec<String>,
}

impl Default for RobotsDirectives {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            googlebot_extensions: vec![
                "max-video-preview:-1".to_string(),
                "max-image-preview:large".to_string(),
                "max-snippet:-1".to_string(),
            ],
        }
    }
}

impl RobotsDirectives {
    /// Content string for `<meta name="robots">`.
    pub fn content(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index}, {follow}")
    }

    /// Content string for `<meta name="googlebot">`.
    pub fn googlebot_content(&self) -> String {
        let mut parts = vec![self.content()];
        parts.extend(self.googlebot_extensions.iter().cloned());
        parts.join(", ")
    }

    /// Body of a permissive `robots.txt` for the deployed site.
    pub fn robots_txt(&self) -> String {
        let rule = if self.index { "Allow: /" } else { "Disallow: /" };
        format!("User-agent: *\n{rule}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Title Tests ===

    #[test]
    fn test_page_title_applies_template() {
        let meta = SiteMeta::default();
        assert_eq!(meta.page_title("About"), "About | The Meme Lore");
    }

    #[test]
    fn test_page_title_root_uses_default() {
        let meta = SiteMeta::default();
        assert_eq!(
            meta.page_title(""),
            "The Meme Lore - Archive of Internet Culture"
        );
    }

    #[test]
    fn test_keywords_content_comma_separated() {
        let meta = SiteMeta::default();
        let content = meta.keywords_content();
        assert!(content.starts_with("memes, internet culture"));
        assert!(content.ends_with("digital culture"));
    }

    #[test]
    fn test_authors_distinct_from_creator() {
        let meta = SiteMeta::default();
        assert_eq!(meta.authors_content(), "The Meme Lore Team");
        assert_eq!(meta.creator, "The Meme Lore");
        assert_eq!(meta.publisher, "The Meme Lore");
    }

    // === Robots Tests ===

    #[test]
    fn test_robots_content() {
        assert_eq!(RobotsDirectives::default().content(), "index, follow");

        let blocked = RobotsDirectives {
            index: false,
            follow: false,
            googlebot_extensions: vec![],
        };
        assert_eq!(blocked.content(), "noindex, nofollow");
    }

    #[test]
    fn test_googlebot_content_includes_extensions() {
        let content = RobotsDirectives::default().googlebot_content();
        assert_eq!(
            content,
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1"
        );
    }

    #[test]
    fn test_robots_txt_permissive() {
        let body = RobotsDirectives::default().robots_txt();
        assert_eq!(body, "User-agent: *\nAllow: /\n");
    }

    // === Card Tests ===

    #[test]
    fn test_open_graph_defaults() {
        let og = OpenGraphCard::default();
        assert_eq!(og.kind, "website");
        assert_eq!(og.locale, "en_US");
        assert_eq!(og.site_name, "The Meme Lore");
    }

    #[test]
    fn test_twitter_card_is_large_summary() {
        assert_eq!(TwitterCard::default().card, "summary_large_image");
    }
}
