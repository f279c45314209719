//! Site metadata and theme settings.

use serde::Serialize;
use serde_json::{Map, Value};

/// Locale used when neither `locale` nor `lang` is set.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Top-level site metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Locale code (e.g., "en-US", "zh-CN").
    pub locale: String,

    /// Deploy base path, always starting and ending with `/`.
    pub base: String,

    /// Extra elements injected into `<head>`, in authored order.
    pub head_tags: Vec<HeadTag>,

    /// Unknown top-level fields, passed through untouched.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            locale: DEFAULT_LOCALE.into(),
            base: "/".into(),
            head_tags: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// A single `<head>` element: `[tag, { attrs }, content?]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadTag {
    pub tag: String,

    /// Attributes in authored order. Valueless attributes carry an empty string.
    pub attrs: Vec<(String, String)>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl HeadTag {
    /// Look up an attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Theme-level settings that sit next to `nav` and `sidebar`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Title shown in the nav bar, overriding the site title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_title: Option<String>,

    /// Logo path shown next to the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    /// Unknown theme fields (search providers, social links, ...).
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_defaults() {
        let site = SiteConfig::default();
        assert_eq!(site.title, "");
        assert_eq!(site.description, "");
        assert_eq!(site.locale, "en-US");
        assert_eq!(site.base, "/");
        assert!(site.head_tags.is_empty());
    }

    #[test]
    fn test_head_tag_attr() {
        let tag = HeadTag {
            tag: "link".into(),
            attrs: vec![
                ("rel".into(), "icon".into()),
                ("href".into(), "/favicon.ico".into()),
            ],
            content: None,
        };
        assert_eq!(tag.attr("rel"), Some("icon"));
        assert_eq!(tag.attr("href"), Some("/favicon.ico"));
        assert_eq!(tag.attr("type"), None);
    }
}
