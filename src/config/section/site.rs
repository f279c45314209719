//! Top-level site metadata.
//!
//! ```toml
//! title = "My Docs"
//! description = "Project documentation"
//! lang = "en-US"
//! base = "/docs/"
//! head = [
//!     ["link", { rel = "icon", href = "/favicon.ico" }],
//!     ["script", { src = "/analytics.js", async = true }],
//!     ["style", {}, "body { margin: 0 }"],
//! ]
//! ```

use super::raw::{self, Table};
use crate::config::{ConfigError, FieldPath};
use crate::model::{DEFAULT_LOCALE, HeadTag, SiteConfig};
use serde_json::Value;

/// Fields consumed here; everything else goes to `extra`.
const KNOWN: &[&str] = &[
    "title",
    "description",
    "lang",
    "locale",
    "base",
    "head",
    super::THEME_KEY,
];

const HEAD_TAG_SHAPE: &str = "[tag, attributes] or [tag, attributes, content]";

pub(super) fn normalize_site(root: &Table, path: &FieldPath) -> Result<SiteConfig, ConfigError> {
    let title = raw::opt_string(root, "title", path)?.unwrap_or_default();
    let description = raw::opt_string(root, "description", path)?.unwrap_or_default();

    let lang = raw::opt_string(root, "lang", path)?;
    let locale = raw::opt_string(root, "locale", path)?
        .or(lang)
        .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

    let base = raw::opt_string(root, "base", path)?
        .map(|base| normalize_base(&base))
        .unwrap_or_else(|| "/".to_string());

    let head_tags = match root.get("head") {
        Some(value) => normalize_head(value, &path.key("head"))?,
        None => Vec::new(),
    };

    Ok(SiteConfig {
        title,
        description,
        locale,
        base,
        head_tags,
        extra: raw::extra_fields(root, KNOWN),
    })
}

/// Make a base path start and end with `/`.
///
/// ```text
/// ""        -> "/"
/// "docs"    -> "/docs/"
/// "/guide/" -> "/guide/"
/// ```
pub(super) fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        format!("/{trimmed}/")
    }
}

fn normalize_head(value: &Value, path: &FieldPath) -> Result<Vec<HeadTag>, ConfigError> {
    raw::as_array(value, path)?
        .iter()
        .enumerate()
        .map(|(i, tag)| normalize_head_tag(tag, &path.index(i)))
        .collect()
}

fn normalize_head_tag(value: &Value, path: &FieldPath) -> Result<HeadTag, ConfigError> {
    let parts = raw::as_array(value, path)?;
    if !(2..=3).contains(&parts.len()) {
        return Err(ConfigError::InvalidFieldType {
            path: path.clone(),
            expected: HEAD_TAG_SHAPE,
            found: format!("array of {}", parts.len()),
        });
    }

    let tag = match &parts[0] {
        Value::String(tag) if !tag.trim().is_empty() => tag.clone(),
        other => return Err(raw::invalid(&path.index(0), "non-empty tag name", other)),
    };

    let attrs_path = path.index(1);
    let mut attrs = Vec::new();
    for (name, value) in raw::as_table(&parts[1], &attrs_path)? {
        match value {
            Value::String(s) => attrs.push((name.clone(), s.clone())),
            Value::Number(n) => attrs.push((name.clone(), n.to_string())),
            // Boolean attributes: present when true, omitted when false.
            Value::Bool(true) => attrs.push((name.clone(), String::new())),
            Value::Bool(false) => {}
            other => {
                return Err(raw::invalid(
                    &attrs_path.key(name),
                    "string, number or boolean",
                    other,
                ));
            }
        }
    }

    let content = match parts.get(2) {
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => return Err(raw::invalid(&path.index(2), "string", other)),
        None => None,
    };

    Ok(HeadTag {
        tag,
        attrs,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn site(value: Value) -> Result<SiteConfig, ConfigError> {
        normalize_site(value.as_object().unwrap(), &FieldPath::root())
    }

    #[test]
    fn test_defaults_when_absent() {
        let site = site(json!({})).unwrap();
        assert_eq!(site, SiteConfig::default());
    }

    #[test]
    fn test_locale_aliases() {
        assert_eq!(site(json!({ "lang": "zh-CN" })).unwrap().locale, "zh-CN");
        assert_eq!(site(json!({ "locale": "fr" })).unwrap().locale, "fr");
        assert_eq!(
            site(json!({ "lang": "zh-CN", "locale": "fr" })).unwrap().locale,
            "fr"
        );
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("docs"), "/docs/");
        assert_eq!(normalize_base("/guide/"), "/guide/");
        assert_eq!(normalize_base("/a/b"), "/a/b/");
    }

    #[test]
    fn test_extra_fields_pass_through() {
        let site = site(json!({
            "title": "Docs",
            "cleanUrls": true,
            "markdown": { "lineNumbers": true },
            "themeConfig": {}
        }))
        .unwrap();
        assert_eq!(site.extra.len(), 2);
        assert_eq!(site.extra["cleanUrls"], json!(true));
        assert_eq!(site.extra["markdown"]["lineNumbers"], json!(true));
        assert!(!site.extra.contains_key("themeConfig"));
    }

    #[test]
    fn test_title_wrong_type() {
        let err = site(json!({ "title": 42 })).unwrap_err();
        assert_eq!(err.to_string(), "[title] expected string, found number");
    }

    #[test]
    fn test_head_tags() {
        let site = site(json!({
            "head": [
                ["link", { "rel": "icon", "href": "/favicon.ico" }],
                ["script", { "src": "/a.js", "async": true, "defer": false }],
                ["meta", { "name": "width", "content": 1024 }],
                ["style", {}, "body { margin: 0 }"]
            ]
        }))
        .unwrap();

        let tags = &site.head_tags;
        assert_eq!(tags.len(), 4);
        assert_eq!(tags[0].tag, "link");
        assert_eq!(tags[0].attr("href"), Some("/favicon.ico"));
        assert_eq!(tags[1].attr("async"), Some(""));
        assert_eq!(tags[1].attr("defer"), None);
        assert_eq!(tags[2].attr("content"), Some("1024"));
        assert_eq!(tags[3].content.as_deref(), Some("body { margin: 0 }"));
    }

    #[test]
    fn test_head_tag_bad_shape() {
        let err = site(json!({ "head": [["link"]] })).unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("[head[0]] expected {HEAD_TAG_SHAPE}, found array of 1")
        );

        let err = site(json!({ "head": [["", {}]] })).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "head[0][0]");

        let err = site(json!({ "head": [["link", { "rel": ["icon"] }]] })).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "head[0][1].rel");
    }
}
