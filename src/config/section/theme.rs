//! `themeConfig` settings other than `nav` and `sidebar`.

use super::raw::{self, Table};
use crate::config::{ConfigError, FieldPath};
use crate::model::ThemeConfig;

const KNOWN: &[&str] = &["siteTitle", "logo", "nav", "sidebar"];

pub(super) fn normalize_theme(table: &Table, path: &FieldPath) -> Result<ThemeConfig, ConfigError> {
    Ok(ThemeConfig {
        site_title: raw::opt_string(table, "siteTitle", path)?,
        logo: raw::opt_string(table, "logo", path)?,
        extra: raw::extra_fields(table, KNOWN),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_theme_fields() {
        let value = json!({
            "siteTitle": "rookieX",
            "logo": "/logo.jpg",
            "algolia": { "appId": "x", "indexName": "docs" },
            "nav": []
        });
        let theme = normalize_theme(value.as_object().unwrap(), &FieldPath::root()).unwrap();
        assert_eq!(theme.site_title.as_deref(), Some("rookieX"));
        assert_eq!(theme.logo.as_deref(), Some("/logo.jpg"));
        assert_eq!(theme.extra.len(), 1);
        assert_eq!(theme.extra["algolia"]["indexName"], json!("docs"));
    }

    #[test]
    fn test_logo_must_be_string() {
        let value = json!({ "logo": { "light": "/l.png" } });
        let path = FieldPath::root().key("themeConfig");
        let err = normalize_theme(value.as_object().unwrap(), &path).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "themeConfig.logo");
    }
}
