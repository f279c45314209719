//! Site configuration loading and normalization.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Normalizer, one module per part of the document
//! │   ├── site       # top-level metadata and head tags
//! │   ├── theme      # themeConfig (siteTitle, logo, extras)
//! │   ├── nav        # themeConfig.nav
//! │   └── sidebar    # themeConfig.sidebar
//! ├── json.rs        # JSON parsing that rejects repeated keys
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError
//! │   ├── field      # FieldPath
//! │   └── handle     # ModelHandle (atomic reload)
//! └── mod.rs         # file loading (this file)
//! ```
//!
//! Config files are TOML (`docnav.toml`) or JSON (`*.json`). Both are parsed
//! into the same raw value tree before normalization, so they accept exactly
//! the same documents. Both reject a key repeated within one table.

mod json;
pub mod section;
pub mod types;
mod util;

pub use section::{DEFAULT_MAX_DEPTH, NormalizeOptions, Normalizer};
pub use types::{ConfigError, FieldPath, ModelHandle};
pub use util::find_config_file;

use crate::model::NavigationModel;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Default config file name.
pub const DEFAULT_CONFIG_NAME: &str = "docnav.toml";

/// Syntax of a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick the format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }
}

/// Parse config text into the raw value tree.
pub fn parse_raw(content: &str, format: ConfigFormat) -> Result<Value, ConfigError> {
    match format {
        ConfigFormat::Toml => Ok(toml::from_str(content)?),
        ConfigFormat::Json => Ok(json::from_str(content)?),
    }
}

/// Read a config file, returning its text and raw value tree.
pub fn read_raw(path: &Path) -> Result<(String, Value), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content =
        fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
    let raw = parse_raw(&content, ConfigFormat::from_path(path))?;
    Ok((content, raw))
}

/// Parse and normalize config text.
pub fn from_str(
    content: &str,
    format: ConfigFormat,
    options: NormalizeOptions,
) -> Result<NavigationModel, ConfigError> {
    let raw = parse_raw(content, format)?;
    Normalizer::new(options).normalize(&raw)
}

/// Load and normalize a config file.
pub fn load(path: &Path, options: NormalizeOptions) -> Result<NavigationModel, ConfigError> {
    load_with_ignored(path, options).map(|(model, _)| model)
}

/// Load and normalize a config file, also returning ignored field paths.
pub fn load_with_ignored(
    path: &Path,
    options: NormalizeOptions,
) -> Result<(NavigationModel, Vec<FieldPath>), ConfigError> {
    let (_, raw) = read_raw(path)?;
    Normalizer::new(options).normalize_with_ignored(&raw)
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Normalize a TOML document with default options.
/// Panics on error, and on unknown fields (to catch typos in tests).
#[cfg(test)]
pub fn test_normalize(content: &str) -> NavigationModel {
    let raw = parse_raw(content, ConfigFormat::Toml).unwrap();
    let (model, ignored) = Normalizer::default().normalize_with_ignored(&raw).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    model
}

/// Normalize a TOML document that is expected to be rejected.
#[cfg(test)]
pub fn test_normalize_err(content: &str) -> ConfigError {
    let raw = parse_raw(content, ConfigFormat::Toml).unwrap();
    Normalizer::default().normalize(&raw).unwrap_err()
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const TOML_DOC: &str = r#"
title = "Docs"
lang = "en-US"

[[themeConfig.nav]]
text = "Guide"
link = "/guide/"

[themeConfig.sidebar]
"/guide" = [{ text = "Intro", link = "/guide/intro" }]
"#;

    const JSON_DOC: &str = r#"{
  "title": "Docs",
  "lang": "en-US",
  "themeConfig": {
    "nav": [{ "text": "Guide", "link": "/guide/" }],
    "sidebar": { "/guide": [{ "text": "Intro", "link": "/guide/intro" }] }
  }
}"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("docnav.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("nav.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("NAV.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), ConfigFormat::Toml);
    }

    #[test]
    fn test_toml_and_json_agree() {
        let options = NormalizeOptions::default();
        let from_toml = from_str(TOML_DOC, ConfigFormat::Toml, options).unwrap();
        let from_json = from_str(JSON_DOC, ConfigFormat::Json, options).unwrap();
        assert_eq!(from_toml, from_json);
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_raw("[base\ntitle = \"x\"", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = parse_raw("{ \"title\": ", ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("docnav.json");
        fs::write(&path, JSON_DOC).unwrap();

        let model = load(&path, NormalizeOptions::default()).unwrap();
        assert_eq!(model.site().title, "Docs");
        assert_eq!(model.sidebar_for("/guide/intro")[0].text(), "Intro");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(
            &PathBuf::from("/definitely/not/here/docnav.toml"),
            NormalizeOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.hint().is_some());
    }

    #[test]
    fn test_load_with_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_NAME);
        fs::write(
            &path,
            "[[themeConfig.nav]]\ntext = \"A\"\nlink = \"/a\"\nrel = \"me\"\n",
        )
        .unwrap();

        let (model, ignored) = load_with_ignored(&path, NormalizeOptions::default()).unwrap();
        assert_eq!(model.nav().len(), 1);
        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].to_string(), "themeConfig.nav[0].rel");
    }

    #[test]
    fn test_helper_normalizes() {
        let model = test_normalize(TOML_DOC);
        assert_eq!(model.nav()[0].text(), Some("Guide"));
    }
}
