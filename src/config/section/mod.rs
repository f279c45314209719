//! Normalization of the raw config tree into a [`NavigationModel`].
//!
//! Each module handles one part of the document:
//!
//! | Module    | Raw location            | Produces                      |
//! |-----------|-------------------------|-------------------------------|
//! | `site`    | top-level fields        | [`SiteConfig`]                |
//! | `theme`   | `themeConfig`           | [`ThemeConfig`]               |
//! | `nav`     | `themeConfig.nav`       | [`NavEntry`] list             |
//! | `sidebar` | `themeConfig.sidebar`   | [`SidebarMap`]                |
//! | `raw`     | -                       | typed accessors over values   |
//!
//! Validation runs depth-first, pre-order, and stops at the first error.
//!
//! [`SiteConfig`]: crate::model::SiteConfig
//! [`ThemeConfig`]: crate::model::ThemeConfig
//! [`NavEntry`]: crate::model::NavEntry
//! [`SidebarMap`]: crate::model::SidebarMap

mod nav;
mod raw;
mod sidebar;
mod site;
mod theme;


use crate::config::{ConfigError, FieldPath};
use crate::model::{NavigationModel, SidebarMap};
use serde_json::Value;

/// Default limit on nav/sidebar nesting.
pub const DEFAULT_MAX_DEPTH: usize = 16;

const THEME_KEY: &str = "themeConfig";

/// Normalization settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Deepest allowed nesting of nav entries and sidebar items.
    /// Top-level entries are at depth 1.
    pub max_depth: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Turns a raw config tree into a validated [`NavigationModel`].
///
/// # Example
///
/// ```
/// use docnav::config::Normalizer;
/// use serde_json::json;
///
/// let raw = json!({
///     "title": "Docs",
///     "themeConfig": {
///         "sidebar": { "/guide": [{ "text": "Intro", "link": "/guide/intro" }] }
///     }
/// });
/// let model = Normalizer::default().normalize(&raw).unwrap();
/// assert_eq!(model.sidebar_for("/guide/intro")[0].text(), "Intro");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    pub const fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub const fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Normalize, discarding the list of ignored fields.
    pub fn normalize(&self, raw: &Value) -> Result<NavigationModel, ConfigError> {
        self.normalize_with_ignored(raw).map(|(model, _)| model)
    }

    /// Normalize and collect the paths of unknown fields on nav entries and
    /// sidebar items, which are otherwise dropped.
    pub fn normalize_with_ignored(
        &self,
        raw: &Value,
    ) -> Result<(NavigationModel, Vec<FieldPath>), ConfigError> {
        let mut ctx = NormalizeContext::new(self.options.max_depth);
        let root_path = FieldPath::root();
        let root = raw::as_table(raw, &root_path)?;

        let site = site::normalize_site(root, &root_path)?;

        let theme_path = root_path.key(THEME_KEY);
        let empty = raw::Table::new();
        let theme_table = match root.get(THEME_KEY) {
            Some(value) => raw::as_table(value, &theme_path)?,
            None => &empty,
        };
        let theme = theme::normalize_theme(theme_table, &theme_path)?;

        let nav = match theme_table.get("nav") {
            Some(value) => nav::normalize_nav(value, &theme_path.key("nav"), &mut ctx)?,
            None => Vec::new(),
        };

        let sidebars = match theme_table.get("sidebar") {
            Some(value) => {
                sidebar::normalize_sidebars(value, &theme_path.key("sidebar"), &mut ctx)?
            }
            None => SidebarMap::default(),
        };

        let model = NavigationModel::new(site, theme, nav, sidebars);
        Ok((model, ctx.ignored))
    }
}

/// State threaded through one normalization pass.
pub(super) struct NormalizeContext {
    max_depth: usize,
    ignored: Vec<FieldPath>,
}

impl NormalizeContext {
    fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            ignored: Vec::new(),
        }
    }

    /// Fail once an entry sits deeper than the configured limit.
    fn check_depth(&self, depth: usize, path: &FieldPath) -> Result<(), ConfigError> {
        if depth > self.max_depth {
            return Err(ConfigError::MaxDepthExceeded {
                path: path.clone(),
                limit: self.max_depth,
            });
        }
        Ok(())
    }

    /// Record fields of `table` that are not in `known`.
    fn note_unknown(&mut self, table: &raw::Table, known: &[&str], path: &FieldPath) {
        self.ignored.extend(
            table
                .keys()
                .filter(|key| !known.contains(&key.as_str()))
                .map(|key| path.key(key)),
        );
    }
}
