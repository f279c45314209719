//! Configuration error types.

use super::FieldPath;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Errors raised while loading or normalizing a site config.
///
/// Normalization is fail-fast: the first violation found (depth-first,
/// pre-order) is returned and no partial model is built.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file `{0}` not found")]
    NotFound(PathBuf),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config file parsing error")]
    Json(#[from] serde_json::Error),

    #[error("[{path}] entry has neither a link (`href`/`link`) nor nested `items`")]
    AmbiguousEntry { path: FieldPath },

    #[error("[{path}] nesting exceeds the maximum depth of {limit}")]
    MaxDepthExceeded { path: FieldPath, limit: usize },

    #[error("[{path}] sidebar key normalizes to `{key}`, which is already defined")]
    DuplicateSidebarKey { key: String, path: FieldPath },

    #[error("[{path}] expected {expected}, found {found}")]
    InvalidFieldType {
        path: FieldPath,
        expected: &'static str,
        found: String,
    },

    #[error("[{path}] missing required field `{field}`")]
    MissingField { path: FieldPath, field: &'static str },

    #[error("[{path}] link target is empty")]
    EmptyLink { path: FieldPath },

    #[error("[{path}] `items` must not be empty")]
    EmptyGroup { path: FieldPath },
}

impl ConfigError {
    /// Location in the raw tree, for validation errors.
    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::AmbiguousEntry { path }
            | Self::MaxDepthExceeded { path, .. }
            | Self::DuplicateSidebarKey { path, .. }
            | Self::InvalidFieldType { path, .. }
            | Self::MissingField { path, .. }
            | Self::EmptyLink { path }
            | Self::EmptyGroup { path } => Some(path),
            Self::Io(..) | Self::NotFound(_) | Self::Toml(_) | Self::Json(_) => None,
        }
    }

    /// Fix hint shown under the error.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::AmbiguousEntry { .. } => {
                Some("add `link` for a plain link, or `items` for a dropdown or group")
            }
            Self::MaxDepthExceeded { .. } => {
                Some("flatten the tree, or raise the limit with --max-depth")
            }
            Self::DuplicateSidebarKey { .. } => {
                Some("keys are compared with a trailing `/`, e.g. \"/guide\" equals \"/guide/\"")
            }
            Self::EmptyGroup { .. } => Some("remove the empty `items`, or add at least one entry"),
            Self::NotFound(_) => Some("pass the config path with -C/--config"),
            _ => None,
        }
    }

    /// Whether the error comes from normalization rather than IO or parsing.
    pub fn is_validation(&self) -> bool {
        self.path().is_some()
    }
}
