//! Top navigation bar entries.

use serde::Serialize;

/// An entry of the top navigation bar.
///
/// Dropdowns may nest further dropdowns; the usual depth is two
/// (menu → titled section → links) but nothing limits it beyond the
/// normalizer's depth guard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NavEntry {
    /// Direct link.
    Link { text: String, href: String },

    /// Menu or titled section containing further entries.
    Dropdown {
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        items: Vec<NavEntry>,
    },
}

impl NavEntry {
    /// Display text, if any (untitled dropdown sections have none).
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Link { text, .. } => Some(text),
            Self::Dropdown { text, .. } => text.as_deref(),
        }
    }

    /// Link target of a leaf entry.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link { href, .. } => Some(href),
            Self::Dropdown { .. } => None,
        }
    }

    /// Child entries of a dropdown; empty for links.
    pub fn items(&self) -> &[NavEntry] {
        match self {
            Self::Link { .. } => &[],
            Self::Dropdown { items, .. } => items,
        }
    }

    #[inline]
    pub const fn is_dropdown(&self) -> bool {
        matches!(self, Self::Dropdown { .. })
    }

    /// Number of leaf links in this subtree.
    pub fn link_count(&self) -> usize {
        match self {
            Self::Link { .. } => 1,
            Self::Dropdown { items, .. } => items.iter().map(Self::link_count).sum(),
        }
    }
}
