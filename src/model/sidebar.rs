//! Sidebar trees and longest-prefix resolution.

use serde::{Serialize, Serializer};

/// Open/closed state of a sidebar group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collapse {
    #[default]
    Expanded,
    Collapsed,
}

impl From<bool> for Collapse {
    fn from(collapsed: bool) -> Self {
        if collapsed {
            Self::Collapsed
        } else {
            Self::Expanded
        }
    }
}

/// A node of a sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SidebarItem {
    /// Leaf link.
    Link { text: String, href: String },

    /// Group of items, optionally linking to an index page.
    Group {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        collapsed: Collapse,
        /// Whether the author set `collapsed` at all. Groups without it
        /// stay open and show no toggle.
        collapsible: bool,
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    pub fn text(&self) -> &str {
        match self {
            Self::Link { text, .. } | Self::Group { text, .. } => text,
        }
    }

    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Link { href, .. } => Some(href),
            Self::Group { href, .. } => href.as_deref(),
        }
    }

    /// Child items of a group; empty for links.
    pub fn items(&self) -> &[SidebarItem] {
        match self {
            Self::Link { .. } => &[],
            Self::Group { items, .. } => items,
        }
    }

    #[inline]
    pub const fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }

    /// Collapse state; links are always expanded.
    pub const fn collapse(&self) -> Collapse {
        match self {
            Self::Link { .. } => Collapse::Expanded,
            Self::Group { collapsed, .. } => *collapsed,
        }
    }
}

/// Sidebar trees keyed by path prefix.
///
/// Keys always end with `/`. Iteration follows authored order, while
/// [`resolve`](Self::resolve) picks the longest key that prefixes the path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarMap {
    entries: Vec<(String, Vec<SidebarItem>)>,
    /// Indices into `entries`, longest key first.
    by_length: Vec<usize>,
}

impl SidebarMap {
    /// Build from normalized, unique keys.
    pub(crate) fn from_entries(entries: Vec<(String, Vec<SidebarItem>)>) -> Self {
        debug_assert!(entries.iter().all(|(key, _)| key.ends_with('/')));

        let mut by_length: Vec<usize> = (0..entries.len()).collect();
        // Stable sort; keys are unique so equal lengths never both match.
        by_length.sort_by(|&a, &b| entries[b].0.len().cmp(&entries[a].0.len()));

        Self { entries, by_length }
    }

    /// Key of the sidebar that applies to `path`, if any.
    pub fn resolve_key(&self, path: &str) -> Option<&str> {
        self.matching(path).map(|(key, _)| key.as_str())
    }

    /// Sidebar tree for `path`, or an empty slice when no prefix matches.
    pub fn resolve(&self, path: &str) -> &[SidebarItem] {
        self.matching(path)
            .map(|(_, items)| items.as_slice())
            .unwrap_or(&[])
    }

    fn matching(&self, path: &str) -> Option<&(String, Vec<SidebarItem>)> {
        self.by_length
            .iter()
            .map(|&idx| &self.entries[idx])
            .find(|(key, _)| path.starts_with(key.as_str()))
    }

    /// Sidebar registered under an exact (normalized) key.
    pub fn get(&self, key: &str) -> Option<&[SidebarItem]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, items)| items.as_slice())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[SidebarItem])> {
        self.entries
            .iter()
            .map(|(key, items)| (key.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for SidebarMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}
