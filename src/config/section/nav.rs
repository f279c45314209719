//! `themeConfig.nav`: the top navigation bar.
//!
//! ```toml
//! [[themeConfig.nav]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[themeConfig.nav]]
//! text = "Dropdown Menu"
//! items = [
//!     { text = "Section A", items = [{ text = "Item A", link = "/a" }] },
//! ]
//! ```
//!
//! An entry with `items` is a dropdown (any link on it is ignored); an entry
//! with `href` or `link` is a plain link.

use super::NormalizeContext;
use super::raw;
use crate::config::{ConfigError, FieldPath};
use crate::debug;
use crate::model::NavEntry;
use serde_json::Value;

const KNOWN: &[&str] = &["text", "href", "link", "items"];

pub(super) fn normalize_nav(
    value: &Value,
    path: &FieldPath,
    ctx: &mut NormalizeContext,
) -> Result<Vec<NavEntry>, ConfigError> {
    let entries = raw::as_array(value, path)?;
    normalize_entries(entries, path, 1, ctx)
}

fn normalize_entries(
    entries: &[Value],
    path: &FieldPath,
    depth: usize,
    ctx: &mut NormalizeContext,
) -> Result<Vec<NavEntry>, ConfigError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| normalize_entry(entry, &path.index(i), depth, ctx))
        .collect()
}

fn normalize_entry(
    value: &Value,
    path: &FieldPath,
    depth: usize,
    ctx: &mut NormalizeContext,
) -> Result<NavEntry, ConfigError> {
    ctx.check_depth(depth, path)?;
    let table = raw::as_table(value, path)?;
    ctx.note_unknown(table, KNOWN, path);

    let text = raw::opt_string(table, "text", path)?;
    let target = raw::link_target(table, path)?;

    if let Some(items) = table.get("items") {
        let items_path = path.key("items");
        let items = raw::as_array(items, &items_path)?;
        if items.is_empty() {
            return Err(ConfigError::EmptyGroup { path: items_path });
        }
        if target.is_some() {
            debug!("normalize"; "[{}] ignoring link on dropdown", path);
        }
        let items = normalize_entries(items, &items_path, depth + 1, ctx)?;
        return Ok(NavEntry::Dropdown { text, items });
    }

    let Some(href) = target else {
        return Err(ConfigError::AmbiguousEntry { path: path.clone() });
    };
    if href.trim().is_empty() {
        return Err(ConfigError::EmptyLink { path: path.clone() });
    }
    let text = text.ok_or_else(|| ConfigError::MissingField {
        path: path.clone(),
        field: "text",
    })?;

    Ok(NavEntry::Link { text, href })
}
