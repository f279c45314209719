//! `themeConfig.sidebar`: sidebar trees keyed by path prefix.
//!
//! ```toml
//! [themeConfig.sidebar]
//! "/guide/" = [
//!     { text = "Guide", collapsed = false, items = [
//!         { text = "Index", link = "/guide/" },
//!         { text = "One", link = "/guide/one" },
//!     ] },
//! ]
//! ```
//!
//! A plain array instead of a table is a single sidebar for every page
//! (key `/`). Keys get a trailing `/` appended when missing.

use super::NormalizeContext;
use super::raw;
use crate::config::{ConfigError, FieldPath};
use crate::debug;
use crate::model::{Collapse, SidebarItem, SidebarMap};
use rustc_hash::FxHashSet;
use serde_json::Value;

const KNOWN: &[&str] = &["text", "href", "link", "items", "collapsed"];

pub(super) fn normalize_sidebars(
    value: &Value,
    path: &FieldPath,
    ctx: &mut NormalizeContext,
) -> Result<SidebarMap, ConfigError> {
    match value {
        Value::Array(items) => {
            let items = normalize_items(items, path, 1, ctx)?;
            Ok(SidebarMap::from_entries(vec![("/".to_string(), items)]))
        }
        Value::Object(table) => {
            let mut seen = FxHashSet::default();
            let mut entries = Vec::with_capacity(table.len());

            for (key, tree) in table {
                let tree_path = path.key(key);
                let prefix = normalize_prefix(key);
                if !seen.insert(prefix.clone()) {
                    return Err(ConfigError::DuplicateSidebarKey {
                        key: prefix,
                        path: tree_path,
                    });
                }
                let items = raw::as_array(tree, &tree_path)?;
                entries.push((prefix, normalize_items(items, &tree_path, 1, ctx)?));
            }

            Ok(SidebarMap::from_entries(entries))
        }
        other => Err(raw::invalid(path, "table or array", other)),
    }
}

/// Append the trailing `/` that makes prefix matching segment-aligned.
pub(super) fn normalize_prefix(key: &str) -> String {
    if key.ends_with('/') {
        key.to_string()
    } else {
        format!("{key}/")
    }
}

fn normalize_items(
    items: &[Value],
    path: &FieldPath,
    depth: usize,
    ctx: &mut NormalizeContext,
) -> Result<Vec<SidebarItem>, ConfigError> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| normalize_item(item, &path.index(i), depth, ctx))
        .collect()
}

fn normalize_item(
    value: &Value,
    path: &FieldPath,
    depth: usize,
    ctx: &mut NormalizeContext,
) -> Result<SidebarItem, ConfigError> {
    ctx.check_depth(depth, path)?;
    let table = raw::as_table(value, path)?;
    ctx.note_unknown(table, KNOWN, path);

    let text = raw::opt_string(table, "text", path)?;
    let target = raw::link_target(table, path)?;
    let collapsed = raw::opt_bool(table, "collapsed", path)?;

    let missing_text = || ConfigError::MissingField {
        path: path.clone(),
        field: "text",
    };

    if let Some(items) = table.get("items") {
        let items_path = path.key("items");
        let items = raw::as_array(items, &items_path)?;
        if items.is_empty() {
            return Err(ConfigError::EmptyGroup { path: items_path });
        }
        if target.as_deref().is_some_and(|href| href.trim().is_empty()) {
            return Err(ConfigError::EmptyLink { path: path.clone() });
        }
        let text = text.ok_or_else(missing_text)?;
        let items = normalize_items(items, &items_path, depth + 1, ctx)?;

        return Ok(SidebarItem::Group {
            text,
            href: target,
            collapsed: collapsed.map(Collapse::from).unwrap_or_default(),
            collapsible: collapsed.is_some(),
            items,
        });
    }

    let Some(href) = target else {
        return Err(ConfigError::AmbiguousEntry { path: path.clone() });
    };
    if href.trim().is_empty() {
        return Err(ConfigError::EmptyLink { path: path.clone() });
    }
    if collapsed.is_some() {
        debug!("normalize"; "[{}] `collapsed` has no effect on a link", path);
    }
    let text = text.ok_or_else(missing_text)?;

    Ok(SidebarItem::Link { text, href })
}
