//! `docnav nav` and `docnav sidebar`: print navigation trees.

use super::OutputArgs;
use anyhow::Result;
use docnav::debug;
use docnav::model::{Collapse, NavEntry, NavigationModel, SidebarItem};
use serde::Serialize;
use std::fmt::Write;

const INDENT: &str = "  ";

pub fn print_nav(model: &NavigationModel, output: &OutputArgs) -> Result<()> {
    if output.json {
        println!("{}", to_json(model.nav(), output.pretty)?);
    } else {
        print!("{}", render_nav(model.nav()));
    }
    Ok(())
}

/// Sidebar lookup result as printed with `--json`.
#[derive(Serialize)]
struct ResolvedSidebar<'a> {
    path: &'a str,
    key: Option<&'a str>,
    items: &'a [SidebarItem],
}

pub fn print_sidebar(model: &NavigationModel, path: &str, output: &OutputArgs) -> Result<()> {
    let key = model.sidebars().resolve_key(path);
    let items = model.sidebar_for(path);
    debug!("sidebar"; "{} -> {}", path, key.unwrap_or("(none)"));

    if output.json {
        let resolved = ResolvedSidebar { path, key, items };
        println!("{}", to_json(&resolved, output.pretty)?);
    } else {
        match key {
            Some(key) => println!("{key}"),
            None => println!("(no sidebar for {path})"),
        }
        print!("{}", render_sidebar(items));
    }
    Ok(())
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Render nav entries as an indented tree, one entry per line.
pub fn render_nav(entries: &[NavEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        write_nav_entry(&mut out, entry, 0);
    }
    out
}

fn write_nav_entry(out: &mut String, entry: &NavEntry, depth: usize) {
    let indent = INDENT.repeat(depth);
    match entry {
        NavEntry::Link { text, href } => {
            writeln!(out, "{indent}{text} → {href}").ok();
        }
        NavEntry::Dropdown { text, items } => {
            writeln!(out, "{indent}{} ▾", text.as_deref().unwrap_or("(untitled)")).ok();
            for item in items {
                write_nav_entry(out, item, depth + 1);
            }
        }
    }
}

/// Render a sidebar tree. Groups are marked `▾` (open) or `▸` (collapsed)
/// when collapsible.
pub fn render_sidebar(items: &[SidebarItem]) -> String {
    let mut out = String::new();
    for item in items {
        write_sidebar_item(&mut out, item, 0);
    }
    out
}

fn write_sidebar_item(out: &mut String, item: &SidebarItem, depth: usize) {
    let indent = INDENT.repeat(depth);
    match item {
        SidebarItem::Link { text, href } => {
            writeln!(out, "{indent}{text} → {href}").ok();
        }
        SidebarItem::Group {
            text,
            href,
            collapsed,
            collapsible,
            items,
        } => {
            let marker = match (collapsible, collapsed) {
                (false, _) => "",
                (true, Collapse::Expanded) => "▾ ",
                (true, Collapse::Collapsed) => "▸ ",
            };
            let target = href.as_deref().map(|href| format!(" → {href}")).unwrap_or_default();
            writeln!(out, "{indent}{marker}{text}{target}").ok();
            for child in items {
                write_sidebar_item(out, child, depth + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docnav::config::{self, ConfigFormat, NormalizeOptions};

    fn model(toml: &str) -> NavigationModel {
        config::from_str(toml, ConfigFormat::Toml, NormalizeOptions::default()).unwrap()
    }

    #[test]
    fn test_render_nav() {
        let model = model(
            r#"
[[themeConfig.nav]]
text = "Guide"
link = "/guide/"

[[themeConfig.nav]]
text = "Menu"
items = [{ items = [{ text = "A", link = "/a" }] }]
"#,
        );
        assert_eq!(
            render_nav(model.nav()),
            "Guide → /guide/\nMenu ▾\n  (untitled) ▾\n    A → /a\n"
        );
    }

    #[test]
    fn test_render_sidebar() {
        let model = model(
            r#"
[themeConfig.sidebar]
"/guide/" = [
    { text = "Guide", items = [{ text = "One", link = "/guide/one" }] },
    { text = "More", link = "/guide/more/", collapsed = true, items = [
        { text = "Two", link = "/guide/two" },
    ] },
]
"#,
        );
        assert_eq!(
            render_sidebar(model.sidebar_for("/guide/one")),
            "Guide\n  One → /guide/one\n▸ More → /guide/more/\n  Two → /guide/two\n"
        );
    }

    #[test]
    fn test_render_empty_sidebar() {
        assert_eq!(render_sidebar(&[]), "");
    }

    #[test]
    fn test_resolved_json() {
        let model = model("[themeConfig.sidebar]\n\"/a/\" = [{ text = \"A\", link = \"/a/x\" }]\n");
        let resolved = ResolvedSidebar {
            path: "/a/x",
            key: model.sidebars().resolve_key("/a/x"),
            items: model.sidebar_for("/a/x"),
        };
        let json: serde_json::Value =
            serde_json::from_str(&to_json(&resolved, false).unwrap()).unwrap();
        assert_eq!(json["key"], "/a/");
        assert_eq!(json["items"][0]["text"], "A");
    }
}
