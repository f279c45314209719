//! The normalized navigation model.
//!
//! | Module    | Purpose                                      |
//! |-----------|----------------------------------------------|
//! | `site`    | Site metadata, head tags, theme settings     |
//! | `nav`     | Top navigation bar entries                   |
//! | `sidebar` | Sidebar trees and prefix resolution          |
//!
//! A [`NavigationModel`] is only produced by the normalizer
//! ([`crate::config::Normalizer`]) and is never mutated afterwards, so it can
//! be shared across threads by reference or behind an `Arc`.

mod nav;
mod sidebar;
mod site;

pub use nav::NavEntry;
pub use sidebar::{Collapse, SidebarItem, SidebarMap};
pub use site::{DEFAULT_LOCALE, HeadTag, SiteConfig, ThemeConfig};

use serde::Serialize;

/// Validated site navigation: metadata, nav bar and sidebars.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NavigationModel {
    site: SiteConfig,
    theme: ThemeConfig,
    nav: Vec<NavEntry>,
    sidebars: SidebarMap,
}

impl NavigationModel {
    pub(crate) fn new(
        site: SiteConfig,
        theme: ThemeConfig,
        nav: Vec<NavEntry>,
        sidebars: SidebarMap,
    ) -> Self {
        Self {
            site,
            theme,
            nav,
            sidebars,
        }
    }

    #[inline]
    pub fn site(&self) -> &SiteConfig {
        &self.site
    }

    #[inline]
    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    /// Top navigation bar entries, in authored order.
    #[inline]
    pub fn nav(&self) -> &[NavEntry] {
        &self.nav
    }

    #[inline]
    pub fn sidebars(&self) -> &SidebarMap {
        &self.sidebars
    }

    /// Sidebar to display for a page path.
    ///
    /// Picks the longest sidebar key that prefixes `path`. Returns an empty
    /// slice when nothing matches; this never fails.
    #[inline]
    pub fn sidebar_for(&self, path: &str) -> &[SidebarItem] {
        self.sidebars.resolve(path)
    }

    /// Title shown in the nav bar: `themeConfig.siteTitle`, else the site title.
    pub fn display_title(&self) -> &str {
        self.theme.site_title.as_deref().unwrap_or(&self.site.title)
    }
}
