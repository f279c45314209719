//! `docnav check`: validate a config and summarize it.

use super::Loaded;
use anyhow::Result;
use docnav::log;
use docnav::model::NavigationModel;
use docnav::utils::{plural_count, plural_s};

pub fn run_check(loaded: &Loaded) -> Result<()> {
    log!("check"; "{} is valid", loaded.path.display());
    log!("check"; "{}", summary(&loaded.model));
    if !loaded.ignored.is_empty() {
        log!(
            "check";
            "{} ignored field{}",
            loaded.ignored.len(),
            plural_s(loaded.ignored.len())
        );
    }
    Ok(())
}

/// One-line description of a model.
pub fn summary(model: &NavigationModel) -> String {
    let links: usize = model.nav().iter().map(|entry| entry.link_count()).sum();
    let sidebars = model.sidebars();

    let mut line = format!(
        "\"{}\" ({}), {} ({}), {}",
        model.display_title(),
        model.site().locale,
        plural_count(model.nav().len(), "nav entry"),
        plural_count(links, "link"),
        plural_count(sidebars.len(), "sidebar"),
    );
    if !sidebars.is_empty() {
        let keys: Vec<_> = sidebars.keys().collect();
        line.push_str(": ");
        line.push_str(&keys.join(", "));
    }
    line
}
