//! Error reporting for the binary.

use docnav::config::ConfigError;
use docnav::log;

/// Print a top-level error, with a fix hint for config errors.
pub fn print_error(err: &anyhow::Error) {
    for (module, message) in report_lines(err) {
        log!(module; "{}", message);
    }
}

/// Lines to log for an error. Only the `[module]` prefix gets colored, so the
/// message (and any `[path]` in it) reads the same on every terminal.
fn report_lines(err: &anyhow::Error) -> Vec<(&'static str, String)> {
    let mut lines = vec![("error", format!("{err:#}"))];
    if let Some(hint) = err.downcast_ref::<ConfigError>().and_then(ConfigError::hint) {
        lines.push(("hint", hint.to_string()));
    }
    lines
}
