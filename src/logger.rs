//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, shown only in verbose mode
//!
//! Messages go to stderr so that command output on stdout (trees, JSON)
//! stays clean.
//!
//! # Example
//!
//! ```ignore
//! log!("check"; "loaded {} sidebars", count);
//! debug!("normalize"; "[{}] ignoring link on dropdown", path);
//! ```

use owo_colors::{OwoColorize, Stream};
use std::io::{Write, stderr};
use std::sync::atomic::{AtomicBool, Ordering};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);
    let mut stderr = stderr().lock();
    writeln!(stderr, "{prefix} {message}").ok();
    stderr.flush().ok();
}

/// Apply color to a module prefix based on module type
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    let paint: fn(&String) -> String = match module.to_ascii_lowercase().as_str() {
        "error" => |p| p.bright_red().bold().to_string(),
        "warning" => |p| p.bright_magenta().bold().to_string(),
        "hint" => |p| p.bright_cyan().bold().to_string(),
        "check" => |p| p.bright_green().bold().to_string(),
        _ => |p| p.bright_yellow().bold().to_string(),
    };
    prefix.if_supports_color(Stream::Stderr, paint).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_contains_module() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("check"), "[check]");
        assert_eq!(colorize_prefix("normalize"), "[normalize]");
        owo_colors::unset_override();
    }

    #[test]
    fn test_verbose_flag() {
        let before = is_verbose();
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(before);
    }
}
