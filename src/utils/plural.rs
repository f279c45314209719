//! Pluralization helpers for summary lines.

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format count with noun, e.g. `3 sidebars`, `1 nav entry`.
///
/// Nouns ending in `y` after a consonant take `ies`.
pub fn plural_count(count: usize, noun: &str) -> String {
    if count != 1
        && let Some(stem) = noun.strip_suffix('y')
        && !stem.ends_with(['a', 'e', 'i', 'o', 'u'])
    {
        return format!("{count} {stem}ies");
    }
    format!("{} {}{}", count, noun, plural_s(count))
}
