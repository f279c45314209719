//! Location of a value inside the raw config tree.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Path from the document root to a raw value.
///
/// Displays the way an author would point at it:
/// `themeConfig.nav[1].items[0]`, `themeConfig.sidebar["/guide/"][2]`.
///
/// # Example
///
/// ```
/// use docnav::config::FieldPath;
///
/// let path = FieldPath::root().key("themeConfig").key("nav").index(1);
/// assert_eq!(path.to_string(), "themeConfig.nav[1]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    #[inline]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Child path for a table key.
    pub fn key(&self, key: &str) -> Self {
        self.child(Segment::Key(key.to_string()))
    }

    /// Child path for an array element.
    pub fn index(&self, index: usize) -> Self {
        self.child(Segment::Index(index))
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of segments.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn child(&self, segment: Segment) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(segment);
        Self(segments)
    }
}

/// Keys that can be written bare after a dot.
fn is_bare_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                Segment::Key(key) if is_bare_key(key) => {
                    if i > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(key)?;
                }
                Segment::Key(key) => write!(f, "[{key:?}]")?,
                Segment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}
