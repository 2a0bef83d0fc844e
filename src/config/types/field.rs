//! Config field paths.

use owo_colors::OwoColorize;
use std::fmt;

/// Path to a config field, used to point diagnostics at the offending value.
///
/// Paths are dotted, with bracketed indices for sequence items and quoted
/// keys for map entries whose key is user data:
///
/// ```text
/// navbar[2].link
/// sidebar."/guide/"[0].children
/// theme.color_mode
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(String);

impl FieldPath {
    #[inline]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Append a named field: `theme` + `color_mode` -> `theme.color_mode`.
    pub fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_owned())
        } else {
            Self(format!("{}.{name}", self.0))
        }
    }

    /// Append a sequence index: `navbar` + `2` -> `navbar[2]`.
    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{index}]", self.0))
    }

    /// Append a user-supplied map key: `sidebar` + `/guide/` -> `sidebar."/guide/"`.
    pub fn key(&self, key: &str) -> Self {
        Self(format!("{}.{key:?}", self.0))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_builders() {
        let sidebar = FieldPath::new("sidebar");
        let children = sidebar.key("/guide/").index(0).field("children");
        assert_eq!(children.as_str(), "sidebar.\"/guide/\"[0].children");

        let link = FieldPath::new("navbar").index(2).field("link");
        assert_eq!(link.as_str(), "navbar[2].link");
    }

    #[test]
    fn test_field_on_empty_root() {
        assert_eq!(FieldPath::new("").field("title").as_str(), "title");
    }
}
