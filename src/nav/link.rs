//! Link classification utilities.

/// Check if a link carries a URL scheme (`https:`, `mailto:`, ...).
#[inline]
pub fn is_external_link(link: &str) -> bool {
    link.find(':').is_some_and(|pos| {
        pos > 0
            && link[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Syntactic classification of navigation links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind<'a> {
    /// External link with URL scheme (https://, mailto:, etc.)
    External(&'a str),
    /// Pure fragment/anchor link (#section). Value is anchor without `#`.
    Fragment(&'a str),
    /// Site-root path (/guide/, /lotsr/).
    SiteRoot(&'a str),
    /// Path relative to the enclosing sidebar prefix (create-account).
    Relative(&'a str),
}

impl<'a> LinkKind<'a> {
    /// Parse a link string into its syntactic kind.
    #[inline]
    pub fn parse(link: &'a str) -> Self {
        if is_external_link(link) {
            Self::External(link)
        } else if let Some(anchor) = link.strip_prefix('#') {
            Self::Fragment(anchor)
        } else if link.starts_with('/') {
            Self::SiteRoot(link)
        } else {
            Self::Relative(link)
        }
    }
}

/// Join a relative link onto a URL prefix.
///
/// `./` segments are dropped; the prefix is expected to end with `/`.
pub fn join_prefix(prefix: &str, link: &str) -> String {
    let link = link.trim_start_matches("./");
    if prefix.ends_with('/') {
        format!("{prefix}{link}")
    } else {
        format!("{prefix}/{link}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_external() {
        assert!(matches!(
            LinkKind::parse("https://discord.gg/palaten"),
            LinkKind::External("https://discord.gg/palaten")
        ));
        assert!(matches!(
            LinkKind::parse("mailto:support@example.com"),
            LinkKind::External(_)
        ));
    }

    #[test]
    fn test_parse_fragment() {
        assert!(matches!(
            LinkKind::parse("#install"),
            LinkKind::Fragment("install")
        ));
        assert!(matches!(LinkKind::parse("#"), LinkKind::Fragment("")));
    }

    #[test]
    fn test_parse_site_root() {
        assert!(matches!(
            LinkKind::parse("/guide/"),
            LinkKind::SiteRoot("/guide/")
        ));
    }

    #[test]
    fn test_parse_relative() {
        assert!(matches!(
            LinkKind::parse("create-account"),
            LinkKind::Relative("create-account")
        ));
        // Colon after a slash is not a scheme
        assert!(matches!(
            LinkKind::parse("notes/a:b"),
            LinkKind::Relative("notes/a:b")
        ));
    }

    #[test]
    fn test_join_prefix() {
        assert_eq!(join_prefix("/guide/", "create-account"), "/guide/create-account");
        assert_eq!(join_prefix("/guide/", "./website"), "/guide/website");
        assert_eq!(join_prefix("/guide", "website"), "/guide/website");
    }
}
