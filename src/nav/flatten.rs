//! Depth-first walk over every link in the navigation config.
//!
//! Order: navbar entries as declared, then each sidebar prefix as
//! declared, each group in order, each child in order. Groups have no
//! link of their own and are not yielded.

use serde::Serialize;
use std::borrow::Cow;
use std::iter::FusedIterator;
use std::slice;

use super::link::{LinkKind, join_prefix};
use crate::config::{NavbarEntry, SidebarEntry, SidebarGroup, SidebarLink, SidebarSection};

/// Where a flattened link was declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum LinkOrigin<'a> {
    Navbar,
    Sidebar {
        /// Sidebar prefix the link lives under.
        prefix: &'a str,
        /// Text of the enclosing group.
        group: &'a str,
    },
}

/// A `(text, link)` pair borrowed from the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink<'a> {
    pub text: &'a str,
    pub link: &'a str,
    #[serde(flatten)]
    pub origin: LinkOrigin<'a>,
}

impl<'a> NavLink<'a> {
    /// The link as a site path.
    ///
    /// Relative sidebar links are joined onto their prefix
    /// (`create-account` under `/guide/` is `/guide/create-account`);
    /// everything else is returned unchanged.
    pub fn resolve(&self) -> Cow<'a, str> {
        match (self.origin, LinkKind::parse(self.link)) {
            (LinkOrigin::Sidebar { prefix, .. }, LinkKind::Relative(rel)) => {
                Cow::Owned(join_prefix(prefix, rel))
            }
            _ => Cow::Borrowed(self.link),
        }
    }

    pub fn as_pair(&self) -> (&'a str, &'a str) {
        (self.text, self.link)
    }
}

/// Lazy iterator returned by [`SiteConfig::flatten_links`](crate::config::SiteConfig::flatten_links).
///
/// Cloning yields an independent cursor at the same position.
#[derive(Debug, Clone)]
pub struct Links<'a> {
    navbar: slice::Iter<'a, NavbarEntry>,
    sections: slice::Iter<'a, SidebarEntry>,
    groups: Option<(&'a str, slice::Iter<'a, SidebarGroup>)>,
    children: Option<(&'a str, &'a str, slice::Iter<'a, SidebarLink>)>,
}

impl<'a> Links<'a> {
    pub fn new(navbar: &'a [NavbarEntry], sidebar: &'a SidebarSection) -> Self {
        Self {
            navbar: navbar.iter(),
            sections: sidebar.entries().iter(),
            groups: None,
            children: None,
        }
    }
}

impl<'a> Iterator for Links<'a> {
    type Item = NavLink<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(entry) = self.navbar.next() {
            return Some(NavLink {
                text: &entry.text,
                link: &entry.link,
                origin: LinkOrigin::Navbar,
            });
        }

        loop {
            if let Some((prefix, group, children)) = &mut self.children
                && let Some(child) = children.next()
            {
                return Some(NavLink {
                    text: &child.text,
                    link: &child.link,
                    origin: LinkOrigin::Sidebar {
                        prefix: *prefix,
                        group: *group,
                    },
                });
            }

            if let Some((prefix, groups)) = &mut self.groups
                && let Some(group) = groups.next()
            {
                self.children = Some((*prefix, group.text.as_str(), group.children.iter()));
                continue;
            }

            let entry = self.sections.next()?;
            self.groups = Some((entry.prefix.as_str(), entry.groups.iter()));
        }
    }
}

impl FusedIterator for Links<'_> {}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use crate::nav::LinkOrigin;

    #[test]
    fn test_navbar_then_sidebar_depth_first() {
        let config = test_parse_config(
            r#"
[[navbar]]
text = "Guide"
link = "/guide/"

[[navbar]]
text = "LOTSR"
link = "/lotsr/"

[[sidebar."/lotsr/"]]
text = "Basics"
children = [{ text = "Intro", link = "intro" }, { text = "Maps", link = "maps" }]

[[sidebar."/lotsr/"]]
text = "Advanced"
children = [{ text = "Tactics", link = "tactics" }]

[[sidebar."/guide/"]]
text = "Guide"
children = [{ text = "Website", link = "website" }]
"#,
        );

        let pairs: Vec<_> = config.flatten_links().map(|l| l.as_pair()).collect();
        assert_eq!(
            pairs,
            [
                ("Guide", "/guide/"),
                ("LOTSR", "/lotsr/"),
                ("Intro", "intro"),
                ("Maps", "maps"),
                ("Tactics", "tactics"),
                ("Website", "website"),
            ]
        );
    }

    #[test]
    fn test_origin_and_resolve() {
        let config = test_parse_config(
            r#"
[[sidebar."/guide/"]]
text = "Guide"
children = [
    { text = "Website", link = "website" },
    { text = "Home", link = "/" },
    { text = "Discord", link = "https://discord.gg/palaten" },
]
"#,
        );

        let links: Vec<_> = config.flatten_links().collect();
        assert_eq!(
            links[0].origin,
            LinkOrigin::Sidebar {
                prefix: "/guide/",
                group: "Guide"
            }
        );
        assert_eq!(links[0].resolve(), "/guide/website");
        assert_eq!(links[1].resolve(), "/");
        assert_eq!(links[2].resolve(), "https://discord.gg/palaten");
    }

    #[test]
    fn test_restartable_and_clonable() {
        let config = test_parse_config("[[navbar]]\ntext = \"Guide\"\nlink = \"/guide/\"");

        let first: Vec<_> = config.flatten_links().collect();
        let second: Vec<_> = config.flatten_links().collect();
        assert_eq!(first, second);

        let mut links = config.flatten_links();
        let snapshot = links.clone();
        assert!(links.next().is_some());
        assert!(links.next().is_none());
        assert!(links.next().is_none());
        assert_eq!(snapshot.count(), 1);
    }

    #[test]
    fn test_empty_config_yields_nothing() {
        let config = test_parse_config("");
        assert_eq!(config.flatten_links().count(), 0);
    }

    #[test]
    fn test_serialize_link() {
        let config = test_parse_config(
            "[[sidebar.\"/guide/\"]]\ntext = \"Guide\"\nchildren = [{ text = \"Website\", link = \"website\" }]",
        );
        let link = config.flatten_links().next().unwrap();
        let json = serde_json::to_value(link).unwrap();
        assert_eq!(json["source"], "sidebar");
        assert_eq!(json["prefix"], "/guide/");
        assert_eq!(json["text"], "Website");
    }
}
