//! `[sidebar]` table: per-section navigation trees keyed by URL prefix.
//!
//! # Example
//!
//! ```toml
//! [[sidebar."/guide/"]]
//! text = "Guide"
//! collapsable = true
//! children = [
//!     { text = "Create Account", link = "create-account" },
//!     { text = "Game Launcher", link = "game-launcher" },
//! ]
//! ```

use rustc_hash::FxHashMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::check::{check_link, check_text, is_slash_delimited};
use crate::config::raw::{OrderedMap, RawSidebar, RawSidebarGroup, RawSidebarLink};
use crate::config::{ConfigDiagnostics, FieldPath};

/// Leaf of the sidebar tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarLink {
    pub text: String,
    /// Usually a path segment relative to the section prefix.
    pub link: String,
}

/// A titled, ordered list of sidebar links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarGroup {
    pub text: String,
    /// UI hint: the reader may fold this group.
    pub collapsable: bool,
    /// Never empty; rendered top to bottom.
    pub children: Vec<SidebarLink>,
}

/// Groups registered under one URL prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarEntry {
    pub prefix: String,
    pub groups: Vec<SidebarGroup>,
}

/// Mapping from URL prefix to sidebar groups, in declaration order.
///
/// Prefixes are unique and each starts and ends with `/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarSection {
    entries: Vec<SidebarEntry>,
}

impl SidebarSection {
    /// Groups registered for exactly `prefix`, or an empty slice.
    pub fn lookup(&self, prefix: &str) -> &[SidebarGroup] {
        self.entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .map(|entry| entry.groups.as_slice())
            .unwrap_or_default()
    }

    pub fn entries(&self) -> &[SidebarEntry] {
        &self.entries
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.prefix.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the literal sidebar table.
    pub(crate) fn build(raw: RawSidebar, diag: &mut ConfigDiagnostics) -> Self {
        let root = FieldPath::new("sidebar");
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();
        let mut entries = Vec::with_capacity(raw.len());

        for (position, (prefix, groups)) in raw.0.into_iter().enumerate() {
            let field = root.key(&prefix);

            if !is_slash_delimited(&prefix) {
                let fixed = format!("/{}/", prefix.trim_matches('/'));
                diag.error_with_hint(
                    field.clone(),
                    format!("sidebar prefix '{prefix}' must start and end with '/'"),
                    format!("use \"{}\"", fixed.replace("//", "/")),
                );
            }

            if let Some(first) = seen.get(&prefix) {
                diag.error(
                    field.clone(),
                    format!(
                        "duplicate sidebar prefix '{prefix}' (first declared as entry {})",
                        first + 1
                    ),
                );
            } else {
                seen.insert(prefix.clone(), position);
            }

            if groups.is_empty() {
                diag.warn(field.clone(), "prefix has no sidebar groups");
            }

            let groups = groups
                .into_iter()
                .enumerate()
                .map(|(i, group)| SidebarGroup::build(group, &field.index(i), diag))
                .collect();
            entries.push(SidebarEntry { prefix, groups });
        }

        Self { entries }
    }

    pub(crate) fn to_raw(&self) -> RawSidebar {
        OrderedMap(
            self.entries
                .iter()
                .map(|entry| {
                    let groups = entry.groups.iter().map(SidebarGroup::to_raw).collect();
                    (entry.prefix.clone(), groups)
                })
                .collect(),
        )
    }
}

impl Serialize for SidebarSection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.prefix, &entry.groups)?;
        }
        map.end()
    }
}

impl SidebarGroup {
    fn build(raw: RawSidebarGroup, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Self {
        check_text(&raw.text, field, diag);

        if raw.children.is_empty() {
            let name = if raw.text.trim().is_empty() {
                "(untitled)".to_owned()
            } else {
                format!("'{}'", raw.text)
            };
            diag.error(
                field.field("children"),
                format!("sidebar group {name} has no children"),
            );
        }

        let children_field = field.field("children");
        let children = raw
            .children
            .into_iter()
            .enumerate()
            .map(|(i, child)| SidebarLink::build(child, &children_field.index(i), diag))
            .collect();

        Self {
            text: raw.text,
            collapsable: raw.collapsable,
            children,
        }
    }

    fn to_raw(&self) -> RawSidebarGroup {
        RawSidebarGroup {
            text: self.text.clone(),
            collapsable: self.collapsable,
            children: self.children.iter().map(SidebarLink::to_raw).collect(),
        }
    }
}

impl SidebarLink {
    fn build(raw: RawSidebarLink, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Self {
        check_text(&raw.text, field, diag);
        check_link(&raw.link, field, diag);
        Self {
            text: raw.text,
            link: raw.link,
        }
    }

    fn to_raw(&self) -> RawSidebarLink {
        RawSidebarLink {
            text: self.text.clone(),
            link: self.link.clone(),
        }
    }
}
