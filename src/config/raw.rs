//! Literal form of the site configuration.
//!
//! These types mirror the config file one-to-one and accept anything
//! that is structurally well-typed. Missing strings become empty, the
//! color mode stays a free string and the sidebar keeps every key in
//! declaration order (duplicates included), so that
//! [`SiteConfig::build`](crate::config::SiteConfig::build) can report
//! every defect in a single pass.
//!
//! # Example
//!
//! ```toml
//! lang = "en-US"
//! title = "Palaten Docs"
//! description = "Documentation for Palaten"
//!
//! [[head]]
//! tag = "meta"
//! attrs = { name = "theme-color", content = "#694209" }
//!
//! [theme]
//! color_mode = "dark"
//! color_mode_switch = false
//!
//! [[navbar]]
//! text = "Guide"
//! link = "/guide/"
//!
//! [[sidebar."/guide/"]]
//! text = "Guide"
//! collapsable = true
//! children = [{ text = "Create Account", link = "create-account" }]
//! ```

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Default language tag when `lang` is omitted.
pub const DEFAULT_LANG: &str = "en-US";

/// Root of the literal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSiteConfig {
    /// Language tag (e.g., "en-US").
    pub lang: String,

    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Public base path, `/` when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,

    /// Extra tags injected into every page `<head>`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub head: Vec<RawHeadTag>,

    /// Theme metadata.
    pub theme: RawThemeConfig,

    /// Top-level navbar links.
    pub navbar: Vec<RawNavbarEntry>,

    /// URL prefix -> sidebar groups.
    pub sidebar: RawSidebar,
}

impl Default for RawSiteConfig {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.into(),
            title: String::new(),
            description: String::new(),
            base: None,
            head: Vec::new(),
            theme: RawThemeConfig::default(),
            navbar: Vec::new(),
            sidebar: RawSidebar::default(),
        }
    }
}

/// A `<head>` element: tag name, attributes and optional inner content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawHeadTag {
    pub tag: String,
    #[serde(skip_serializing_if = "OrderedMap::is_empty")]
    pub attrs: RawAttrs,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Theme metadata as written by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawThemeConfig {
    /// One of "light", "dark", "auto".
    #[serde(alias = "colorMode", skip_serializing_if = "Option::is_none")]
    pub color_mode: Option<String>,

    /// Whether readers may toggle the color mode.
    #[serde(alias = "colorModeSwitch", skip_serializing_if = "Option::is_none")]
    pub color_mode_switch: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawNavbarEntry {
    pub text: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSidebarGroup {
    pub text: String,
    #[serde(alias = "collapsible")]
    pub collapsable: bool,
    pub children: Vec<RawSidebarLink>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawSidebarLink {
    pub text: String,
    pub link: String,
}

// ============================================================================
// OrderedMap
// ============================================================================

/// String-keyed table in declaration order.
///
/// Unlike a map, repeated keys are kept so validation can name them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedMap<V>(pub Vec<(String, V)>);

/// Sidebar table: URL prefix -> groups.
pub type RawSidebar = OrderedMap<Vec<RawSidebarGroup>>;

/// Head tag attributes: name -> value.
pub type RawAttrs = OrderedMap<String>;

impl<V> OrderedMap<V> {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn push(&mut self, key: impl Into<String>, value: V) {
        self.0.push((key.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }
}

impl<V> FromIterator<(String, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = OrderedMap<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a table with string keys")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(OrderedMap(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}
