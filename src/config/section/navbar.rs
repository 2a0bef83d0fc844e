//! `[[navbar]]` entries: top-level links shown on every page.
//!
//! # Example
//!
//! ```toml
//! [[navbar]]
//! text = "Guide"
//! link = "/guide/"
//! ```

use serde::Serialize;

use super::check::{check_link, check_text};
use crate::config::raw::RawNavbarEntry;
use crate::config::{ConfigDiagnostics, FieldPath};

/// A validated navbar link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavbarEntry {
    /// Display label.
    pub text: String,
    /// Target path, relative or absolute.
    pub link: String,
}

impl NavbarEntry {
    pub(crate) fn build(raw: RawNavbarEntry, field: &FieldPath, diag: &mut ConfigDiagnostics) -> Self {
        check_text(&raw.text, field, diag);
        check_link(&raw.link, field, diag);
        Self {
            text: raw.text,
            link: raw.link,
        }
    }

    pub(crate) fn to_raw(&self) -> RawNavbarEntry {
        RawNavbarEntry {
            text: self.text.clone(),
            link: self.link.clone(),
        }
    }
}

/// Validate every navbar entry in declaration order.
pub(crate) fn build_navbar(raw: Vec<RawNavbarEntry>, diag: &mut ConfigDiagnostics) -> Vec<NavbarEntry> {
    let field = FieldPath::new("navbar");
    raw.into_iter()
        .enumerate()
        .map(|(i, entry)| NavbarEntry::build(entry, &field.index(i), diag))
        .collect()
}
