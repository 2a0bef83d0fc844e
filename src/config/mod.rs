//! Site navigation configuration (`sitenav.toml`).
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── raw            # Literal form, as written in the config file
//! ├── format         # TOML / JSON parsing with unknown-field detection
//! ├── section/       # Validated sections
//! │   ├── info       # lang, title, description, base
//! │   ├── head       # [[head]]
//! │   ├── theme      # [theme]
//! │   ├── navbar     # [[navbar]]
//! │   └── sidebar    # [sidebar]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! A [`SiteConfig`] only exists once every check has passed. It is built
//! once, never mutated, and can be shared freely between threads.

mod format;
pub mod raw;
pub mod section;
pub mod types;
mod util;

pub use format::ConfigFormat;
pub use raw::RawSiteConfig;
pub use section::{
    ColorMode, HeadTag, NavbarEntry, SidebarEntry, SidebarGroup, SidebarLink, SidebarSection,
    ThemeConfig,
};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{expand_path, find_config_file};

use crate::nav::Links;
use anyhow::Result;
use section::{head, info, navbar};
use serde::Serialize;
use std::{fs, path::Path};

/// Default config filename
pub const CONFIG_FILE: &str = "sitenav.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Validated site configuration handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    lang: String,
    title: String,
    description: String,
    base: String,
    head: Vec<HeadTag>,
    theme: ThemeConfig,
    navbar: Vec<NavbarEntry>,
    sidebar: SidebarSection,
}

impl SiteConfig {
    /// Validate the literal form.
    ///
    /// Every violation is collected; on failure the returned diagnostics
    /// list all of them. Warnings never cause a failure.
    pub fn build(raw: RawSiteConfig) -> Result<Self, ConfigDiagnostics> {
        Self::build_with_warnings(raw).map(|(config, _)| config)
    }

    /// Like [`build`](Self::build), but hands back the warnings of a
    /// successful build (an empty description, for instance).
    pub fn build_with_warnings(
        raw: RawSiteConfig,
    ) -> Result<(Self, ConfigDiagnostics), ConfigDiagnostics> {
        let mut diag = ConfigDiagnostics::new();
        let config = Self::build_into(raw, &mut diag);
        if diag.has_errors() {
            Err(diag)
        } else {
            Ok((config, diag))
        }
    }

    /// Validate into an existing diagnostics sink.
    ///
    /// The returned value is only meaningful when `diag` has no errors.
    fn build_into(raw: RawSiteConfig, diag: &mut ConfigDiagnostics) -> Self {
        info::check_lang(&raw.lang, diag);
        info::check_title(&raw.title, diag);
        info::check_description(&raw.description, diag);
        let base = info::resolve_base(raw.base, diag);

        Self {
            lang: raw.lang,
            title: raw.title,
            description: raw.description,
            base,
            head: head::build_head(raw.head, diag),
            theme: ThemeConfig::build(raw.theme, diag),
            navbar: navbar::build_navbar(raw.navbar, diag),
            sidebar: SidebarSection::build(raw.sidebar, diag),
        }
    }

    /// Convert back to the literal form.
    ///
    /// Defaults are written out explicitly, so building the result again
    /// yields an identical value.
    pub fn to_raw(&self) -> RawSiteConfig {
        RawSiteConfig {
            lang: self.lang.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            base: Some(self.base.clone()),
            head: head::head_to_raw(&self.head),
            theme: self.theme.to_raw(),
            navbar: self.navbar.iter().map(NavbarEntry::to_raw).collect(),
            sidebar: self.sidebar.to_raw(),
        }
    }

    /// Sidebar groups registered for exactly `prefix`.
    ///
    /// Returns an empty slice when nothing matches; the renderer then
    /// falls back to its default sidebar.
    pub fn lookup_sidebar(&self, prefix: &str) -> &[SidebarGroup] {
        self.sidebar.lookup(prefix)
    }

    /// Every `(text, link)` pair: navbar first, then sidebar depth-first.
    ///
    /// Each call starts a fresh walk.
    pub fn flatten_links(&self) -> Links<'_> {
        Links::new(&self.navbar, &self.sidebar)
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn head(&self) -> &[HeadTag] {
        &self.head
    }

    pub fn theme(&self) -> ThemeConfig {
        self.theme
    }

    pub fn navbar(&self) -> &[NavbarEntry] {
        &self.navbar
    }

    pub fn sidebar(&self) -> &SidebarSection {
        &self.sidebar
    }

    // ========================================================================
    // loading
    // ========================================================================

    /// Parse and validate configuration without printing anything.
    ///
    /// Unknown fields are warnings, or errors when `strict` is set. On
    /// success the returned diagnostics hold the warnings.
    pub fn parse(
        content: &str,
        format: ConfigFormat,
        strict: bool,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let (raw, ignored) = format.parse_with_ignored(content)?;

        let mut diag = ConfigDiagnostics::new();
        for field in ignored {
            if strict {
                diag.error(field, "unknown field");
            } else {
                diag.warn(field, "unknown field, ignored");
            }
        }

        let config = Self::build_into(raw, &mut diag);
        if diag.has_errors() {
            return Err(ConfigError::Diagnostics(diag));
        }
        Ok((config, diag))
    }

    /// Parse and validate configuration from a string, printing warnings.
    pub fn from_str(content: &str, format: ConfigFormat) -> Result<Self> {
        Self::report(Self::parse(content, format, false))
    }

    /// Load configuration from a file.
    ///
    /// The format follows the file extension. Unknown fields are
    /// warnings, or errors when `strict` is set. Warnings are printed;
    /// errors are returned together as [`ConfigError::Diagnostics`].
    pub fn load(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let format = ConfigFormat::from_path(path);
        crate::debug!("config"; "parsing {} as {:?}", path.display(), format);
        Self::report(Self::parse(&content, format, strict))
    }

    /// Print the warnings of a parse, whether or not it failed.
    fn report(parsed: Result<(Self, ConfigDiagnostics), ConfigError>) -> Result<Self> {
        match parsed {
            Ok((config, diag)) => {
                diag.print_warnings();
                Ok(config)
            }
            Err(ConfigError::Diagnostics(diag)) => {
                diag.print_warnings();
                Err(ConfigError::Diagnostics(diag).into())
            }
            Err(err) => Err(err.into()),
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse and build a config with a title already set.
/// Panics on unknown fields or validation errors.
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!("title = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (raw, ignored) = ConfigFormat::Toml.parse_with_ignored(&content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    SiteConfig::build(raw).unwrap_or_else(|diag| panic!("{diag}"))
}

/// The starter navigation written by `sitenav init`.
#[cfg(test)]
pub fn test_starter_config() -> SiteConfig {
    SiteConfig::from_str(crate::cli::init::STARTER_CONFIG, ConfigFormat::Toml).unwrap()
}

// ============================================================================
// tests
// ============================================================================
