//! `[theme]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [theme]
//! color_mode = "dark"       # light | dark | auto
//! color_mode_switch = false # hide the reader's toggle
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::raw::RawThemeConfig;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme metadata handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ThemeConfig {
    /// Initial color mode.
    pub color_mode: ColorMode,
    /// Whether readers may toggle the color mode.
    pub color_mode_switch: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Auto,
            color_mode_switch: true,
        }
    }
}

impl ThemeConfig {
    pub(crate) fn build(raw: RawThemeConfig, diag: &mut ConfigDiagnostics) -> Self {
        let defaults = Self::default();
        let field = FieldPath::new("theme").field("color_mode");

        let color_mode = match raw.color_mode.as_deref() {
            None => defaults.color_mode,
            Some(value) => value.parse().unwrap_or_else(|_| {
                diag.error_with_hint(
                    field,
                    format!("unknown color mode '{value}'"),
                    format!("use one of: {}", ColorMode::NAMES.join(", ")),
                );
                defaults.color_mode
            }),
        };

        Self {
            color_mode,
            color_mode_switch: raw.color_mode_switch.unwrap_or(defaults.color_mode_switch),
        }
    }

    pub(crate) fn to_raw(self) -> RawThemeConfig {
        RawThemeConfig {
            color_mode: Some(self.color_mode.to_string()),
            color_mode_switch: Some(self.color_mode_switch),
        }
    }
}

/// Recognized color modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
    /// Follow the reader's system preference.
    #[default]
    Auto,
}

impl ColorMode {
    pub const NAMES: [&'static str; 3] = ["light", "dark", "auto"];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(color_mode: Option<&str>, switch: Option<bool>) -> (ThemeConfig, ConfigDiagnostics) {
        let mut diag = ConfigDiagnostics::new();
        let theme = ThemeConfig::build(
            RawThemeConfig {
                color_mode: color_mode.map(str::to_owned),
                color_mode_switch: switch,
            },
            &mut diag,
        );
        (theme, diag)
    }

    #[test]
    fn test_defaults() {
        let (theme, diag) = build(None, None);
        assert!(diag.is_empty());
        assert_eq!(theme.color_mode, ColorMode::Auto);
        assert!(theme.color_mode_switch);
    }

    #[test]
    fn test_recognized_modes() {
        for name in ColorMode::NAMES {
            let (theme, diag) = build(Some(name), Some(false));
            assert!(diag.is_empty());
            assert_eq!(theme.color_mode.as_str(), name);
            assert!(!theme.color_mode_switch);
        }
    }

    #[test]
    fn test_unknown_mode() {
        let (_, diag) = build(Some("Dark"), None);
        assert!(diag.has_error_at("theme.color_mode"));
        assert!(diag.errors()[0].message.contains("'Dark'"));
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("use one of: light, dark, auto")
        );
    }

    #[test]
    fn test_to_raw_is_explicit() {
        let (theme, _) = build(Some("dark"), None);
        let raw = theme.to_raw();
        assert_eq!(raw.color_mode.as_deref(), Some("dark"));
        assert_eq!(raw.color_mode_switch, Some(true));
    }
}
