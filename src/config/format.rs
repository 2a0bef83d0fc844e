//! Config file formats.
//!
//! TOML is the native format. JSON is accepted as well, so configs
//! exported from other documentation tools (with camelCase keys) can be
//! validated directly.

use serde::Serialize;
use std::path::Path;

use super::raw::RawSiteConfig;
use super::{ConfigError, FieldPath};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension; anything but `.json` is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Toml,
        }
    }

    /// Parse content, collecting the path of every unknown field.
    pub fn parse_with_ignored(
        self,
        content: &str,
    ) -> Result<(RawSiteConfig, Vec<FieldPath>), ConfigError> {
        let mut ignored = Vec::new();

        let raw = match self {
            Self::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
                    ignored.push(ignored_field_path(&path));
                })?
            }
            Self::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                let raw = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
                    ignored.push(ignored_field_path(&path));
                })?;
                deserializer.end()?;
                raw
            }
        };
        Ok((raw, ignored))
    }

    /// Render the literal form.
    pub fn render(self, raw: &RawSiteConfig) -> anyhow::Result<String> {
        Ok(match self {
            Self::Toml => toml::to_string(raw)?,
            Self::Json => {
                let mut out = serde_json::to_string_pretty(raw)?;
                out.push('\n');
                out
            }
        })
    }
}

/// Convert a `serde_ignored` path into the diagnostics path style.
///
/// Keys directly under `sidebar` are URL prefixes and get quoted;
/// every other key is a field name.
fn ignored_field_path(path: &serde_ignored::Path<'_>) -> FieldPath {
    use serde_ignored::Path;

    match path {
        Path::Root => FieldPath::new(""),
        Path::Seq { parent, index } => ignored_field_path(parent).index(*index),
        Path::Map { parent, key } => {
            let base = ignored_field_path(parent);
            match parent {
                Path::Map {
                    parent: Path::Root,
                    key: section,
                } if section == "sidebar" => base.key(key),
                _ => base.field(key),
            }
        }
        Path::Some { parent } | Path::NewtypeStruct { parent } | Path::NewtypeVariant { parent } => {
            ignored_field_path(parent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("sitenav.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("docs/nav.JSON")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("sitenav")), ConfigFormat::Toml);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "title = \"Docs\"\n[[navbar]]\ntext = \"Guide\"\nlink = \"/guide/\"\nicon = \"book\"";
        let (raw, ignored) = ConfigFormat::Toml.parse_with_ignored(content).unwrap();
        assert_eq!(raw.title, "Docs");
        assert_eq!(ignored.len(), 1);
        assert_eq!(ignored[0].as_str(), "navbar[0].icon");
    }

    #[test]
    fn test_json_unknown_fields_detected() {
        let content = r#"{ "title": "Docs", "bundler": "vite" }"#;
        let (raw, ignored) = ConfigFormat::Json.parse_with_ignored(content).unwrap();
        assert_eq!(raw.title, "Docs");
        assert_eq!(ignored, [FieldPath::new("bundler")]);
    }

    #[test]
    fn test_syntax_errors() {
        assert!(matches!(
            ConfigFormat::Toml.parse_with_ignored("[navbar\ntext = 1"),
            Err(ConfigError::Toml(_))
        ));
        assert!(matches!(
            ConfigFormat::Json.parse_with_ignored("{ \"title\": "),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            ConfigFormat::Json.parse_with_ignored("{} {}"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_unknown_field_paths_match_diagnostics() {
        let content = r#"{
            "theme": { "accent": "gold" },
            "sidebar": {
                "/g/": [{ "text": "G", "icon": "book", "children": [{ "text": "a", "link": "a", "badge": 1 }] }]
            }
        }"#;
        let (_, ignored) = ConfigFormat::Json.parse_with_ignored(content).unwrap();
        let paths: Vec<_> = ignored.iter().map(FieldPath::as_str).collect();
        assert_eq!(
            paths,
            [
                "theme.accent",
                "sidebar.\"/g/\"[0].icon",
                "sidebar.\"/g/\"[0].children[0].badge",
            ]
        );
    }
}
