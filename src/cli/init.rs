//! `sitenav init`: write a starter config.
//!
//! The starter describes a small game documentation site with one
//! collapsible sidebar group. Edit it in place rather than starting from
//! an empty file.

use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

use super::Cli;
use crate::config::{ConfigFormat, SiteConfig, expand_path};
use crate::log;

/// Starter `sitenav.toml`.
pub const STARTER_CONFIG: &str = r##"# Site navigation config
# Validate with `sitenav validate`, list links with `sitenav links`.

lang = "en-US"
title = "Palaten Docs"
description = "Guides for the Palaten game servers"

[[head]]
tag = "meta"
attrs = { name = "theme-color", content = "#694209" }

[[head]]
tag = "meta"
attrs = { name = "apple-mobile-web-app-capable", content = "yes" }

[[head]]
tag = "meta"
attrs = { name = "apple-mobile-web-app-status-bar-style", content = "black" }

[theme]
color_mode = "dark"
color_mode_switch = false

[[navbar]]
text = "Guide"
link = "/guide/"

[[navbar]]
text = "Frontline"
link = "/frontline/"

[[navbar]]
text = "LOTSR"
link = "/lotsr/"

# Sidebar groups are keyed by URL prefix. Child links are relative to it.
[[sidebar."/guide/"]]
text = "Guide"
collapsable = true
children = [
  { text = "Create Account", link = "create-account" },
  { text = "Game Launcher", link = "game-launcher" },
  { text = "Discord Server", link = "discord-server" },
  { text = "Website", link = "website" },
  { text = "Social Media", link = "social-media" },
]
"##;

/// Initialization mode determines where the config goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `sitenav init`: write into the current directory
    CurrentDir,
    /// `sitenav init <name>`: create a subdirectory first
    NewDir,
}

/// Write the starter config for `sitenav init [NAME]`.
///
/// With `dry`, the template is printed to stdout and nothing is written.
pub fn new_site(cli: &Cli, name: Option<&Path>, dry: bool) -> Result<()> {
    let file_name = expand_path(&cli.config);
    if dry {
        print!("{}", starter_content(ConfigFormat::from_path(&file_name))?);
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    let path = write_starter(&root, &file_name, mode)?;
    log!("init"; "created {}", path.display());
    Ok(())
}

/// Create `root/file_name` from the starter template.
///
/// The format follows `file_name`, so the written file matches what
/// `--config` will parse it as.
fn write_starter(root: &Path, file_name: &Path, mode: InitMode) -> Result<PathBuf> {
    validate_target(root, file_name, mode)?;

    let content = starter_content(ConfigFormat::from_path(file_name))?;

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    let path = root.join(file_name);
    fs::write(&path, content).with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path)
}

/// The starter template in `format`.
///
/// JSON is rendered from the parsed TOML template, so both describe the
/// same config.
fn starter_content(format: ConfigFormat) -> Result<String> {
    Ok(match format {
        ConfigFormat::Toml => STARTER_CONFIG.to_owned(),
        ConfigFormat::Json => {
            let config = SiteConfig::from_str(STARTER_CONFIG, ConfigFormat::Toml)?;
            format.render(&config.to_raw())?
        }
    })
}

/// Refuse to overwrite anything.
///
/// - `CurrentDir`: the config file must not exist yet
/// - `NewDir`: the directory must not exist yet
fn validate_target(root: &Path, file_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let path = root.join(file_name);
            if path.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Use `sitenav init <name>` to create a config in a new subdirectory.",
                    path.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CONFIG_FILE;
    use tempfile::TempDir;

    #[test]
    fn test_starter_is_valid() {
        let (raw, ignored) = ConfigFormat::Toml.parse_with_ignored(STARTER_CONFIG).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
        assert!(SiteConfig::build(raw).is_ok());
    }

    #[test]
    fn test_write_into_current_dir() {
        let temp = TempDir::new().unwrap();
        let path = write_starter(temp.path(), Path::new(CONFIG_FILE), InitMode::CurrentDir).unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), STARTER_CONFIG);
    }

    #[test]
    fn test_existing_config_is_kept() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        fs::write(&path, "title = \"Mine\"").unwrap();

        let result = write_starter(temp.path(), Path::new(CONFIG_FILE), InitMode::CurrentDir);
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "title = \"Mine\"");
    }

    #[test]
    fn test_other_files_do_not_block_current_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "# docs").unwrap();
        assert!(write_starter(temp.path(), Path::new(CONFIG_FILE), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_new_dir() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("docs");
        let path = write_starter(&root, Path::new(CONFIG_FILE), InitMode::NewDir).unwrap();
        assert_eq!(path, root.join(CONFIG_FILE));

        assert!(write_starter(&root, Path::new(CONFIG_FILE), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_json_starter() {
        let temp = TempDir::new().unwrap();
        let path = write_starter(temp.path(), Path::new("nav.json"), InitMode::CurrentDir).unwrap();

        let loaded = SiteConfig::load(&path, true).unwrap();
        assert_eq!(loaded, crate::config::test_starter_config());
    }

    #[test]
    fn test_starter_content_follows_format() {
        assert_eq!(starter_content(ConfigFormat::Toml).unwrap(), STARTER_CONFIG);

        let json = starter_content(ConfigFormat::Json).unwrap();
        assert!(json.trim_start().starts_with('{'));
        let config = SiteConfig::from_str(&json, ConfigFormat::Json).unwrap();
        assert_eq!(config, crate::config::test_starter_config());
    }
}
