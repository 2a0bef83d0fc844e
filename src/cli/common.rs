//! Common utilities shared across CLI commands.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::Cli;
use crate::config::{SiteConfig, expand_path, find_config_file};
use crate::log;

/// Locate the config file named by `--config`.
///
/// Relative names are searched upward from the current directory.
pub fn resolve_config_path(cli: &Cli) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let name = expand_path(&cli.config);

    match find_config_file(&name, &cwd) {
        Some(path) => Ok(path),
        None => bail!(
            "Config file '{}' not found. Run 'sitenav init' to create one.",
            cli.config.display()
        ),
    }
}

/// Resolve, load and validate the config for a command.
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let path = resolve_config_path(cli)?;
    crate::debug!("config"; "using {}", path.display());
    SiteConfig::load(&path, cli.is_strict())
}

/// Write command output to a file, or to stdout when no file is given.
pub fn write_output(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
            log!("output"; "wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            if !content.ends_with('\n') {
                writeln!(stdout)?;
            }
        }
    }
    Ok(())
}
