//! `sitenav validate`: build the config and report.
//!
//! A failed build surfaces as [`ConfigError::Diagnostics`](crate::config::ConfigError),
//! which `main` prints in full before exiting non-zero.

use anyhow::Result;

use super::{Cli, common::load_config};
use crate::config::SiteConfig;
use crate::log;
use crate::utils::plural_count;

pub fn validate_config(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    for tag in config.head() {
        crate::debug!("head"; "{}", tag.render());
    }
    log!("validate"; "{}", summary(&config));
    Ok(())
}

/// One-line description of a valid config.
fn summary(config: &SiteConfig) -> String {
    let groups: usize = config
        .sidebar()
        .entries()
        .iter()
        .map(|entry| entry.groups.len())
        .sum();

    format!(
        "'{}' is valid: {}, {} in {}, {} total",
        config.title(),
        plural_count(config.navbar().len(), "navbar link"),
        plural_count(groups, "sidebar group"),
        plural_count(config.sidebar().len(), "section"),
        plural_count(config.flatten_links().count(), "link"),
    )
}
