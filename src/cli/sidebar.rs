//! `sitenav sidebar <PREFIX>`: show the groups a page under PREFIX gets.

use anyhow::Result;

use super::{Cli, common::load_config, common::write_output};
use crate::config::SiteConfig;
use crate::log;

pub fn show_sidebar(cli: &Cli, prefix: &str, pretty: bool) -> Result<()> {
    let config = load_config(cli)?;

    if config.lookup_sidebar(prefix).is_empty() {
        let known: Vec<_> = config.sidebar().prefixes().collect();
        if known.is_empty() {
            log!("sidebar"; "no sidebar configured");
        } else {
            log!("sidebar"; "no sidebar for '{}', known prefixes: {}", prefix, known.join(", "));
        }
    }

    write_output(&render_sidebar(&config, prefix, pretty)?, None)
}

fn render_sidebar(config: &SiteConfig, prefix: &str, pretty: bool) -> Result<String> {
    let groups = config.lookup_sidebar(prefix);
    let json = if pretty {
        serde_json::to_string_pretty(groups)?
    } else {
        serde_json::to_string(groups)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_starter_config;

    #[test]
    fn test_render_guide() {
        let config = test_starter_config();
        let json = render_sidebar(&config, "/guide/", false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["text"], "Guide");
        assert_eq!(value[0]["collapsable"], true);
        assert_eq!(value[0]["children"][1]["link"], "game-launcher");
    }

    #[test]
    fn test_render_unknown_prefix() {
        let config = test_starter_config();
        assert_eq!(render_sidebar(&config, "/guide", false).unwrap(), "[]");
        assert_eq!(render_sidebar(&config, "/frontline/", true).unwrap(), "[]");
    }
}
