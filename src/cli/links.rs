//! `sitenav links`: print every navigation link in render order.

use anyhow::Result;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::Write;

use super::{Cli, LinksArgs, common::load_config, common::write_output};
use crate::config::SiteConfig;
use crate::debug;
use crate::nav::{LinkOrigin, NavLink};
use crate::utils::plural_count;

/// One output row; `link` is replaced by the resolved path with `--resolve`.
#[derive(Debug, Serialize)]
struct LinkRow<'a> {
    text: &'a str,
    link: Cow<'a, str>,
    #[serde(flatten)]
    origin: LinkOrigin<'a>,
}

impl<'a> LinkRow<'a> {
    fn new(nav: NavLink<'a>, resolve: bool) -> Self {
        let link = if resolve {
            nav.resolve()
        } else {
            Cow::Borrowed(nav.link)
        };
        Self {
            text: nav.text,
            link,
            origin: nav.origin,
        }
    }
}

pub fn list_links(cli: &Cli, args: &LinksArgs) -> Result<()> {
    let config = load_config(cli)?;
    let output = render_links(&config, args)?;
    write_output(&output, args.output.as_deref())
}

fn render_links(config: &SiteConfig, args: &LinksArgs) -> Result<String> {
    let rows: Vec<_> = config
        .flatten_links()
        .map(|nav| LinkRow::new(nav, args.resolve))
        .collect();
    debug!("links"; "{}", plural_count(rows.len(), "link"));

    if args.json {
        let json = if args.pretty {
            serde_json::to_string_pretty(&rows)?
        } else {
            serde_json::to_string(&rows)?
        };
        return Ok(json);
    }

    Ok(text_table(&rows))
}

/// `text<TAB>link` per line, so the output pipes into `cut` and `awk`.
fn text_table(rows: &[LinkRow<'_>]) -> String {
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{}\t{}", row.text, row.link);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_starter_config;

    fn args(resolve: bool, json: bool) -> LinksArgs {
        LinksArgs {
            resolve,
            json,
            pretty: false,
            output: None,
        }
    }

    #[test]
    fn test_text_table() {
        let config = test_starter_config();
        let text = render_links(&config, &args(false, false)).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "Guide\t/guide/");
        assert_eq!(lines[3], "Create Account\tcreate-account");
    }

    #[test]
    fn test_text_table_resolved() {
        let config = test_starter_config();
        let text = render_links(&config, &args(true, false)).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "Guide\t/guide/");
        assert_eq!(lines[7], "Social Media\t/guide/social-media");
    }

    #[test]
    fn test_json_rows() {
        let config = test_starter_config();
        let json = render_links(&config, &args(true, true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0]["source"], "navbar");
        assert_eq!(rows[4]["source"], "sidebar");
        assert_eq!(rows[4]["prefix"], "/guide/");
        assert_eq!(rows[4]["group"], "Guide");
        assert_eq!(rows[4]["link"], "/guide/game-launcher");
    }

    #[test]
    fn test_empty_config() {
        let config = crate::config::test_parse_config("");
        assert_eq!(render_links(&config, &args(false, false)).unwrap(), "");
        assert_eq!(render_links(&config, &args(false, true)).unwrap(), "[]");
    }
}
