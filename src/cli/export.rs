//! `sitenav export`: print the normalized config.
//!
//! Every default is written out, so the exported file describes exactly
//! the value the renderer sees and builds to the same config again.

use anyhow::Result;
use std::path::Path;

use super::{Cli, common::load_config, common::write_output};
use crate::config::ConfigFormat;
use crate::debug;

pub fn export_config(cli: &Cli, format: ConfigFormat, output: Option<&Path>) -> Result<()> {
    let config = load_config(cli)?;
    debug!("export"; "rendering as {:?}", format);
    let content = format.render(&config.to_raw())?;
    write_output(&content, output)
}
