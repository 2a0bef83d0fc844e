//! Sitenav - validate and inspect documentation site navigation.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use sitenav::cli::{self, Cli, Commands};
use sitenav::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_site(&cli, name.as_deref(), *dry),
        Commands::Validate { .. } => cli::validate::validate_config(&cli),
        Commands::Links { args } => cli::links::list_links(&cli, args),
        Commands::Sidebar { prefix, pretty } => cli::sidebar::show_sidebar(&cli, prefix, *pretty),
        Commands::Export { format, output } => {
            cli::export::export_config(&cli, *format, output.as_deref())
        }
    }
}
