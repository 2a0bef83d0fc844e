//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{CONFIG_FILE, ConfigFormat};

/// Validate and inspect the navigation config of a documentation site
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the starter config instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the config and report every problem found
    #[command(visible_alias = "v")]
    Validate {
        /// Treat unknown fields as errors
        #[arg(short, long)]
        strict: bool,
    },

    /// List every navbar and sidebar link in render order
    #[command(visible_alias = "l")]
    Links {
        #[command(flatten)]
        args: LinksArgs,
    },

    /// Show the sidebar groups registered for a URL prefix
    #[command(visible_alias = "s")]
    Sidebar {
        /// URL prefix, e.g. /guide/
        prefix: String,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the normalized config with every default written out
    #[command(visible_alias = "e")]
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

/// Links command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct LinksArgs {
    /// Join relative sidebar links onto their prefix
    #[arg(short, long)]
    pub resolve: bool,

    /// Output JSON instead of a text table
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long, requires = "json")]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Cli {
    /// Whether unknown config fields should fail the load.
    pub const fn is_strict(&self) -> bool {
        matches!(self.command, Commands::Validate { strict: true })
    }
}
