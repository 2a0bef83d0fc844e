//! Sitenav - validated navigation config for documentation sites.
//!
//! A config file (`sitenav.toml` or JSON) declares the site language,
//! title, head tags, theme, navbar and per-prefix sidebar. [`SiteConfig`]
//! is its validated form: built once from [`RawSiteConfig`], reporting
//! every problem in one pass, then read-only.
//!
//! ```ignore
//! let config = SiteConfig::from_str(text, ConfigFormat::Toml)?;
//! for link in config.flatten_links() {
//!     println!("{}\t{}", link.text, link.resolve());
//! }
//! ```

pub mod cli;
pub mod config;
pub mod logger;
pub mod nav;
pub mod utils;

pub use config::{ConfigDiagnostics, ConfigError, ConfigFormat, RawSiteConfig, SiteConfig};
pub use nav::{Links, NavLink};
