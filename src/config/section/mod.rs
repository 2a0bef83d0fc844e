//! Configuration section definitions.
//!
//! Each module corresponds to a part of `sitenav.toml`:
//!
//! | Module    | Key             | Purpose                               |
//! |-----------|-----------------|---------------------------------------|
//! | `info`    | top level       | lang, title, description, base        |
//! | `head`    | `[[head]]`      | Extra `<head>` elements               |
//! | `theme`   | `[theme]`       | Color mode and toggle                 |
//! | `navbar`  | `[[navbar]]`    | Top-level navigation links            |
//! | `sidebar` | `[sidebar]`     | Per-prefix sidebar groups             |

mod check;
pub mod head;
pub mod info;
pub mod navbar;
pub mod sidebar;
pub mod theme;

pub use head::HeadTag;
pub use navbar::NavbarEntry;
pub use sidebar::{SidebarEntry, SidebarGroup, SidebarLink, SidebarSection};
pub use theme::{ColorMode, ThemeConfig};
