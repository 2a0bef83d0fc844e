//! Read-side views over a validated navigation config.
//!
//! - [`link`]: syntactic link classification and prefix joining
//! - [`flatten`]: lazy depth-first walk over every navbar/sidebar link

mod flatten;
pub mod link;

pub use flatten::{LinkOrigin, Links, NavLink};
pub use link::LinkKind;
