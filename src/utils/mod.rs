//! Small helpers shared across the crate.

pub mod html;
mod plural;

pub use plural::plural_count;
