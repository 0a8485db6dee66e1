//! Style resolver for portfolio sections.
//!
//! A pure mapping from a section's presentation fields to concrete CSS
//! declarations, shared verbatim by the live preview and the static export.

pub mod resolver;

pub use resolver::{resolve, ResolvedStyle};
