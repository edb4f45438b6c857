//! Source locations attached to compiler diagnostics.
//!
//! This crate provides [`SourceLocation`], the location information a compiler
//! stage reports with a diagnostic, and [`LocationEntry`], the normalized
//! `{file, line, location_string}` form written to the export document.

#![warn(missing_docs)]

pub mod entry;
pub mod location;

pub use entry::{LocationEntry, UNKNOWN_LOCATION};
pub use location::SourceLocation;
