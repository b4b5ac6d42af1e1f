//! # Unit Suites
//!
//! One suite per library module: the encoding model, the catalog and its
//! shared handle, build configuration, error rendering, and the built-in
//! ISA tables.


/// Build configuration defaults and deserialization.
pub mod config;

/// Bit fields, format layouts, and fixed-bit validation.
pub mod encoding;

/// Error rendering and conversions.
pub mod errors;
