//! # Encoding Model Tests
//!
//! Covers the format layouts, field access primitives, and fixed-bit
//! validation.

/// Layout partitions, sub-fields, and field extraction / insertion.
pub mod layouts;

/// Property tests over random words and field values.
pub mod properties;
