//! Common utilities and types shared by the encoding model and the catalog.
//!
//! This module provides:
//! 1. **Constants:** Instruction width and the opcode field position.
//! 2. **Error Handling:** Field-level, collection-level, aggregated build, and
//!    loading errors.

/// Common constants used throughout the crate.
pub mod constants;

/// Error types for encoding validation and catalog construction.
pub mod error;

pub use constants::{INSTRUCTION_WIDTH, OPCODE_MASK};
pub use error::{BuildError, CatalogError, EncodingError, LoadError};
