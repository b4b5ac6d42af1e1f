//! RISC-V instruction reference catalog.
//!
//! This crate turns hand-authored instruction descriptions into a validated,
//! queryable catalog. It provides:
//! 1. **Encoding:** Typed bit-field layouts for every RV32I instruction format,
//!    with field extraction, insertion, and fixed-bit validation.
//! 2. **Catalog:** An immutable instruction collection with lookups by
//!    mnemonic, format, category, and raw instruction word.
//! 3. **ISA:** The built-in RV32I base integer table and its opcode constants.
//! 4. **Configuration:** Build-time validation options.
//!
//! A catalog is built once and then shared read-only:
//!
//! ```
//! use rvref_core::isa::rv32i;
//!
//! let catalog = rv32i::catalog().unwrap();
//! let add = catalog.decode(0x0031_0133).unwrap();
//! assert_eq!(add.mnemonic(), "ADD");
//! assert!(catalog.by_mnemonic("add").is_some());
//! ```

/// Instruction catalog (definitions, validated records, queries, shared handle).
pub mod catalog;
/// Common types and constants (error families, instruction width).
pub mod common;
/// Catalog build configuration.
pub mod config;
/// Encoding model (bit fields, instruction formats, validation and matching).
pub mod encoding;
/// Instruction set tables (RV32I base integer).
pub mod isa;

/// Validated instruction catalog; build with `Catalog::build` or `isa::rv32i::catalog`.
pub use crate::catalog::Catalog;
/// A single validated catalog entry.
pub use crate::catalog::Instruction;
/// Definition record consumed by `Catalog::build`.
pub use crate::catalog::InstructionDef;
/// Build options; use `BuildConfig::default()` or deserialize from JSON.
pub use crate::config::BuildConfig;
/// Field-level and collection-level error families.
pub use crate::common::{BuildError, CatalogError, EncodingError, LoadError};
/// Bit-field and format types of the encoding model.
pub use crate::encoding::{BitField, FieldLiteral, InstructionFormat};
