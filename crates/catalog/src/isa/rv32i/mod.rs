//! RISC-V Base Integer Instruction Set (RV32I).
//!
//! Defines the 40 base integer instructions available to every 32-bit RISC-V
//! implementation, together with their reference-page documentation.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes (Load, Store, Branch, Jal, OpImm, OpReg, etc.).
//! - `funct3`: Minor opcodes distinguishing instructions within a major opcode.
//! - `funct7`: Additional opcode bits for R-type instructions and shift-immediates.
//! - `funct12`: System function codes for `ECALL` and `EBREAK`.
//! - `table`: The instruction definitions, grouped as on the reference pages.

/// Function code 3 definitions for base integer operations.
pub mod funct3;

/// Function code 7 definitions for base integer operations.
pub mod funct7;

/// Function code 12 definitions for system operations.
pub mod funct12;

/// Base integer instruction set opcodes.
pub mod opcodes;

mod table;

use crate::catalog::{Catalog, CatalogDefinition, DefinitionSource, InstructionDef};
use crate::common::{BuildError, LoadError};
use crate::config::BuildConfig;

/// Catalog title of the built-in table.
pub const NAME: &str = "RV32I Base Integer Instruction Set";

/// Catalog summary of the built-in table.
pub const DESCRIPTION: &str = "RISC-V 32-bit base integer instruction set: arithmetic, logical, \
     memory access, and control-flow instructions (40 instructions)";

/// The RV32I definitions in reference-page order.
pub fn definitions() -> Vec<InstructionDef> {
    table::definitions()
}

/// The RV32I definitions with catalog metadata.
pub fn definition() -> CatalogDefinition {
    CatalogDefinition {
        name: NAME.to_string(),
        description: DESCRIPTION.to_string(),
        instructions: definitions(),
    }
}

/// Builds the RV32I catalog with the default configuration.
///
/// # Errors
///
/// Only if the built-in table itself is defective.
pub fn catalog() -> Result<Catalog, BuildError> {
    Catalog::from_definition(definition(), &BuildConfig::default())
}

/// [`DefinitionSource`] yielding the built-in RV32I table.
#[derive(Clone, Copy, Debug, Default)]
pub struct Rv32i;

impl DefinitionSource for Rv32i {
    fn load(&self) -> Result<CatalogDefinition, LoadError> {
        Ok(definition())
    }
}
