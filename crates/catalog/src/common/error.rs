//! Encoding and catalog error definitions.
//!
//! This module defines the error families of the crate. It provides:
//! 1. **Field errors:** `EncodingError`, raised while checking one instruction's
//!    fixed bits against its format layout.
//! 2. **Collection errors:** `CatalogError`, raised while checking the definition
//!    set as a whole (uniqueness, ambiguity, documentation).
//! 3. **Aggregation:** `BuildError`, which carries every defect found in one pass.
//! 4. **Loading:** `LoadError`, covering definition parsing and building.
//!
//! Lookups never produce errors; a miss is an absent result.

use std::fmt;

use thiserror::Error;

use crate::encoding::InstructionFormat;

/// Field-level validation failure for one instruction encoding.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum EncodingError {
    /// The fixed-bit assignment names a field the format does not define.
    #[error("format {format} has no field named `{field}`")]
    UnknownField {
        /// Format the assignment was checked against.
        format: InstructionFormat,
        /// Field name as written in the definition.
        field: String,
    },

    /// The literal needs more bits than the field provides.
    #[error("value {value:#b} does not fit in the {width}-bit field `{field}`")]
    ValueOutOfRange {
        /// Target field.
        field: &'static str,
        /// Offending literal.
        value: u32,
        /// Field width in bits.
        width: u32,
    },

    /// A bit-string literal was written with a digit count different from the field width.
    #[error("literal for `{field}` has {digits} digits but the field is {width} bits wide")]
    WidthMismatch {
        /// Target field.
        field: &'static str,
        /// Number of binary digits in the literal.
        digits: u8,
        /// Field width in bits.
        width: u32,
    },

    /// Two fixed fields claim the same bit positions.
    #[error("fixed fields `{first}` and `{second}` overlap")]
    OverlappingFields {
        /// Field that claimed the bits first (in layout order).
        first: &'static str,
        /// Field whose bits collide with `first`.
        second: &'static str,
    },

    /// The assignment does not fix the opcode field.
    #[error("fixed bits do not include the opcode field")]
    MissingOpcode,

    /// An operand value was supplied for a field the instruction fixes.
    #[error("field `{field}` is fixed by the instruction and cannot take an operand")]
    FixedOperand {
        /// Field name.
        field: &'static str,
    },

    /// A textual literal is not a valid binary or hexadecimal pattern.
    #[error("malformed bit literal `{0}`")]
    MalformedLiteral(String),
}

/// Collection-level defect found while building a catalog.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CatalogError {
    /// Two definitions share a mnemonic (compared case-insensitively).
    #[error("duplicate mnemonic `{0}`")]
    DuplicateMnemonic(String),

    /// No fixed field distinguishes the two instructions, so some word decodes to both.
    #[error("`{0}` and `{1}` cannot be told apart by their fixed bits")]
    AmbiguousEncoding(String, String),

    /// A definition's fixed bits are inconsistent with its format.
    #[error("invalid encoding for `{0}`: {1}")]
    InvalidEncoding(String, #[source] EncodingError),

    /// A required descriptive entry is empty.
    #[error("`{mnemonic}` has an empty `{field}` entry")]
    MissingDocumentation {
        /// Instruction mnemonic.
        mnemonic: String,
        /// Name of the empty payload entry.
        field: &'static str,
    },

    /// A definition has a blank mnemonic.
    #[error("definition #{0} has an empty mnemonic")]
    EmptyMnemonic(usize),
}

/// Every defect found while building a catalog.
///
/// Construction keeps going after the first failure so that a hand-edited
/// definition table can be fixed in a single pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildError {
    errors: Vec<CatalogError>,
}

impl BuildError {
    /// Wraps a non-empty defect list.
    pub(crate) const fn new(errors: Vec<CatalogError>) -> Self {
        Self { errors }
    }

    /// Defects in the order they were found.
    pub fn errors(&self) -> &[CatalogError] {
        &self.errors
    }

    /// Consumes the error, returning the defect list.
    pub fn into_errors(self) -> Vec<CatalogError> {
        self.errors
    }

    /// Number of defects.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always false for errors returned by a build; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "catalog has {} defect(s)", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n  - {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BuildError {}

impl<'a> IntoIterator for &'a BuildError {
    type Item = &'a CatalogError;
    type IntoIter = std::slice::Iter<'a, CatalogError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Failure to produce a catalog from an external definition source.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Definition text could not be parsed.
    #[error("failed to parse instruction definitions: {0}")]
    Parse(#[from] serde_json::Error),

    /// Definitions parsed but failed validation.
    #[error(transparent)]
    Build(#[from] BuildError),
}
