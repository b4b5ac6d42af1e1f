//! Bit fields and fixed-bit literals.
//!
//! A [`BitField`] names a contiguous run of bits inside a 32-bit instruction
//! word. A [`FieldLiteral`] is the constant a definition assigns to one field;
//! a [`FixedField`] is a literal that has been resolved and checked against the
//! field it targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::EncodingError;
use crate::common::constants::{FULL_WORD_MASK, INSTRUCTION_WIDTH, MAX_BIT};

/// A named, contiguous bit range `[high:low]` of an instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct BitField {
    name: &'static str,
    high: u8,
    low: u8,
}

impl BitField {
    /// Creates a field covering bits `high` down to `low` (inclusive).
    ///
    /// # Panics
    ///
    /// Panics if `high < low` or `high` lies outside a 32-bit word. Layouts are
    /// `const` data, so a bad range is rejected at compile time.
    pub const fn new(name: &'static str, high: u8, low: u8) -> Self {
        assert!(high >= low, "bit field high bit below low bit");
        assert!(high <= MAX_BIT, "bit field exceeds the instruction word");
        Self { name, high, low }
    }

    /// Field name as used in fixed-bit assignments.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Most significant bit position.
    pub const fn high_bit(&self) -> u8 {
        self.high
    }

    /// Least significant bit position (the shift amount).
    pub const fn low_bit(&self) -> u8 {
        self.low
    }

    /// Width in bits.
    pub const fn width(&self) -> u32 {
        (self.high - self.low + 1) as u32
    }

    /// Right-aligned mask of `width` ones.
    pub const fn value_mask(&self) -> u32 {
        if self.width() >= INSTRUCTION_WIDTH {
            FULL_WORD_MASK
        } else {
            (1 << self.width()) - 1
        }
    }

    /// Mask of the bits this field occupies inside the word.
    pub const fn word_mask(&self) -> u32 {
        self.value_mask() << self.low
    }

    /// True when `value` is representable in this field without truncation.
    pub const fn fits(&self, value: u32) -> bool {
        value <= self.value_mask()
    }

    /// True when the two fields share at least one bit position.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.word_mask() & other.word_mask() != 0
    }

    /// True when every bit of `other` lies inside this field.
    pub const fn contains(&self, other: &Self) -> bool {
        self.high >= other.high && self.low <= other.low
    }

    /// Label used in encoding diagrams, e.g. `rs2[4:0]` or `imm[11:0]`.
    ///
    /// Immediate fragments already carry their bit-slice notation in the name.
    pub fn label(&self) -> String {
        if self.name.contains('[') {
            self.name.to_string()
        } else {
            format!("{}[{}:0]", self.name, self.width() - 1)
        }
    }
}

impl fmt::Display for BitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@[{}:{}]", self.name, self.high, self.low)
    }
}

/// A constant assigned to a field by an instruction definition.
///
/// Literals written as bit strings (`"0110011"`, `"0b011_0011"`) remember how
/// many digits they were written with, so a five-digit pattern assigned to a
/// three-bit field is rejected even when its value happens to fit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "LiteralRepr")]
pub struct FieldLiteral {
    value: u32,
    digits: Option<u8>,
}

impl FieldLiteral {
    /// A literal with no declared width.
    pub const fn new(value: u32) -> Self {
        Self {
            value,
            digits: None,
        }
    }

    /// A literal written with exactly `digits` binary digits.
    pub const fn with_digits(value: u32, digits: u8) -> Self {
        Self {
            value,
            digits: Some(digits),
        }
    }

    /// Numeric value.
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Binary digit count, if the literal was written as a bit string.
    pub const fn digits(&self) -> Option<u8> {
        self.digits
    }

    /// Checks the literal against `field`.
    ///
    /// # Errors
    ///
    /// [`EncodingError::WidthMismatch`] for a bit string of the wrong length,
    /// [`EncodingError::ValueOutOfRange`] for a value wider than the field.
    pub fn check(&self, field: BitField) -> Result<(), EncodingError> {
        if let Some(digits) = self.digits.filter(|&d| u32::from(d) != field.width()) {
            return Err(EncodingError::WidthMismatch {
                field: field.name(),
                digits,
                width: field.width(),
            });
        }
        if !field.fits(self.value) {
            return Err(EncodingError::ValueOutOfRange {
                field: field.name(),
                value: self.value,
                width: field.width(),
            });
        }
        Ok(())
    }
}

impl From<u32> for FieldLiteral {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl FromStr for FieldLiteral {
    type Err = EncodingError;

    /// Parses `0b`-prefixed or bare binary digits, or `0x`-prefixed hex.
    /// Underscores are ignored.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || EncodingError::MalformedLiteral(text.to_string());
        let cleaned: String = text.trim().chars().filter(|c| *c != '_').collect();

        if let Some(hex) = cleaned
            .strip_prefix("0x")
            .or_else(|| cleaned.strip_prefix("0X"))
        {
            return u32::from_str_radix(hex, 16)
                .map(Self::new)
                .map_err(|_| malformed());
        }

        let bits = cleaned
            .strip_prefix("0b")
            .or_else(|| cleaned.strip_prefix("0B"))
            .unwrap_or(&cleaned);
        if bits.is_empty() || bits.len() > 32 || !bits.bytes().all(|b| b == b'0' || b == b'1') {
            return Err(malformed());
        }
        let value = u32::from_str_radix(bits, 2).map_err(|_| malformed())?;
        Ok(Self::with_digits(value, bits.len() as u8))
    }
}

impl fmt::Display for FieldLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.digits {
            Some(digits) => write!(f, "{:0width$b}", self.value, width = digits as usize),
            None => write!(f, "{:#x}", self.value),
        }
    }
}

/// Wire shape of a literal: a JSON number or a bit/hex string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LiteralRepr {
    Number(u32),
    Text(String),
}

impl TryFrom<LiteralRepr> for FieldLiteral {
    type Error = EncodingError;

    fn try_from(repr: LiteralRepr) -> Result<Self, Self::Error> {
        match repr {
            LiteralRepr::Number(value) => Ok(Self::new(value)),
            LiteralRepr::Text(text) => text.parse(),
        }
    }
}

/// A literal resolved against, and validated for, a concrete field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FixedField {
    field: BitField,
    value: u32,
}

impl FixedField {
    /// Pairs `field` with `value`; the caller has already checked the width.
    pub(crate) const fn new(field: BitField, value: u32) -> Self {
        Self { field, value }
    }

    /// Target field.
    pub const fn field(&self) -> BitField {
        self.field
    }

    /// Literal value (right-aligned).
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The literal shifted into its in-word position.
    pub const fn positioned(&self) -> u32 {
        self.value << self.field.low_bit()
    }
}
