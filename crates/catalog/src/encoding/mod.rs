//! Instruction encoding model.
//!
//! Describes a 32-bit instruction word as typed bit fields and provides the
//! bit-level primitives the catalog is built on:
//! 1. **Layouts:** [`fields_for`] returns a format's canonical field partition.
//! 2. **Validation:** [`validate_fixed_bits`] / [`resolve_fixed_bits`] check an
//!    instruction's fixed-bit assignment against its format.
//! 3. **Matching:** [`matches`] tests a raw word against a fixed-bit assignment.
//! 4. **Field access:** [`extract_field`] and [`insert_field`].
//!
//! Immediates are handled as raw, unsigned field contents. Sign extension and
//! the B/J immediate bit scramble belong to a full decoder, not to this model.

/// Bit fields and fixed-bit literals.
pub mod field;

/// Instruction formats and canonical layouts.
pub mod format;

use std::collections::BTreeMap;

pub use field::{BitField, FieldLiteral, FixedField};
pub use format::{InstructionFormat, fields};

use crate::common::EncodingError;

/// Fixed-bit assignment of a definition: field name to literal.
pub type FixedBits = BTreeMap<String, FieldLiteral>;

/// Returns the canonical field layout for `format`.
pub const fn fields_for(format: InstructionFormat) -> &'static [BitField] {
    format.fields()
}

/// Extracts the raw contents of `field` from `word`. No sign extension.
#[inline]
pub const fn extract_field(word: u32, field: BitField) -> u32 {
    (word >> field.low_bit()) & field.value_mask()
}

/// Replaces the contents of `field` in `word` with `value`.
///
/// # Errors
///
/// Returns [`EncodingError::ValueOutOfRange`] if `value` does not fit the field.
pub fn insert_field(word: u32, field: BitField, value: u32) -> Result<u32, EncodingError> {
    if !field.fits(value) {
        return Err(EncodingError::ValueOutOfRange {
            field: field.name(),
            value,
            width: field.width(),
        });
    }
    Ok((word & !field.word_mask()) | (value << field.low_bit()))
}

/// Checks a fixed-bit assignment against `format`, stopping at the first defect.
///
/// # Errors
///
/// The first of the defects [`resolve_fixed_bits`] would report.
pub fn validate_fixed_bits(
    format: InstructionFormat,
    fixed: &FixedBits,
) -> Result<(), EncodingError> {
    match resolve_fixed_bits(format, fixed) {
        Ok(_) => Ok(()),
        Err(mut errors) => Err(errors.swap_remove(0)),
    }
}

/// Resolves every field name of `fixed` against `format` and checks the result.
///
/// On success the fixed fields are returned in layout order (most significant
/// first). On failure every defect is returned:
/// - [`EncodingError::UnknownField`] for names the format does not define,
/// - [`EncodingError::WidthMismatch`] / [`EncodingError::ValueOutOfRange`] for
///   literals that do not fit their field exactly,
/// - [`EncodingError::OverlappingFields`] for fixed fields sharing bits,
/// - [`EncodingError::MissingOpcode`] when the opcode is not fixed.
///
/// # Errors
///
/// The non-empty list of defects.
pub fn resolve_fixed_bits(
    format: InstructionFormat,
    fixed: &FixedBits,
) -> Result<Vec<FixedField>, Vec<EncodingError>> {
    let mut errors = Vec::new();
    let mut resolved = Vec::with_capacity(fixed.len());

    for (name, literal) in fixed {
        let Some(field) = format.field(name) else {
            errors.push(EncodingError::UnknownField {
                format,
                field: name.clone(),
            });
            continue;
        };
        match literal.check(field) {
            Ok(()) => resolved.push(FixedField::new(field, literal.value())),
            Err(e) => errors.push(e),
        }
    }

    resolved.sort_by(|a, b| {
        b.field()
            .high_bit()
            .cmp(&a.field().high_bit())
            .then(b.field().width().cmp(&a.field().width()))
    });

    let mut claimed: Vec<BitField> = Vec::with_capacity(resolved.len());
    for fixed_field in &resolved {
        let field = fixed_field.field();
        if let Some(first) = claimed.iter().find(|c| c.overlaps(&field)) {
            errors.push(EncodingError::OverlappingFields {
                first: first.name(),
                second: field.name(),
            });
        }
        claimed.push(field);
    }

    if !fixed.contains_key(fields::OPCODE.name()) {
        errors.push(EncodingError::MissingOpcode);
    }

    if errors.is_empty() {
        Ok(resolved)
    } else {
        Err(errors)
    }
}

/// True when every fixed field of `fixed` holds its literal in `word`.
///
/// Field names unknown to `format` never match.
pub fn matches(format: InstructionFormat, fixed: &FixedBits, word: u32) -> bool {
    fixed.iter().all(|(name, literal)| {
        format
            .field(name)
            .is_some_and(|field| extract_field(word, field) == literal.value())
    })
}

/// Combined in-word mask and value of a resolved fixed-bit set.
///
/// `word & mask == pattern` is equivalent to [`matches`] for a validated set.
pub fn mask_and_pattern(fixed: &[FixedField]) -> (u32, u32) {
    fixed.iter().fold((0, 0), |(mask, pattern), f| {
        (mask | f.field().word_mask(), pattern | f.positioned())
    })
}
