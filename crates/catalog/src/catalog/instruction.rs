//! Validated catalog entries.

use serde::Serialize;

use super::definition::{Category, Documentation};
use crate::common::EncodingError;
use crate::encoding::{self, BitField, FixedField, InstructionFormat};

/// A catalog entry whose fixed bits have been checked against its format.
///
/// The fixed fields are held in layout order together with their combined
/// match mask and template word, so matching a raw word is a single mask and
/// compare.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Instruction {
    mnemonic: String,
    format: InstructionFormat,
    category: Option<Category>,
    fixed: Vec<FixedField>,
    #[serde(skip)]
    mask: u32,
    template: u32,
    #[serde(flatten)]
    docs: Documentation,
}

impl Instruction {
    /// Wraps an already-resolved fixed-field set.
    pub(crate) fn new(
        mnemonic: String,
        format: InstructionFormat,
        category: Option<Category>,
        fixed: Vec<FixedField>,
        docs: Documentation,
    ) -> Self {
        let (mask, template) = encoding::mask_and_pattern(&fixed);
        Self {
            mnemonic,
            format,
            category,
            fixed,
            mask,
            template,
            docs,
        }
    }

    /// Instruction name as written in its definition.
    pub fn mnemonic(&self) -> &str {
        &self.mnemonic
    }

    /// Layout class.
    pub const fn format(&self) -> InstructionFormat {
        self.format
    }

    /// Grouping, if the definition gave one.
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    /// Fixed fields, most significant first.
    pub fn fixed_fields(&self) -> &[FixedField] {
        &self.fixed
    }

    /// Literal assigned to the field called `name`, if it is fixed.
    pub fn fixed_value(&self, name: &str) -> Option<u32> {
        self.fixed
            .iter()
            .find(|f| f.field().name() == name)
            .map(FixedField::value)
    }

    /// Descriptive payload.
    pub const fn docs(&self) -> &Documentation {
        &self.docs
    }

    /// OR of the in-word masks of every fixed field.
    pub const fn mask(&self) -> u32 {
        self.mask
    }

    /// The instruction word with every fixed field set and every operand zero.
    pub const fn template(&self) -> u32 {
        self.template
    }

    /// True when `word` carries this instruction's fixed bits.
    #[inline]
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.template
    }

    /// Fields left free for operands, most significant first.
    ///
    /// Canonical fields untouched by the fixed bits are returned whole. A
    /// canonical field that is only partly fixed contributes the sub-fields
    /// that remain free (`shamt` for the shift-immediates).
    pub fn operand_fields(&self) -> Vec<BitField> {
        let mut operands = Vec::new();
        for field in self.format.fields() {
            let fixed_bits = field.word_mask() & self.mask;
            if fixed_bits == 0 {
                operands.push(*field);
            } else if fixed_bits != field.word_mask() {
                operands.extend(
                    self.format
                        .subfields()
                        .iter()
                        .filter(|sub| field.contains(sub) && sub.word_mask() & self.mask == 0),
                );
            }
        }
        operands
    }

    /// Raw operand field contents of `word`, unsigned and unscrambled.
    pub fn operands(&self, word: u32) -> Vec<(BitField, u32)> {
        self.operand_fields()
            .into_iter()
            .map(|field| (field, encoding::extract_field(word, field)))
            .collect()
    }

    /// Builds an instruction word from the template and raw operand values.
    ///
    /// Operands are named by field (`"rd"`, `"rs1"`, `"imm[11:0]"`, `"shamt"`);
    /// omitted operands stay zero.
    ///
    /// # Errors
    ///
    /// - [`EncodingError::UnknownField`] for names the format does not define.
    /// - [`EncodingError::FixedOperand`] for fields overlapping the fixed bits.
    /// - [`EncodingError::ValueOutOfRange`] for values wider than their field.
    pub fn encode(&self, operands: &[(&str, u32)]) -> Result<u32, EncodingError> {
        operands.iter().try_fold(self.template, |word, &(name, value)| {
            let field = self
                .format
                .field(name)
                .ok_or_else(|| EncodingError::UnknownField {
                    format: self.format,
                    field: name.to_string(),
                })?;
            if field.word_mask() & self.mask != 0 {
                return Err(EncodingError::FixedOperand {
                    field: field.name(),
                });
            }
            encoding::insert_field(word, field, value)
        })
    }

    /// Bit layout in reference-manual notation, most significant field first.
    ///
    /// Fixed fields are printed as binary literals of their exact width and
    /// operand fields by label, e.g. `0000000 rs2[4:0] rs1[4:0] 000 rd[4:0] 0110011`.
    pub fn encoding_diagram(&self) -> String {
        let mut segments: Vec<(u8, String)> = self
            .fixed
            .iter()
            .map(|f| {
                let width = f.field().width() as usize;
                (
                    f.field().high_bit(),
                    format!("{:0width$b}", f.value(), width = width),
                )
            })
            .chain(
                self.operand_fields()
                    .into_iter()
                    .map(|field| (field.high_bit(), field.label())),
            )
            .collect();
        segments.sort_by(|a, b| b.0.cmp(&a.0));
        segments
            .into_iter()
            .map(|(_, text)| text)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
