//! Format layout and field access tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvref_core::encoding::{self, BitField, InstructionFormat, fields};

#[rstest]
#[case::r(InstructionFormat::R)]
#[case::i(InstructionFormat::I)]
#[case::s(InstructionFormat::S)]
#[case::b(InstructionFormat::B)]
#[case::u(InstructionFormat::U)]
#[case::j(InstructionFormat::J)]
#[case::system(InstructionFormat::SystemNoArgs)]
#[case::fence(InstructionFormat::Fence)]
fn layout_partitions_the_word(#[case] format: InstructionFormat) {
    let layout = encoding::fields_for(format);
    let mut covered = 0u32;
    for field in layout {
        assert_eq!(covered & field.word_mask(), 0, "{field} overlaps in {format}");
        covered |= field.word_mask();
    }
    assert_eq!(covered, u32::MAX, "{format} leaves bits uncovered");

    for pair in layout.windows(2) {
        assert_eq!(pair[0].low_bit(), pair[1].high_bit() + 1, "{format} not contiguous");
    }
    assert_eq!(layout.last().copied(), Some(fields::OPCODE));
}

#[test]
fn every_format_is_listed_once() {
    assert_eq!(InstructionFormat::ALL.len(), 8);
    for format in InstructionFormat::ALL {
        assert_eq!(
            InstructionFormat::ALL.iter().filter(|f| **f == format).count(),
            1
        );
    }
}

#[test]
fn subfields_sit_inside_one_canonical_field() {
    for format in InstructionFormat::ALL {
        for sub in format.subfields() {
            let parents: Vec<_> = format
                .fields()
                .iter()
                .filter(|f| f.contains(sub))
                .collect();
            assert_eq!(parents.len(), 1, "{sub} in {format}");
        }
    }
    assert_eq!(
        InstructionFormat::I.parent_of(fields::SHAMT),
        Some(fields::I_IMM)
    );
    assert_eq!(
        InstructionFormat::I.parent_of(fields::FUNCT7),
        Some(fields::I_IMM)
    );
}

#[test]
fn field_lookup_includes_subfields() {
    assert_eq!(InstructionFormat::I.field("shamt"), Some(fields::SHAMT));
    assert_eq!(InstructionFormat::I.field("funct7"), Some(fields::FUNCT7));
    assert_eq!(InstructionFormat::R.field("shamt"), None);
    assert_eq!(InstructionFormat::U.field("rs1"), None);
}

#[rstest]
#[case(InstructionFormat::R, "R")]
#[case(InstructionFormat::SystemNoArgs, "SYSTEM")]
#[case(InstructionFormat::Fence, "FENCE")]
fn format_display_names(#[case] format: InstructionFormat, #[case] expected: &str) {
    assert_eq!(format.to_string(), expected);
}

#[test]
fn extract_reads_r_type_fields() {
    // add x2, x2, x3
    let word = 0x0031_0133;
    assert_eq!(encoding::extract_field(word, fields::OPCODE), 0b0110011);
    assert_eq!(encoding::extract_field(word, fields::RD), 2);
    assert_eq!(encoding::extract_field(word, fields::FUNCT3), 0);
    assert_eq!(encoding::extract_field(word, fields::RS1), 2);
    assert_eq!(encoding::extract_field(word, fields::RS2), 3);
    assert_eq!(encoding::extract_field(word, fields::FUNCT7), 0);
}

#[test]
fn extract_does_not_sign_extend() {
    // addi x1, x0, -1
    let word = 0xFFF0_0093;
    assert_eq!(encoding::extract_field(word, fields::I_IMM), 0xFFF);
}

#[test]
fn insert_replaces_only_the_target_bits() {
    let word = encoding::insert_field(u32::MAX, fields::RD, 0).unwrap();
    assert_eq!(word, !fields::RD.word_mask());
    let word = encoding::insert_field(0, fields::RS2, 31).unwrap();
    assert_eq!(word, 31 << 20);
}

#[test]
fn insert_rejects_wide_values() {
    let err = encoding::insert_field(0, fields::FUNCT3, 8).unwrap_err();
    assert_eq!(
        err,
        rvref_core::EncodingError::ValueOutOfRange {
            field: "funct3",
            value: 8,
            width: 3,
        }
    );
}

#[test]
fn custom_field_geometry() {
    let field = BitField::new("mid", 19, 12);
    assert_eq!(field.width(), 8);
    assert_eq!(field.value_mask(), 0xFF);
    assert_eq!(field.word_mask(), 0x000F_F000);
    assert!(field.fits(255));
    assert!(!field.fits(256));
    assert!(field.overlaps(&fields::FUNCT3));
    assert!(!field.overlaps(&fields::RD));
}
