//! Instruction helper tests: diagrams, templates, operands, and encoding.

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use rvref_core::encoding::fields;
use rvref_core::isa::rv32i;
use rvref_core::{Catalog, EncodingError, InstructionFormat};

#[fixture]
fn catalog() -> Catalog {
    rv32i::catalog().unwrap()
}

#[rstest]
#[case("ADD", "0000000 rs2[4:0] rs1[4:0] 000 rd[4:0] 0110011")]
#[case("SUB", "0100000 rs2[4:0] rs1[4:0] 000 rd[4:0] 0110011")]
#[case("ADDI", "imm[11:0] rs1[4:0] 000 rd[4:0] 0010011")]
#[case("SLLI", "0000000 shamt[4:0] rs1[4:0] 001 rd[4:0] 0010011")]
#[case("SRAI", "0100000 shamt[4:0] rs1[4:0] 101 rd[4:0] 0010011")]
#[case("SW", "imm[11:5] rs2[4:0] rs1[4:0] 010 imm[4:0] 0100011")]
#[case("BEQ", "imm[12|10:5] rs2[4:0] rs1[4:0] 000 imm[4:1|11] 1100011")]
#[case("JAL", "imm[20|10:1|11|19:12] rd[4:0] 1101111")]
#[case("LUI", "imm[31:12] rd[4:0] 0110111")]
#[case("ECALL", "000000000000 00000 000 00000 1110011")]
#[case("EBREAK", "000000000001 00000 000 00000 1110011")]
#[case("FENCE", "0000 pred[3:0] succ[3:0] 00000 000 00000 0001111")]
fn encoding_diagrams(catalog: Catalog, #[case] mnemonic: &str, #[case] diagram: &str) {
    let instruction = catalog.by_mnemonic(mnemonic).unwrap();
    assert_eq!(instruction.encoding_diagram(), diagram);
}

#[rstest]
fn template_and_mask(catalog: Catalog) {
    let sub = catalog.by_mnemonic("SUB").unwrap();
    assert_eq!(sub.template(), 0x4000_0033);
    assert_eq!(sub.mask(), 0xFE00_707F);
    assert!(sub.matches(0x4031_0133));
    assert!(!sub.matches(0x0031_0133));

    let lui = catalog.by_mnemonic("LUI").unwrap();
    assert_eq!(lui.mask(), 0x0000_007F);
    assert_eq!(lui.template(), 0x0000_0037);
}

#[rstest]
fn fixed_field_access(catalog: Catalog) {
    let srai = catalog.by_mnemonic("SRAI").unwrap();
    assert_eq!(srai.format(), InstructionFormat::I);
    assert_eq!(srai.fixed_value("funct7"), Some(0b0100000));
    assert_eq!(srai.fixed_value("funct3"), Some(0b101));
    assert_eq!(srai.fixed_value("rd"), None);
    let names: Vec<_> = srai.fixed_fields().iter().map(|f| f.field().name()).collect();
    assert_eq!(names, ["funct7", "funct3", "opcode"]);
}

#[rstest]
fn operand_fields_follow_the_layout(catalog: Catalog) {
    let names = |m: &str| -> Vec<&'static str> {
        catalog
            .by_mnemonic(m)
            .unwrap()
            .operand_fields()
            .iter()
            .map(|f| f.name())
            .collect()
    };
    assert_eq!(names("ADD"), ["rs2", "rs1", "rd"]);
    assert_eq!(names("ADDI"), ["imm[11:0]", "rs1", "rd"]);
    assert_eq!(names("SLLI"), ["shamt", "rs1", "rd"]);
    assert_eq!(names("SW"), ["imm[11:5]", "rs2", "rs1", "imm[4:0]"]);
    assert_eq!(names("FENCE"), ["pred", "succ"]);
    assert!(names("ECALL").is_empty());
}

#[rstest]
fn operands_are_raw_field_contents(catalog: Catalog) {
    // addi sp, sp, -16
    let addi = catalog.by_mnemonic("ADDI").unwrap();
    assert_eq!(
        addi.operands(0xFF01_0113),
        [(fields::I_IMM, 0xFF0), (fields::RS1, 2), (fields::RD, 2)]
    );
}

#[rstest]
fn encode_assembles_words(catalog: Catalog) {
    let add = catalog.by_mnemonic("ADD").unwrap();
    assert_eq!(
        add.encode(&[("rd", 2), ("rs1", 2), ("rs2", 3)]),
        Ok(0x0031_0133)
    );
    let slli = catalog.by_mnemonic("SLLI").unwrap();
    assert_eq!(
        slli.encode(&[("rd", 1), ("rs1", 2), ("shamt", 3)]),
        Ok(0x0031_1093)
    );
    let ecall = catalog.by_mnemonic("ECALL").unwrap();
    assert_eq!(ecall.encode(&[]), Ok(0x0000_0073));
}

#[rstest]
fn encoded_words_decode_back(catalog: Catalog) {
    for instruction in &catalog {
        let word = instruction.template();
        assert_eq!(
            catalog.decode(word).map(|i| i.mnemonic()),
            Some(instruction.mnemonic())
        );
    }
}

#[rstest]
fn encode_rejects_bad_operands(catalog: Catalog) {
    let add = catalog.by_mnemonic("ADD").unwrap();
    assert_eq!(
        add.encode(&[("imm[11:0]", 1)]),
        Err(EncodingError::UnknownField {
            format: InstructionFormat::R,
            field: "imm[11:0]".into(),
        })
    );
    assert_eq!(
        add.encode(&[("funct3", 1)]),
        Err(EncodingError::FixedOperand { field: "funct3" })
    );
    assert_eq!(
        add.encode(&[("rd", 32)]),
        Err(EncodingError::ValueOutOfRange {
            field: "rd",
            value: 32,
            width: 5,
        })
    );

    let slli = catalog.by_mnemonic("SLLI").unwrap();
    assert_eq!(
        slli.encode(&[("imm[11:0]", 3)]),
        Err(EncodingError::FixedOperand { field: "imm[11:0]" })
    );
}

#[rstest]
fn documentation_travels_with_the_record(catalog: Catalog) {
    let lw = catalog.by_mnemonic("LW").unwrap();
    let docs = lw.docs();
    assert_eq!(docs.syntax, "LW rd, offset(rs1)");
    assert_eq!(docs.operation.len(), 4);
    assert_eq!(docs.examples.len(), 2);
    assert!(docs.exceptions.contains("misaligned"));
}
