//! Built-in RV32I table tests.

use pretty_assertions::assert_eq;
use rstest::rstest;
use rvref_core::catalog::{Category, DefinitionSource};
use rvref_core::isa::rv32i::{self, Rv32i, funct3, funct7, funct12, opcodes};

const EXPECTED_ORDER: [&str; 40] = [
    "ADD", "SUB", "ADDI", "AND", "OR", "XOR", "ANDI", "ORI", "XORI", "SLL", "SRL", "SRA", "SLLI",
    "SRLI", "SRAI", "SLT", "SLTU", "SLTI", "SLTIU", "LW", "LH", "LHU", "LB", "LBU", "SW", "SH",
    "SB", "BEQ", "BNE", "BLT", "BGE", "BLTU", "BGEU", "JAL", "JALR", "LUI", "AUIPC", "ECALL",
    "EBREAK", "FENCE",
];

#[test]
fn table_has_forty_entries_in_reference_order() {
    let catalog = rv32i::catalog().unwrap();
    assert_eq!(catalog.name(), rv32i::NAME);
    assert_eq!(catalog.description(), rv32i::DESCRIPTION);
    let names: Vec<_> = catalog.iter().map(|i| i.mnemonic()).collect();
    assert_eq!(names, EXPECTED_ORDER);
}

#[test]
fn every_entry_is_documented_and_categorised() {
    for def in rv32i::definitions() {
        assert!(def.docs.missing_required().is_empty(), "{}", def.mnemonic);
        assert!(def.category.is_some(), "{}", def.mnemonic);
        assert!(!def.docs.examples.is_empty(), "{}", def.mnemonic);
        assert!(!def.docs.exceptions.is_empty(), "{}", def.mnemonic);
    }
}

#[test]
fn source_yields_the_table() {
    let definition = Rv32i.load().unwrap();
    assert_eq!(definition, rv32i::definition());
    assert_eq!(definition.instructions.len(), 40);
}

#[rstest]
#[case("LW", opcodes::OP_LOAD)]
#[case("FENCE", opcodes::OP_MISC_MEM)]
#[case("ADDI", opcodes::OP_IMM)]
#[case("AUIPC", opcodes::OP_AUIPC)]
#[case("SW", opcodes::OP_STORE)]
#[case("ADD", opcodes::OP_REG)]
#[case("LUI", opcodes::OP_LUI)]
#[case("BEQ", opcodes::OP_BRANCH)]
#[case("JALR", opcodes::OP_JALR)]
#[case("JAL", opcodes::OP_JAL)]
#[case("ECALL", opcodes::OP_SYSTEM)]
fn opcodes_match_constants(#[case] mnemonic: &str, #[case] opcode: u32) {
    let catalog = rv32i::catalog().unwrap();
    let instruction = catalog.by_mnemonic(mnemonic).unwrap();
    assert_eq!(instruction.fixed_value("opcode"), Some(opcode));
}

#[test]
fn stores_use_the_architectural_opcode() {
    let catalog = rv32i::catalog().unwrap();
    for store in catalog.by_category(Category::Store) {
        assert_eq!(store.fixed_value("opcode"), Some(0b0100011), "{}", store.mnemonic());
    }
}

#[rstest]
#[case("SUB", funct7::ALT, funct3::ADD_SUB)]
#[case("SRA", funct7::ALT, funct3::SRL_SRA)]
#[case("SRAI", funct7::ALT, funct3::SRL_SRA)]
#[case("SRLI", funct7::DEFAULT, funct3::SRL_SRA)]
#[case("SLL", funct7::DEFAULT, funct3::SLL)]
fn funct7_selects_the_alternate_operation(
    #[case] mnemonic: &str,
    #[case] f7: u32,
    #[case] f3: u32,
) {
    let catalog = rv32i::catalog().unwrap();
    let instruction = catalog.by_mnemonic(mnemonic).unwrap();
    assert_eq!(instruction.fixed_value("funct7"), Some(f7));
    assert_eq!(instruction.fixed_value("funct3"), Some(f3));
}

#[test]
fn system_entries_fix_every_field() {
    let catalog = rv32i::catalog().unwrap();
    let ecall = catalog.by_mnemonic("ECALL").unwrap();
    let ebreak = catalog.by_mnemonic("EBREAK").unwrap();
    assert_eq!(ecall.fixed_value("funct12"), Some(funct12::ECALL));
    assert_eq!(ebreak.fixed_value("funct12"), Some(funct12::EBREAK));
    assert_eq!(ecall.mask(), u32::MAX);
    assert_eq!(ebreak.template(), 0x0010_0073);
}

#[test]
fn categories_cover_the_reference_groups() {
    let catalog = rv32i::catalog().unwrap();
    let count = |c| catalog.by_category(c).count();
    assert_eq!(count(Category::Arithmetic), 3);
    assert_eq!(count(Category::Logical), 6);
    assert_eq!(count(Category::Shift), 6);
    assert_eq!(count(Category::Compare), 4);
    assert_eq!(count(Category::Load), 5);
    assert_eq!(count(Category::Store), 3);
    assert_eq!(count(Category::Branch), 6);
    assert_eq!(count(Category::Jump), 2);
    assert_eq!(count(Category::UpperImmediate), 2);
    assert_eq!(count(Category::System), 3);
}
