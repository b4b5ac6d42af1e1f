use rvref_core::InstructionFormat;
use rvref_core::catalog::{Category, Documentation, InstructionDef};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once per process.
///
/// Set `RUST_LOG=rvref_core=debug` to see build and reload events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Documentation that passes the required-entry check.
pub fn docs(mnemonic: &str) -> Documentation {
    Documentation::new(format!("{mnemonic} rd, rs1, rs2"), format!("{mnemonic} test entry"))
        .step("read operands")
        .step("write rd")
}

/// A documented R-format definition fixing funct7, funct3 and opcode.
pub fn r_def(mnemonic: &str, funct7: &str, funct3: &str, opcode: &str) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::R)
        .fixed("funct7", parse(funct7))
        .fixed("funct3", parse(funct3))
        .fixed("opcode", parse(opcode))
        .category(Category::Arithmetic)
        .docs(docs(mnemonic))
}

/// A documented I-format definition fixing funct3 and opcode.
pub fn i_def(mnemonic: &str, funct3: &str, opcode: &str) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::I)
        .fixed("funct3", parse(funct3))
        .fixed("opcode", parse(opcode))
        .category(Category::Arithmetic)
        .docs(docs(mnemonic))
}

/// The two-entry ADD/SUB catalog used by the decode scenarios.
pub fn add_sub() -> Vec<InstructionDef> {
    vec![
        r_def("ADD", "0000000", "000", "0110011"),
        r_def("SUB", "0100000", "000", "0110011"),
    ]
}

fn parse(bits: &str) -> rvref_core::FieldLiteral {
    bits.parse()
        .unwrap_or_else(|e| panic!("bad test literal {bits:?}: {e}"))
}

/// Minimal JSON definition set with one documented instruction.
pub const ADD_JSON: &str = r#"{
    "name": "mini",
    "description": "one instruction",
    "instructions": [
        {
            "mnemonic": "ADD",
            "format": "R",
            "category": "Arithmetic",
            "fixed": { "funct7": "0000000", "funct3": "000", "opcode": "0b011_0011" },
            "syntax": "ADD rd, rs1, rs2",
            "description": "Adds two registers",
            "operation": ["rd = rs1 + rs2"],
            "useCases": ["arithmetic"]
        }
    ]
}"#;
