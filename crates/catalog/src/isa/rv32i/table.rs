//! Built-in RV32I definitions.
//!
//! Entries are grouped the way the reference pages present them: arithmetic,
//! logical, shift, compare, load, store, branch, jump, upper-immediate, and
//! system. The per-format helpers fix the identifying fields; each entry then
//! attaches its category and documentation.

use super::{funct3, funct7, funct12, opcodes};
use crate::catalog::{Category, Documentation, InstructionDef};
use crate::encoding::InstructionFormat;

const NO_EXCEPTIONS: &str = "None";
const LOAD_STORE_FAULTS: &str = "Address-misaligned exception, access fault";

fn r_type(mnemonic: &str, funct7: u32, funct3: u32) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::R)
        .fixed("funct7", funct7)
        .fixed("funct3", funct3)
        .fixed("opcode", opcodes::OP_REG)
}

fn i_type(mnemonic: &str, opcode: u32, funct3: u32) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::I)
        .fixed("funct3", funct3)
        .fixed("opcode", opcode)
}

/// Shift-immediates fix the upper seven bits of `imm[11:0]`; `shamt` stays free.
fn shift_imm(mnemonic: &str, funct7: u32, funct3: u32) -> InstructionDef {
    i_type(mnemonic, opcodes::OP_IMM, funct3).fixed("funct7", funct7)
}

fn s_type(mnemonic: &str, funct3: u32) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::S)
        .fixed("funct3", funct3)
        .fixed("opcode", opcodes::OP_STORE)
}

fn b_type(mnemonic: &str, funct3: u32) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::B)
        .fixed("funct3", funct3)
        .fixed("opcode", opcodes::OP_BRANCH)
}

fn u_type(mnemonic: &str, opcode: u32) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::U).fixed("opcode", opcode)
}

fn system(mnemonic: &str, funct12: u32) -> InstructionDef {
    InstructionDef::new(mnemonic, InstructionFormat::SystemNoArgs)
        .fixed("funct12", funct12)
        .fixed("rs1", 0_u32)
        .fixed("funct3", funct3::PRIV)
        .fixed("rd", 0_u32)
        .fixed("opcode", opcodes::OP_SYSTEM)
}

pub(super) fn definitions() -> Vec<InstructionDef> {
    let mut definitions = Vec::with_capacity(40);
    definitions.extend(arithmetic());
    definitions.extend(logical());
    definitions.extend(shifts());
    definitions.extend(compares());
    definitions.extend(loads());
    definitions.extend(stores());
    definitions.extend(branches());
    definitions.extend(jumps());
    definitions.extend(upper_immediates());
    definitions.extend(system_instructions());
    definitions
}

fn arithmetic() -> [InstructionDef; 3] {
    [
        r_type("ADD", funct7::DEFAULT, funct3::ADD_SUB)
            .category(Category::Arithmetic)
            .docs(
                Documentation::new("ADD rd, rs1, rs2", "Adds the values of two registers")
                    .step("Read the values of registers rs1 and rs2")
                    .step("Perform a 32-bit signed addition")
                    .step("Write the result to register rd")
                    .step("On overflow the result is truncated")
                    .usage("rd = rs1 + rs2")
                    .usage("Basic arithmetic")
                    .usage("Address calculation")
                    .example("ADD x1, x2, x3  # x1 = x2 + x3")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Basic arithmetic")
                    .use_case("Address calculation")
                    .use_case("Array indexing")
                    .note("The most basic arithmetic instruction"),
            ),
        r_type("SUB", funct7::ALT, funct3::ADD_SUB)
            .category(Category::Arithmetic)
            .docs(
                Documentation::new(
                    "SUB rd, rs1, rs2",
                    "Subtracts the second register value from the first",
                )
                .step("Read the values of registers rs1 and rs2")
                .step("Perform a 32-bit subtraction: rs1 - rs2")
                .step("Write the result to register rd")
                .usage("rd = rs1 - rs2")
                .usage("Subtraction")
                .usage("Pointer arithmetic")
                .example("SUB x1, x2, x3  # x1 = x2 - x3")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Basic arithmetic")
                .use_case("Pointer arithmetic")
                .use_case("Comparisons")
                .note("Operand order matters"),
            ),
        i_type("ADDI", opcodes::OP_IMM, funct3::ADD_SUB)
            .category(Category::Arithmetic)
            .docs(
                Documentation::new("ADDI rd, rs1, imm", "Adds a 12-bit immediate to a register")
                    .step("Read the value of register rs1")
                    .step("Sign-extend the 12-bit immediate to 32 bits")
                    .step("Perform the addition: rs1 + imm")
                    .step("Write the result to register rd")
                    .usage("rd = rs1 + imm")
                    .usage("Immediate range: -2048 to 2047")
                    .example("ADDI sp, sp, -16  # adjust the stack pointer")
                    .example("ADDI t0, zero, 42  # load the constant 42")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Loading constants")
                    .use_case("Stack pointer adjustment")
                    .use_case("Address offsets")
                    .note("One of the most frequently used instructions; loads small constants"),
            ),
    ]
}

fn logical() -> [InstructionDef; 6] {
    [
        r_type("AND", funct7::DEFAULT, funct3::AND)
            .category(Category::Logical)
            .docs(
                Documentation::new("AND rd, rs1, rs2", "Bitwise AND")
                    .step("Read the values of registers rs1 and rs2")
                    .step("Perform a logical AND on every bit")
                    .step("Write the result to register rd")
                    .usage("rd = rs1 & rs2")
                    .usage("Bit masking")
                    .usage("Clearing selected bits")
                    .example("AND x1, x2, x3  # bitwise AND")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Bit masks")
                    .use_case("Clearing bits")
                    .use_case("Bitwise optimizations")
                    .note("Basic logical operation"),
            ),
        r_type("OR", funct7::DEFAULT, funct3::OR)
            .category(Category::Logical)
            .docs(
                Documentation::new("OR rd, rs1, rs2", "Bitwise OR")
                    .step("Read the values of registers rs1 and rs2")
                    .step("Perform a logical OR on every bit")
                    .step("Write the result to register rd")
                    .usage("rd = rs1 | rs2")
                    .usage("Setting selected bits")
                    .usage("Combining flags")
                    .example("OR x1, x2, x3  # bitwise OR")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Setting bits")
                    .use_case("Combining flags")
                    .use_case("Bitwise operations")
                    .note("Used to set flag bits"),
            ),
        r_type("XOR", funct7::DEFAULT, funct3::XOR)
            .category(Category::Logical)
            .docs(
                Documentation::new("XOR rd, rs1, rs2", "Bitwise exclusive OR")
                    .step("Read the values of registers rs1 and rs2")
                    .step("Perform a logical XOR on every bit")
                    .step("Write the result to register rd")
                    .usage("rd = rs1 ^ rs2")
                    .usage("Flipping bits")
                    .usage("Clearing a register by XOR with itself")
                    .example("XOR x1, x2, x3  # exclusive OR")
                    .example("XOR x1, x1, x1  # clear x1")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Flipping bits")
                    .use_case("Simple ciphers")
                    .use_case("Clearing registers")
                    .note("XOR a, a, a clears the register"),
            ),
        i_type("ANDI", opcodes::OP_IMM, funct3::AND)
            .category(Category::Logical)
            .docs(
                Documentation::new("ANDI rd, rs1, imm", "Bitwise AND of a register and an immediate")
                    .step("Read the value of register rs1")
                    .step("Sign-extend the 12-bit immediate")
                    .step("Perform a bitwise AND")
                    .step("Write the result to register rd")
                    .usage("rd = rs1 & imm")
                    .usage("Bit masking")
                    .usage("Extracting bit fields")
                    .example("ANDI x1, x2, 0xFF  # keep the low 8 bits")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Bit masks")
                    .use_case("Extracting bit fields")
                    .use_case("Alignment checks")
                    .note("Common for quick bit manipulation"),
            ),
        i_type("ORI", opcodes::OP_IMM, funct3::OR)
            .category(Category::Logical)
            .docs(
                Documentation::new("ORI rd, rs1, imm", "Bitwise OR of a register and an immediate")
                    .step("Read the value of register rs1")
                    .step("Sign-extend the 12-bit immediate")
                    .step("Perform a bitwise OR")
                    .step("Write the result to register rd")
                    .usage("rd = rs1 | imm")
                    .usage("Setting selected bits")
                    .usage("Loading constants")
                    .example("ORI x1, x2, 1  # set the lowest bit")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Setting bits")
                    .use_case("Loading constants")
                    .use_case("Flag bits")
                    .note("Sets bits or loads constants"),
            ),
        i_type("XORI", opcodes::OP_IMM, funct3::XOR)
            .category(Category::Logical)
            .docs(
                Documentation::new(
                    "XORI rd, rs1, imm",
                    "Bitwise exclusive OR of a register and an immediate",
                )
                .step("Read the value of register rs1")
                .step("Sign-extend the 12-bit immediate")
                .step("Perform a bitwise XOR")
                .step("Write the result to register rd")
                .usage("rd = rs1 ^ imm")
                .usage("Flipping bits")
                .usage("Bitwise NOT (imm = -1)")
                .example("XORI x1, x2, -1  # bitwise NOT")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Flipping bits")
                .use_case("Bitwise NOT")
                .use_case("Simple bit operations")
                .note("XORI rd, rs1, -1 is a bitwise NOT"),
            ),
    ]
}

fn shifts() -> [InstructionDef; 6] {
    [
        r_type("SLL", funct7::DEFAULT, funct3::SLL)
            .category(Category::Shift)
            .docs(
                Documentation::new("SLL rd, rs1, rs2", "Shift left logical")
                    .step("Read the value of register rs1")
                    .step("Take the low 5 bits of rs2 as the shift amount")
                    .step("Perform a logical left shift")
                    .step("Write the result to rd")
                    .usage("rd = rs1 << rs2[4:0]")
                    .usage("Shift amount 0-31")
                    .usage("Multiplying by a power of two")
                    .example("SLL x1, x2, x3  # x1 = x2 << x3")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Multiplying by a power of two")
                    .use_case("Bit field manipulation")
                    .use_case("Address calculation")
                    .note("Shifting left by one multiplies by two"),
            ),
        r_type("SRL", funct7::DEFAULT, funct3::SRL_SRA)
            .category(Category::Shift)
            .docs(
                Documentation::new("SRL rd, rs1, rs2", "Shift right logical")
                    .step("Read the value of register rs1")
                    .step("Take the low 5 bits of rs2 as the shift amount")
                    .step("Perform a logical right shift (zero fill)")
                    .step("Write the result to rd")
                    .usage("rd = rs1 >> rs2[4:0]")
                    .usage("Zero fill")
                    .usage("Dividing by a power of two")
                    .example("SRL x1, x2, x3  # logical right shift")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Dividing by a power of two")
                    .use_case("Unsigned right shift")
                    .use_case("Bit field extraction")
                    .note("Logical right shift fills the high bits with zeros"),
            ),
        r_type("SRA", funct7::ALT, funct3::SRL_SRA)
            .category(Category::Shift)
            .docs(
                Documentation::new("SRA rd, rs1, rs2", "Shift right arithmetic")
                    .step("Read the value of register rs1")
                    .step("Take the low 5 bits of rs2 as the shift amount")
                    .step("Perform an arithmetic right shift (sign fill)")
                    .step("Write the result to rd")
                    .usage("rd = rs1 >>> rs2[4:0]")
                    .usage("Sign fill")
                    .usage("Signed division")
                    .example("SRA x1, x2, x3  # arithmetic right shift")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Signed division")
                    .use_case("Preserving the sign")
                    .use_case("Arithmetic")
                    .note("Arithmetic right shift preserves the sign bit"),
            ),
        shift_imm("SLLI", funct7::DEFAULT, funct3::SLL)
            .category(Category::Shift)
            .docs(
                Documentation::new("SLLI rd, rs1, imm", "Shift left logical by immediate")
                    .step("Read the value of register rs1")
                    .step("Use the 5-bit immediate as the shift amount")
                    .step("Perform a logical left shift")
                    .step("Write the result to rd")
                    .usage("rd = rs1 << imm[4:0]")
                    .usage("Shift amount 0-31")
                    .usage("Fast multiplication")
                    .example("SLLI x1, x2, 3  # shift left by 3")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Fast multiplication")
                    .use_case("Address calculation")
                    .use_case("Bit alignment")
                    .note("Efficient shift"),
            ),
        shift_imm("SRLI", funct7::DEFAULT, funct3::SRL_SRA)
            .category(Category::Shift)
            .docs(
                Documentation::new("SRLI rd, rs1, imm", "Shift right logical by immediate")
                    .step("Read the value of register rs1")
                    .step("Use the 5-bit immediate as the shift amount")
                    .step("Perform a logical right shift (zero fill)")
                    .step("Write the result to rd")
                    .usage("rd = rs1 >> imm[4:0]")
                    .usage("Zero fill")
                    .usage("Fast division")
                    .example("SRLI x1, x2, 4  # shift right by 4")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Fast division")
                    .use_case("Bit field extraction")
                    .use_case("Data alignment")
                    .note("Efficient unsigned right shift"),
            ),
        shift_imm("SRAI", funct7::ALT, funct3::SRL_SRA)
            .category(Category::Shift)
            .docs(
                Documentation::new("SRAI rd, rs1, imm", "Shift right arithmetic by immediate")
                    .step("Read the value of register rs1")
                    .step("Use the 5-bit immediate as the shift amount")
                    .step("Perform an arithmetic right shift (sign fill)")
                    .step("Write the result to rd")
                    .usage("rd = rs1 >>> imm[4:0]")
                    .usage("Sign fill")
                    .usage("Signed division")
                    .example("SRAI x1, x2, 2  # arithmetic right shift by 2")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Signed division")
                    .use_case("Sign extension")
                    .use_case("Arithmetic")
                    .note("Right shift that keeps the sign"),
            ),
    ]
}

fn compares() -> [InstructionDef; 4] {
    [
        r_type("SLT", funct7::DEFAULT, funct3::SLT)
            .category(Category::Compare)
            .docs(
                Documentation::new("SLT rd, rs1, rs2", "Set if less than (signed)")
                    .step("Read the values of registers rs1 and rs2")
                    .step("Perform a signed comparison: rs1 < rs2")
                    .step("rd = 1 if rs1 < rs2, otherwise rd = 0")
                    .usage("rd = (rs1 < rs2) ? 1 : 0")
                    .usage("Signed comparison")
                    .example("SLT x1, x2, x3  # x1 = (x2 < x3)")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Conditions")
                    .use_case("Branch conditions")
                    .use_case("Minimum and maximum")
                    .note("Signed comparison"),
            ),
        r_type("SLTU", funct7::DEFAULT, funct3::SLTU)
            .category(Category::Compare)
            .docs(
                Documentation::new("SLTU rd, rs1, rs2", "Set if less than (unsigned)")
                    .step("Read the values of registers rs1 and rs2")
                    .step("Perform an unsigned comparison: rs1 < rs2")
                    .step("rd = 1 if rs1 < rs2, otherwise rd = 0")
                    .usage("rd = (rs1 < rs2) ? 1 : 0")
                    .usage("Unsigned comparison")
                    .example("SLTU x1, x2, x3  # unsigned comparison")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Unsigned comparison")
                    .use_case("Address comparison")
                    .use_case("Pointer arithmetic")
                    .note("Unsigned comparison"),
            ),
        i_type("SLTI", opcodes::OP_IMM, funct3::SLT)
            .category(Category::Compare)
            .docs(
                Documentation::new("SLTI rd, rs1, imm", "Set if less than immediate (signed)")
                    .step("Read the value of register rs1")
                    .step("Sign-extend the immediate")
                    .step("Perform a signed comparison: rs1 < imm")
                    .step("Write the result to rd")
                    .usage("rd = (rs1 < imm) ? 1 : 0")
                    .usage("Comparison against a constant")
                    .example("SLTI x1, x2, 100  # x1 = (x2 < 100)")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Constant comparison")
                    .use_case("Range checks")
                    .use_case("Conditional set")
                    .note("Signed comparison with an immediate"),
            ),
        i_type("SLTIU", opcodes::OP_IMM, funct3::SLTU)
            .category(Category::Compare)
            .docs(
                Documentation::new("SLTIU rd, rs1, imm", "Set if less than immediate (unsigned)")
                    .step("Read the value of register rs1")
                    .step("Sign-extend the immediate, then compare as unsigned")
                    .step("Perform an unsigned comparison: rs1 < imm")
                    .step("Write the result to rd")
                    .usage("rd = (rs1 < imm) ? 1 : 0")
                    .usage("Unsigned constant comparison")
                    .example("SLTIU x1, x2, 100  # unsigned comparison")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Unsigned comparison")
                    .use_case("Address range checks")
                    .note("Unsigned comparison with an immediate"),
            ),
    ]
}

fn loads() -> [InstructionDef; 5] {
    [
        i_type("LW", opcodes::OP_LOAD, funct3::LW)
            .category(Category::Load)
            .docs(
                Documentation::new("LW rd, offset(rs1)", "Load a 32-bit word")
                    .step("Compute the address: rs1 + offset")
                    .step("Read 32 bits from memory")
                    .step("Write them to register rd")
                    .step("The address must be 4-byte aligned")
                    .usage("Loads 32-bit data")
                    .usage("Address must be 4-byte aligned")
                    .example("LW x1, 0(sp)  # load from the stack")
                    .example("LW x2, 100(x3)  # load with an offset")
                    .exceptions(LOAD_STORE_FAULTS)
                    .use_case("Variable access")
                    .use_case("Array elements")
                    .use_case("Struct fields")
                    .note("The most common load instruction"),
            ),
        i_type("LH", opcodes::OP_LOAD, funct3::LH)
            .category(Category::Load)
            .docs(
                Documentation::new("LH rd, offset(rs1)", "Load a 16-bit halfword (sign-extended)")
                    .step("Compute the address: rs1 + offset")
                    .step("Read 16 bits from memory")
                    .step("Sign-extend to 32 bits")
                    .step("Write the result to register rd")
                    .usage("Loads signed 16-bit data")
                    .usage("Sign-extends automatically")
                    .example("LH x1, 0(x2)  # load a halfword")
                    .exceptions(LOAD_STORE_FAULTS)
                    .use_case("16-bit data")
                    .use_case("Short integers")
                    .use_case("Saving memory")
                    .note("Loads a halfword and sign-extends it"),
            ),
        i_type("LHU", opcodes::OP_LOAD, funct3::LHU)
            .category(Category::Load)
            .docs(
                Documentation::new("LHU rd, offset(rs1)", "Load a 16-bit halfword (zero-extended)")
                    .step("Compute the address: rs1 + offset")
                    .step("Read 16 bits from memory")
                    .step("Zero-extend to 32 bits")
                    .step("Write the result to register rd")
                    .usage("Loads unsigned 16-bit data")
                    .usage("Zero-extends automatically")
                    .example("LHU x1, 0(x2)  # load an unsigned halfword")
                    .exceptions(LOAD_STORE_FAULTS)
                    .use_case("Unsigned 16-bit data")
                    .use_case("Character data")
                    .note("Loads a halfword and zero-extends it"),
            ),
        i_type("LB", opcodes::OP_LOAD, funct3::LB)
            .category(Category::Load)
            .docs(
                Documentation::new("LB rd, offset(rs1)", "Load an 8-bit byte (sign-extended)")
                    .step("Compute the address: rs1 + offset")
                    .step("Read 8 bits from memory")
                    .step("Sign-extend to 32 bits")
                    .step("Write the result to register rd")
                    .usage("Loads signed 8-bit data")
                    .usage("Sign-extends automatically")
                    .example("LB x1, 0(x2)  # load a byte")
                    .exceptions("Access fault")
                    .use_case("Byte data")
                    .use_case("Character processing")
                    .use_case("Signed bytes")
                    .note("Loads a byte and sign-extends it"),
            ),
        i_type("LBU", opcodes::OP_LOAD, funct3::LBU)
            .category(Category::Load)
            .docs(
                Documentation::new("LBU rd, offset(rs1)", "Load an 8-bit byte (zero-extended)")
                    .step("Compute the address: rs1 + offset")
                    .step("Read 8 bits from memory")
                    .step("Zero-extend to 32 bits")
                    .step("Write the result to register rd")
                    .usage("Loads unsigned 8-bit data")
                    .usage("Zero-extends automatically")
                    .example("LBU x1, 0(x2)  # load an unsigned byte")
                    .exceptions("Access fault")
                    .use_case("Unsigned bytes")
                    .use_case("Character data")
                    .use_case("Binary data")
                    .note("Loads a byte and zero-extends it"),
            ),
    ]
}

fn stores() -> [InstructionDef; 3] {
    [
        s_type("SW", funct3::SW).category(Category::Store).docs(
            Documentation::new("SW rs2, offset(rs1)", "Store a 32-bit word")
                .step("Compute the address: rs1 + offset")
                .step("Write the 32-bit value of rs2 to memory")
                .step("The address must be 4-byte aligned")
                .usage("Stores 32-bit data")
                .usage("Address must be 4-byte aligned")
                .example("SW x1, 0(sp)  # store to the stack")
                .example("SW x2, 100(x3)  # store with an offset")
                .exceptions(LOAD_STORE_FAULTS)
                .use_case("Variable stores")
                .use_case("Array assignment")
                .use_case("Struct updates")
                .note("The most common store instruction"),
        ),
        s_type("SH", funct3::SH).category(Category::Store).docs(
            Documentation::new("SH rs2, offset(rs1)", "Store a 16-bit halfword")
                .step("Compute the address: rs1 + offset")
                .step("Write the low 16 bits of rs2 to memory")
                .step("The address must be 2-byte aligned")
                .usage("Stores 16-bit data")
                .usage("Only the low 16 bits are stored")
                .example("SH x1, 0(x2)  # store a halfword")
                .exceptions(LOAD_STORE_FAULTS)
                .use_case("16-bit data")
                .use_case("Short integers")
                .use_case("Saving storage")
                .note("Stores the low 16 bits of the register"),
        ),
        s_type("SB", funct3::SB).category(Category::Store).docs(
            Documentation::new("SB rs2, offset(rs1)", "Store an 8-bit byte")
                .step("Compute the address: rs1 + offset")
                .step("Write the low 8 bits of rs2 to memory")
                .usage("Stores 8-bit data")
                .usage("Only the low 8 bits are stored")
                .example("SB x1, 0(x2)  # store a byte")
                .exceptions("Access fault")
                .use_case("Byte data")
                .use_case("Character storage")
                .use_case("Binary data")
                .note("Stores the low 8 bits of the register"),
        ),
    ]
}

fn branches() -> [InstructionDef; 6] {
    [
        b_type("BEQ", funct3::BEQ).category(Category::Branch).docs(
            Documentation::new("BEQ rs1, rs2, offset", "Branch if equal")
                .step("Compare the values of rs1 and rs2")
                .step("If equal, PC = PC + offset")
                .step("Otherwise continue with the next instruction")
                .step("The offset is 12 bits, 2-byte aligned")
                .usage("if (rs1 == rs2) jump")
                .usage("Conditional branch")
                .example("BEQ x1, x2, loop  # jump to loop when equal")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Loop control")
                .use_case("Conditions")
                .use_case("Equality tests")
                .note("The most common branch instruction"),
        ),
        b_type("BNE", funct3::BNE).category(Category::Branch).docs(
            Documentation::new("BNE rs1, rs2, offset", "Branch if not equal")
                .step("Compare the values of rs1 and rs2")
                .step("If not equal, PC = PC + offset")
                .step("Otherwise continue with the next instruction")
                .usage("if (rs1 != rs2) jump")
                .usage("Inequality branch")
                .example("BNE x1, zero, continue  # continue when non-zero")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Loop exit")
                .use_case("Error checks")
                .use_case("Inequality tests")
                .note("Used for inequality conditions"),
        ),
        b_type("BLT", funct3::BLT).category(Category::Branch).docs(
            Documentation::new("BLT rs1, rs2, offset", "Branch if less than (signed)")
                .step("Compare rs1 and rs2 as signed values")
                .step("If rs1 < rs2, PC = PC + offset")
                .step("Otherwise continue with the next instruction")
                .usage("if (rs1 < rs2) jump")
                .usage("Signed comparison")
                .example("BLT x1, x2, less  # jump when x1 < x2")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Signed comparison")
                .use_case("Sorting")
                .use_case("Range checks")
                .note("Signed less-than comparison"),
        ),
        b_type("BGE", funct3::BGE).category(Category::Branch).docs(
            Documentation::new("BGE rs1, rs2, offset", "Branch if greater or equal (signed)")
                .step("Compare rs1 and rs2 as signed values")
                .step("If rs1 >= rs2, PC = PC + offset")
                .step("Otherwise continue with the next instruction")
                .usage("if (rs1 >= rs2) jump")
                .usage("Signed comparison")
                .example("BGE x1, x2, greater  # jump when x1 >= x2")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Signed comparison")
                .use_case("Bounds checks")
                .use_case("Conditional execution")
                .note("Signed greater-or-equal comparison"),
        ),
        b_type("BLTU", funct3::BLTU).category(Category::Branch).docs(
            Documentation::new("BLTU rs1, rs2, offset", "Branch if less than (unsigned)")
                .step("Compare rs1 and rs2 as unsigned values")
                .step("If rs1 < rs2, PC = PC + offset")
                .step("Otherwise continue with the next instruction")
                .usage("if (rs1 < rs2) jump")
                .usage("Unsigned comparison")
                .example("BLTU x1, x2, below  # unsigned less than")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Unsigned comparison")
                .use_case("Address comparison")
                .use_case("Pointer arithmetic")
                .note("Unsigned less-than comparison"),
        ),
        b_type("BGEU", funct3::BGEU).category(Category::Branch).docs(
            Documentation::new("BGEU rs1, rs2, offset", "Branch if greater or equal (unsigned)")
                .step("Compare rs1 and rs2 as unsigned values")
                .step("If rs1 >= rs2, PC = PC + offset")
                .step("Otherwise continue with the next instruction")
                .usage("if (rs1 >= rs2) jump")
                .usage("Unsigned comparison")
                .example("BGEU x1, x2, above  # unsigned greater or equal")
                .exceptions(NO_EXCEPTIONS)
                .use_case("Unsigned comparison")
                .use_case("Address ranges")
                .use_case("Pointer checks")
                .note("Unsigned greater-or-equal comparison"),
        ),
    ]
}

fn jumps() -> [InstructionDef; 2] {
    [
        InstructionDef::new("JAL", InstructionFormat::J)
            .fixed("opcode", opcodes::OP_JAL)
            .category(Category::Jump)
            .docs(
                Documentation::new("JAL rd, offset", "Jump and link")
                    .step("Save PC + 4 in register rd")
                    .step("PC = PC + offset")
                    .step("The offset is 20 bits, 2-byte aligned")
                    .usage("Unconditional jump")
                    .usage("Function call")
                    .usage("Saves the return address")
                    .example("JAL ra, function  # call a function")
                    .example("JAL x0, label  # unconditional jump")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Function calls")
                    .use_case("Unconditional jumps")
                    .use_case("Loop jumps")
                    .note("Implements both calls and unconditional jumps"),
            ),
        i_type("JALR", opcodes::OP_JALR, funct3::JALR)
            .category(Category::Jump)
            .docs(
                Documentation::new("JALR rd, offset(rs1)", "Jump and link register")
                    .step("Compute the target address: rs1 + offset")
                    .step("Save PC + 4 in register rd")
                    .step("PC = (rs1 + offset) & ~1")
                    .step("The lowest address bit is cleared")
                    .usage("Indirect jump")
                    .usage("Function return")
                    .usage("Computed jump")
                    .example("JALR ra, 0(t0)  # indirect call")
                    .example("JALR x0, 0(ra)  # return from a function")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Function return")
                    .use_case("Indirect jumps")
                    .use_case("Dynamic dispatch")
                    .note("Supports indirect jumps and function returns"),
            ),
    ]
}

fn upper_immediates() -> [InstructionDef; 2] {
    [
        u_type("LUI", opcodes::OP_LUI)
            .category(Category::UpperImmediate)
            .docs(
                Documentation::new("LUI rd, imm", "Load upper immediate")
                    .step("Place the 20-bit immediate in the upper 20 bits of rd")
                    .step("Clear the low 12 bits")
                    .step("rd = imm << 12")
                    .usage("Loads the upper part of a large constant")
                    .usage("Pairs with ADDI to load a 32-bit constant")
                    .example("LUI x1, 0x12345  # x1 = 0x12345000")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Large constants")
                    .use_case("Address calculation")
                    .use_case("Constant construction")
                    .note("With ADDI, loads any 32-bit constant"),
            ),
        u_type("AUIPC", opcodes::OP_AUIPC)
            .category(Category::UpperImmediate)
            .docs(
                Documentation::new("AUIPC rd, imm", "Add upper immediate to PC")
                    .step("Shift the 20-bit immediate left by 12 bits")
                    .step("Add it to the current PC")
                    .step("rd = PC + (imm << 12)")
                    .usage("PC-relative address calculation")
                    .usage("Position-independent code")
                    .example("AUIPC x1, 0x1000  # x1 = PC + 0x1000000")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("PC-relative addressing")
                    .use_case("Position-independent code")
                    .use_case("GOT access")
                    .note("Used for position-independent code and PC-relative addressing"),
            ),
    ]
}

fn system_instructions() -> [InstructionDef; 3] {
    [
        system("ECALL", funct12::ECALL)
            .category(Category::System)
            .docs(
                Documentation::new("ECALL", "Environment call")
                    .step("Raise an environment-call exception")
                    .step("Transfer control to the trap handler")
                    .step("Used for system calls")
                    .usage("System call")
                    .usage("Trap into the kernel")
                    .usage("Request a service")
                    .example("ECALL  # system call")
                    .exceptions("Environment-call exception")
                    .use_case("System calls")
                    .use_case("Kernel interface")
                    .use_case("Operating system services")
                    .note("Calls system services from user mode"),
            ),
        system("EBREAK", funct12::EBREAK)
            .category(Category::System)
            .docs(
                Documentation::new("EBREAK", "Environment breakpoint")
                    .step("Raise a breakpoint exception")
                    .step("Transfer control to the trap handler")
                    .step("Used for debugging")
                    .usage("Debug breakpoint")
                    .usage("Pause the program")
                    .usage("Debugger interface")
                    .example("EBREAK  # breakpoint")
                    .exceptions("Breakpoint exception")
                    .use_case("Debug breakpoints")
                    .use_case("Program debugging")
                    .use_case("Exception tests")
                    .note("Used for debugging and program breakpoints"),
            ),
        InstructionDef::new("FENCE", InstructionFormat::Fence)
            .fixed("fm", 0_u32)
            .fixed("rs1", 0_u32)
            .fixed("funct3", funct3::FENCE)
            .fixed("rd", 0_u32)
            .fixed("opcode", opcodes::OP_MISC_MEM)
            .category(Category::System)
            .docs(
                Documentation::new("FENCE pred, succ", "Memory ordering fence")
                    .step("Order memory operations")
                    .step("pred selects the preceding operation types")
                    .step("succ selects the succeeding operation types")
                    .step("Guarantees memory consistency")
                    .usage("Memory barrier")
                    .usage("Multi-core synchronization")
                    .usage("Memory ordering")
                    .example("FENCE  # full memory barrier")
                    .exceptions(NO_EXCEPTIONS)
                    .use_case("Multi-core synchronization")
                    .use_case("Memory barriers")
                    .use_case("Atomic operations")
                    .note("Ensures visibility and ordering of memory operations"),
            ),
    ]
}
