//! Instruction formats and their canonical field layouts.
//!
//! Every format partitions bits 31..0 into contiguous fields, listed from the
//! most significant bit down. Some formats also name sub-fields that carve a
//! canonical field into smaller pieces (the I-format shift-immediates fix the
//! upper seven bits of `imm[11:0]`).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::field::BitField;

/// Standard field definitions shared across formats.
pub mod fields {
    use super::BitField;

    /// Major opcode (bits 6-0).
    pub const OPCODE: BitField = BitField::new("opcode", 6, 0);
    /// Destination register (bits 11-7).
    pub const RD: BitField = BitField::new("rd", 11, 7);
    /// Minor opcode (bits 14-12).
    pub const FUNCT3: BitField = BitField::new("funct3", 14, 12);
    /// First source register (bits 19-15).
    pub const RS1: BitField = BitField::new("rs1", 19, 15);
    /// Second source register (bits 24-20).
    pub const RS2: BitField = BitField::new("rs2", 24, 20);
    /// Alternate-operation selector (bits 31-25).
    pub const FUNCT7: BitField = BitField::new("funct7", 31, 25);

    /// I-type immediate (bits 31-20).
    pub const I_IMM: BitField = BitField::new("imm[11:0]", 31, 20);
    /// Shift amount of the shift-immediates (bits 24-20, inside `imm[11:0]`).
    pub const SHAMT: BitField = BitField::new("shamt", 24, 20);

    /// S-type immediate, upper part (bits 31-25).
    pub const S_IMM_HI: BitField = BitField::new("imm[11:5]", 31, 25);
    /// S-type immediate, lower part (bits 11-7).
    pub const S_IMM_LO: BitField = BitField::new("imm[4:0]", 11, 7);

    /// B-type immediate, upper part (bits 31-25).
    pub const B_IMM_HI: BitField = BitField::new("imm[12|10:5]", 31, 25);
    /// B-type immediate, lower part (bits 11-7).
    pub const B_IMM_LO: BitField = BitField::new("imm[4:1|11]", 11, 7);

    /// U-type immediate (bits 31-12).
    pub const U_IMM: BitField = BitField::new("imm[31:12]", 31, 12);
    /// J-type immediate (bits 31-12).
    pub const J_IMM: BitField = BitField::new("imm[20|10:1|11|19:12]", 31, 12);

    /// System function code (bits 31-20).
    pub const FUNCT12: BitField = BitField::new("funct12", 31, 20);

    /// Fence mode (bits 31-28).
    pub const FM: BitField = BitField::new("fm", 31, 28);
    /// Predecessor set (bits 27-24).
    pub const PRED: BitField = BitField::new("pred", 27, 24);
    /// Successor set (bits 23-20).
    pub const SUCC: BitField = BitField::new("succ", 23, 20);
}

use fields::{
    B_IMM_HI, B_IMM_LO, FM, FUNCT3, FUNCT7, FUNCT12, I_IMM, J_IMM, OPCODE, PRED, RD, RS1, RS2,
    S_IMM_HI, S_IMM_LO, SHAMT, SUCC, U_IMM,
};

const R_LAYOUT: [BitField; 6] = [FUNCT7, RS2, RS1, FUNCT3, RD, OPCODE];
const I_LAYOUT: [BitField; 5] = [I_IMM, RS1, FUNCT3, RD, OPCODE];
const I_SUBFIELDS: [BitField; 2] = [FUNCT7, SHAMT];
const S_LAYOUT: [BitField; 6] = [S_IMM_HI, RS2, RS1, FUNCT3, S_IMM_LO, OPCODE];
const B_LAYOUT: [BitField; 6] = [B_IMM_HI, RS2, RS1, FUNCT3, B_IMM_LO, OPCODE];
const U_LAYOUT: [BitField; 3] = [U_IMM, RD, OPCODE];
const J_LAYOUT: [BitField; 3] = [J_IMM, RD, OPCODE];
const SYSTEM_LAYOUT: [BitField; 5] = [FUNCT12, RS1, FUNCT3, RD, OPCODE];
const FENCE_LAYOUT: [BitField; 7] = [FM, PRED, SUCC, RS1, FUNCT3, RD, OPCODE];

/// RISC-V base instruction layout class.
///
/// The variant decides which bit positions carry which role; the catalog only
/// ever stores the variant, never a per-instruction layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum InstructionFormat {
    /// Register-register operations.
    R,
    /// Register-immediate operations, loads, and `JALR`.
    I,
    /// Stores.
    S,
    /// Conditional branches.
    B,
    /// Upper-immediate operations.
    U,
    /// Unconditional jump.
    J,
    /// Argument-less system instructions (`ECALL`, `EBREAK`).
    #[serde(alias = "System")]
    SystemNoArgs,
    /// Memory ordering.
    Fence,
}

impl InstructionFormat {
    /// Every format, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::R,
        Self::I,
        Self::S,
        Self::B,
        Self::U,
        Self::J,
        Self::SystemNoArgs,
        Self::Fence,
    ];

    /// Canonical layout, most significant field first. The fields partition
    /// the 32-bit word exactly.
    pub const fn fields(self) -> &'static [BitField] {
        match self {
            Self::R => &R_LAYOUT,
            Self::I => &I_LAYOUT,
            Self::S => &S_LAYOUT,
            Self::B => &B_LAYOUT,
            Self::U => &U_LAYOUT,
            Self::J => &J_LAYOUT,
            Self::SystemNoArgs => &SYSTEM_LAYOUT,
            Self::Fence => &FENCE_LAYOUT,
        }
    }

    /// Named sub-ranges of canonical fields. Each lies inside exactly one
    /// canonical field.
    pub const fn subfields(self) -> &'static [BitField] {
        match self {
            Self::I => &I_SUBFIELDS,
            _ => &[],
        }
    }

    /// Looks up a canonical field or sub-field by name.
    pub fn field(self, name: &str) -> Option<BitField> {
        self.fields()
            .iter()
            .chain(self.subfields())
            .find(|f| f.name() == name)
            .copied()
    }

    /// The canonical field that encloses `field`.
    pub fn parent_of(self, field: BitField) -> Option<BitField> {
        self.fields().iter().find(|f| f.contains(&field)).copied()
    }

    /// Short display name (`"R"`, `"SYSTEM"`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            Self::R => "R",
            Self::I => "I",
            Self::S => "S",
            Self::B => "B",
            Self::U => "U",
            Self::J => "J",
            Self::SystemNoArgs => "SYSTEM",
            Self::Fence => "FENCE",
        }
    }
}

impl fmt::Display for InstructionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
