//! Global constants.

/// Width of a base (non-compressed) RISC-V instruction in bits.
pub const INSTRUCTION_WIDTH: u32 = 32;

/// Highest bit index inside an instruction word.
pub const MAX_BIT: u8 = (INSTRUCTION_WIDTH - 1) as u8;

/// Bit mask for extracting the opcode field (bits 0-6) from an instruction word.
pub const OPCODE_MASK: u32 = 0x7F;

/// Mask value meaning "every bit of the word".
pub const FULL_WORD_MASK: u32 = u32::MAX;
