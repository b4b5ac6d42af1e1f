//! RISC-V System Function Codes (funct12).
//!
//! The `funct12` field (bits 31-20) selects the argument-less system
//! instruction under the SYSTEM opcode with `funct3 = PRIV`.

/// Environment Call (ECALL).
pub const ECALL: u32 = 0x000;

/// Environment Break (EBREAK).
pub const EBREAK: u32 = 0x001;
