//! Instruction Set Architecture (ISA) tables.
//!
//! Contains opcode and function-code constants plus the built-in instruction
//! definition tables, organized by RISC-V extension.
//!
//! # Extensions
//!
//! * `rv32i`: Base Integer Instruction Set (32-bit).

/// Base integer instruction set (32-bit RISC-V core instructions).
pub mod rv32i;
