//! Instruction Set Architecture (ISA) Definitions.
//!
//! The LC-2K instruction set: eight opcodes, three register fields and one 16-bit
//! field, in a single 32-bit format.

/// Instruction decoding and encoding.
pub mod decode;

/// Instruction disassembler for traces and load listings.
pub mod disasm;

/// Instruction field extraction utilities.
pub mod instruction;

/// Opcode enumeration and the per-opcode behavior table.
pub mod opcodes;

pub use decode::{Decoded, decode, encode, encode_offset};
pub use instruction::InstructionBits;
pub use opcodes::Opcode;
