//! LC-2K Instruction Decoder and Encoder.
//!
//! Decoding is pure and total: every 32-bit value produces a [`Decoded`] without error.
//! Encoding is the inverse for well-formed words, so decode-then-encode reproduces
//! `add`, `nor`, `lw`, `sw` and `beq` words bit for bit.

use crate::isa::instruction::{
    FIELD_A_SHIFT, FIELD_B_SHIFT, FIELD_C_MASK, InstructionBits, OPCODE_MASK, OPCODE_SHIFT,
    REG_FIELD_MASK,
};
use crate::isa::opcodes::Opcode;

/// A fully decoded instruction word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// The original encoding.
    pub raw: u32,
    /// Opcode, or `None` when the opcode bits match no LC-2K opcode.
    pub opcode: Option<Opcode>,
    /// Register field A.
    pub field_a: usize,
    /// Register field B.
    pub field_b: usize,
    /// Field C as stored (16 bits, unextended).
    pub field_c: u32,
    /// Field C sign-extended; the offset for `lw`, `sw` and `beq`.
    pub imm: i32,
}

impl Decoded {
    /// Re-encodes the decoded fields.
    ///
    /// Returns `None` for unknown opcodes, which have no canonical encoding.
    pub fn encode(&self) -> Option<u32> {
        self.opcode
            .map(|op| encode(op, self.field_a, self.field_b, self.field_c))
    }
}

/// Decodes an instruction word into its component fields.
///
/// # Arguments
///
/// * `inst` - The 32-bit instruction encoding to decode.
pub fn decode(inst: u32) -> Decoded {
    Decoded {
        raw: inst,
        opcode: inst.op(),
        field_a: inst.field_a(),
        field_b: inst.field_b(),
        field_c: inst.field_c(),
        imm: inst.offset(),
    }
}

/// Encodes an instruction from its fields.
///
/// Register fields are truncated to 3 bits and field C to 16 bits.
///
/// # Arguments
///
/// * `op` - The opcode.
/// * `field_a` - Register field A.
/// * `field_b` - Register field B.
/// * `field_c` - Destination register or 16-bit offset pattern.
pub const fn encode(op: Opcode, field_a: usize, field_b: usize, field_c: u32) -> u32 {
    ((op.raw() & OPCODE_MASK) << OPCODE_SHIFT)
        | (((field_a as u32) & REG_FIELD_MASK) << FIELD_A_SHIFT)
        | (((field_b as u32) & REG_FIELD_MASK) << FIELD_B_SHIFT)
        | (field_c & FIELD_C_MASK)
}

/// Encodes an I-type instruction (`lw`, `sw`, `beq`) with a signed offset.
///
/// Offsets outside the 16-bit range are truncated to their low 16 bits.
pub const fn encode_offset(op: Opcode, field_a: usize, field_b: usize, offset: i32) -> u32 {
    encode(op, field_a, field_b, offset as u32 & FIELD_C_MASK)
}
