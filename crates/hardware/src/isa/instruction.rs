//! Instruction encoding and field extraction utilities.
//!
//! LC-2K instruction layout:
//!
//! ```text
//!  31..25   24..22   21..19   18..16   15..0
//! (unused)  opcode   field A  field B  field C (destReg or signed offset)
//! ```
//!
//! The opcode is taken as everything above bit 22, so a word with any of bits 25-31
//! set decodes to an unknown opcode and renders as data.

use crate::common::constants::NUM_REGS;
use crate::isa::opcodes::{DestField, Opcode, info_of};

/// Bit shift for the opcode field.
pub const OPCODE_SHIFT: u32 = 22;
/// Bit shift for field A (bits 19-21).
pub const FIELD_A_SHIFT: u32 = 19;
/// Bit shift for field B (bits 16-18).
pub const FIELD_B_SHIFT: u32 = 16;
/// Bit mask for the 3-bit opcode when encoding.
pub const OPCODE_MASK: u32 = 0x7;
/// Bit mask for a 3-bit register field.
pub const REG_FIELD_MASK: u32 = 0x7;
/// Bit mask for the 16-bit field C.
pub const FIELD_C_MASK: u32 = 0xFFFF;

/// Field extraction on raw instruction words.
pub trait InstructionBits {
    /// Raw opcode value (`word >> 22`). Values above 7 are unknown opcodes.
    fn opcode(&self) -> u32;

    /// Decoded opcode, or `None` for unknown opcode values.
    fn op(&self) -> Option<Opcode>;

    /// Field A, bits 19-21 (register operand A).
    fn field_a(&self) -> usize;

    /// Field B, bits 16-18 (register operand B, or the `lw` destination).
    fn field_b(&self) -> usize;

    /// Field C, bits 0-15, unextended.
    fn field_c(&self) -> u32;

    /// Field C sign-extended from 16 bits.
    fn offset(&self) -> i32;

    /// Destination register written by this instruction, if any.
    ///
    /// An `add`/`nor` whose field C does not name one of the eight registers has no
    /// destination: its write is discarded and it never forwards.
    fn dest_reg(&self) -> Option<usize>;
}

impl InstructionBits for u32 {
    #[inline]
    fn opcode(&self) -> u32 {
        self >> OPCODE_SHIFT
    }

    #[inline]
    fn op(&self) -> Option<Opcode> {
        Opcode::from_raw(self.opcode())
    }

    #[inline]
    fn field_a(&self) -> usize {
        ((self >> FIELD_A_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline]
    fn field_b(&self) -> usize {
        ((self >> FIELD_B_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline]
    fn field_c(&self) -> u32 {
        self & FIELD_C_MASK
    }

    #[inline]
    fn offset(&self) -> i32 {
        sign_extend_16(self.field_c())
    }

    fn dest_reg(&self) -> Option<usize> {
        match info_of(self.op()).dest {
            DestField::None => None,
            DestField::FieldB => Some(self.field_b()),
            DestField::FieldC => {
                let reg = self.field_c() as usize;
                (reg < NUM_REGS).then_some(reg)
            }
        }
    }
}

/// Sign-extends the low 16 bits of `val` to a 32-bit two's-complement integer.
#[inline]
pub const fn sign_extend_16(val: u32) -> i32 {
    (val & FIELD_C_MASK) as u16 as i16 as i32
}
