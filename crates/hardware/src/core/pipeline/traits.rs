//! Pipeline Latch Interface.
//!
//! Every latch carries an instruction word; stalls and squashes act on that word alone
//! and leave the latch's data fields untouched.

use crate::common::constants::NOOP_INSTRUCTION;
use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::{InstructionBits, Opcode};

/// Represents a pipeline latch (inter-stage register).
pub trait PipelineLatch {
    /// The instruction word held by the latch.
    fn instr(&self) -> u32;

    /// Replaces the instruction word.
    fn set_instr(&mut self, instr: u32);

    /// Checks if the latch holds a `noop`, whatever its field bits.
    ///
    /// # Returns
    ///
    /// `true` if the latch carries no useful work this cycle.
    fn is_bubble(&self) -> bool {
        self.instr().op() == Some(Opcode::Noop)
    }

    /// Voids the instruction in the latch, turning it into a bubble.
    ///
    /// # Returns
    ///
    /// `true` if a real instruction (anything but `noop`) was discarded.
    fn squash(&mut self) -> bool {
        let discarded = !self.is_bubble();
        self.set_instr(NOOP_INSTRUCTION);
        discarded
    }
}

macro_rules! impl_pipeline_latch {
    ($($latch:ty),+ $(,)?) => {
        $(
            impl PipelineLatch for $latch {
                #[inline]
                fn instr(&self) -> u32 {
                    self.instr
                }

                #[inline]
                fn set_instr(&mut self, instr: u32) {
                    self.instr = instr;
                }
            }
        )+
    };
}

impl_pipeline_latch!(IfId, IdEx, ExMem, MemWb, WbEnd);
