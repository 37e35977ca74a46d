//! Instruction Disassembler.
//!
//! Converts a 32-bit word into LC-2K assembly text for traces and load listings.
//!
//! | Opcode                        | Rendering                 |
//! |-------------------------------|---------------------------|
//! | `add` `nor` `lw` `sw` `beq`   | `add 0 1 2`, `lw 0 1 -3`  |
//! | `jalr`                        | `jalr 1 2`                |
//! | `halt` `noop`                 | `halt`                    |
//! | anything else                 | `.fill -1` (signed value) |

use crate::isa::decode::decode;
use crate::isa::opcodes::Opcode;

/// Disassembles a 32-bit word.
///
/// Field C is always printed sign-extended, also for `add` and `nor` where it names
/// the destination register.
///
/// ```
/// use pipesim_core::isa::disasm::disassemble;
/// assert_eq!(disassemble(0x0001_0002), "add 0 1 2");
/// assert_eq!(disassemble(0x01c0_0000), "noop");
/// assert_eq!(disassemble(0xffff_ffff), ".fill -1");
/// ```
pub fn disassemble(inst: u32) -> String {
    let d = decode(inst);
    match d.opcode {
        Some(op @ (Opcode::Add | Opcode::Nor | Opcode::Lw | Opcode::Sw | Opcode::Beq)) => {
            format!("{} {} {} {}", op.mnemonic(), d.field_a, d.field_b, d.imm)
        }
        Some(op @ Opcode::Jalr) => format!("{} {} {}", op.mnemonic(), d.field_a, d.field_b),
        Some(op @ (Opcode::Halt | Opcode::Noop)) => op.mnemonic().to_string(),
        None => format!(".fill {}", inst as i32),
    }
}
