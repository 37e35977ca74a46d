//! LC-2K Opcodes and the Per-Opcode Behavior Table.
//!
//! Every stage that needs to know how an instruction uses its fields consults
//! [`OpcodeInfo`] instead of matching on opcodes directly:
//! 1. **Forwarding:** whether the instruction consumes register operands.
//! 2. **Writeback:** which field, if any, names the destination register.
//! 3. **Load-use detection:** which fields are compared against an in-flight load.

/// The eight LC-2K opcodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Opcode {
    /// `add regA regB destReg`: destReg = regA + regB.
    Add = 0,
    /// `nor regA regB destReg`: destReg = !(regA | regB).
    Nor = 1,
    /// `lw regA regB offset`: regB = mem[regA + offset].
    Lw = 2,
    /// `sw regA regB offset`: mem[regA + offset] = regB.
    Sw = 3,
    /// `beq regA regB offset`: branch to pc + 1 + offset when regA == regB.
    Beq = 4,
    /// `jalr regA regB`: decoded and displayed, not executed by the pipeline.
    Jalr = 5,
    /// `halt`: stops the machine once it retires.
    Halt = 6,
    /// `noop`: does nothing.
    Noop = 7,
}

/// Which instruction field names the destination register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DestField {
    /// The instruction writes no register.
    None,
    /// Field B (bits 16-18) is the destination (`lw`).
    FieldB,
    /// The low bits of field C (bits 0-15) are the destination (`add`, `nor`).
    FieldC,
}

/// Fields of an instruction in decode that are compared against a load's destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HazardFields {
    /// Only field A is a source (`lw`, whose field B is a destination).
    FieldA,
    /// Both field A and field B are checked.
    FieldsAB,
}

/// Static behavior of one opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeInfo {
    /// Assembly mnemonic.
    pub mnemonic: &'static str,
    /// Whether the instruction consumes register operands in execute and therefore
    /// receives forwarded values.
    pub reads_registers: bool,
    /// Destination register field.
    pub dest: DestField,
    /// Fields checked by the load-use stall detector.
    pub hazard_fields: HazardFields,
}

const fn entry(
    mnemonic: &'static str,
    reads_registers: bool,
    dest: DestField,
    hazard_fields: HazardFields,
) -> OpcodeInfo {
    OpcodeInfo {
        mnemonic,
        reads_registers,
        dest,
        hazard_fields,
    }
}

/// Behavior table indexed by opcode value.
static OPCODE_TABLE: [OpcodeInfo; 8] = [
    entry("add", true, DestField::FieldC, HazardFields::FieldsAB),
    entry("nor", true, DestField::FieldC, HazardFields::FieldsAB),
    entry("lw", true, DestField::FieldB, HazardFields::FieldA),
    entry("sw", true, DestField::None, HazardFields::FieldsAB),
    entry("beq", true, DestField::None, HazardFields::FieldsAB),
    entry("jalr", false, DestField::None, HazardFields::FieldsAB),
    entry("halt", false, DestField::None, HazardFields::FieldsAB),
    entry("noop", false, DestField::None, HazardFields::FieldsAB),
];

/// Behavior of a word whose opcode bits match no LC-2K opcode.
///
/// Such a word still flows through the pipeline: its fields are read and forwarded
/// into, but nothing is computed or written.
pub const UNKNOWN_OPCODE: OpcodeInfo =
    entry(".fill", true, DestField::None, HazardFields::FieldsAB);

impl Opcode {
    /// All opcodes in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Nor,
        Self::Lw,
        Self::Sw,
        Self::Beq,
        Self::Jalr,
        Self::Halt,
        Self::Noop,
    ];

    /// Maps a raw opcode value (`word >> 22`) to an opcode.
    pub const fn from_raw(raw: u32) -> Option<Self> {
        match raw {
            0 => Some(Self::Add),
            1 => Some(Self::Nor),
            2 => Some(Self::Lw),
            3 => Some(Self::Sw),
            4 => Some(Self::Beq),
            5 => Some(Self::Jalr),
            6 => Some(Self::Halt),
            7 => Some(Self::Noop),
            _ => None,
        }
    }

    /// Numeric encoding of the opcode.
    pub const fn raw(self) -> u32 {
        self as u32
    }

    /// Static behavior of this opcode.
    pub const fn info(self) -> &'static OpcodeInfo {
        &OPCODE_TABLE[self as usize]
    }

    /// Assembly mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        self.info().mnemonic
    }

    /// Whether the opcode writes a register in writeback.
    pub const fn writes_register(self) -> bool {
        !matches!(self.info().dest, DestField::None)
    }
}

/// Behavior of an optional opcode, falling back to [`UNKNOWN_OPCODE`].
pub const fn info_of(op: Option<Opcode>) -> &'static OpcodeInfo {
    match op {
        Some(op) => op.info(),
        None => &UNKNOWN_OPCODE,
    }
}
