
pub const MEM_SIZE: usize = 256; // Bytes
pub const NUM_REGS: usize = 8;

// Instruction byte layout: AABCDDDD
// AA: number of operands, B: ALU operation, DDDD: instruction identifier.
pub const OPERANDS_SHIFT: u8 = 6;
pub const ALU_MASK: u8 = 0b0010_0000;
pub const MAX_OPERANDS: usize = 2;
