
use crate::constants::{ALU_MASK, MAX_OPERANDS, OPERANDS_SHIFT};

use std::fmt;

use derive_more::IsVariant;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;


#[macro_export]
macro_rules! ins {
    ($op:ident $(, $arg:expr)* $(,)?) => {
        $crate::isa::Ins::new($crate::isa::Opcode::$op, &[$($arg),*])
    };
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum OperandKind {
    Reg,
    Imm,
}

#[derive(Debug, Clone, Copy, FromPrimitive, ToPrimitive, PartialEq, Eq, Hash)]
pub enum Opcode {
    Hlt = 0b0000_0001,

    Prn = 0b0100_0111,

    Ldi = 0b1000_0010,
    Ld  = 0b1000_0011,
    St  = 0b1000_0100,

    Add = 0b1010_0000,
    Sub = 0b1010_0001,
    Mul = 0b1010_0010,
    Div = 0b1010_0011,
}

impl Opcode {
    pub const ALL: &[Opcode] = &[
        Opcode::Hlt,
        Opcode::Prn,
        Opcode::Ldi,
        Opcode::Ld,
        Opcode::St,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::Div,
    ];

    pub fn decode(byte: u8) -> Option<Opcode> {
        Opcode::from_u8(byte)
    }

    pub fn encode(self) -> u8 {
        self as u8
    }

    // Encoded in the top two bits.
    pub fn num_operands(self) -> usize {
        (self.encode() >> OPERANDS_SHIFT) as usize
    }

    pub fn is_alu(self) -> bool {
        self.encode() & ALU_MASK != 0
    }

    // Opcode byte plus operands, i.e., how far pc advances.
    pub fn size(self) -> usize {
        1 + self.num_operands()
    }

    pub fn operand_kinds(self) -> &'static [OperandKind] {
        use Opcode::*;
        use OperandKind::*;
        match self {
            Hlt => &[],
            Prn => &[Reg],
            Ldi => &[Reg, Imm],
            Ld | St | Add | Sub | Mul | Div => &[Reg, Reg],
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ins {
    pub op: Opcode,
    operands: [u8; MAX_OPERANDS],
}

impl Ins {
    pub fn new(op: Opcode, operands: &[u8]) -> Ins {
        assert_eq!(
            operands.len(),
            op.num_operands(),
            "{op} takes {} operand(s)",
            op.num_operands()
        );
        let mut ins = Ins{op, operands: [0; MAX_OPERANDS]};
        ins.operands[..operands.len()].copy_from_slice(operands);
        ins
    }

    pub fn operands(&self) -> &[u8] {
        &self.operands[..self.op.num_operands()]
    }

    pub fn size(&self) -> usize {
        self.op.size()
    }

    // None if the first byte isn't an opcode or the input is too short for
    // its operands.
    pub fn decode(input: &[u8]) -> Option<Ins> {
        let op = Opcode::decode(*input.first()?)?;
        let operands = input.get(1..op.size())?;
        Some(Ins::new(op, operands))
    }

    pub fn emit(&self, out: &mut Vec<u8>) {
        out.push(self.op.encode());
        out.extend_from_slice(self.operands());
    }
}

impl fmt::Display for Ins {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.op)?;
        let args = self.op.operand_kinds().iter().zip(self.operands());
        for (i, (kind, val)) in args.enumerate() {
            let sep = if i == 0 { "\t" } else { ", " };
            match kind {
                OperandKind::Reg => write!(f, "{sep}r{val}")?,
                OperandKind::Imm => write!(f, "{sep}{val}")?,
            }
        }
        Ok(())
    }
}

pub fn emit_program(prog: &[Ins]) -> Vec<u8> {
    let mut out = vec![];
    for ins in prog {
        ins.emit(&mut out);
    }
    out
}
