use common::isa::Ins;

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembled {
    pub addr: usize,
    pub repr: Vec<u8>,
    pub interp: Option<Ins>,
}

impl fmt::Display for Disassembled {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:02X}:", self.addr)?;
        for byte in &self.repr {
            write!(f, " {byte:08b}")?;
        }
        if let Some(ins) = &self.interp {
            // Pad to the widest instruction so mnemonics line up.
            let pad = (ins.op.size().max(3) - self.repr.len()) * 9;
            write!(f, "{:pad$}  {ins}", "")?;
        }
        Ok(())
    }
}

// Bytes that don't decode (unknown opcode, or operands cut off by the end of
// the program) are listed one at a time without an interpretation.
pub fn disassemble(bin: &[u8]) -> Vec<Disassembled> {
    let mut out = vec![];
    let mut addr = 0;
    while addr < bin.len() {
        if let Some(ins) = Ins::decode(&bin[addr..]) {
            out.push(Disassembled{
                addr,
                repr: bin[addr..addr + ins.size()].into(),
                interp: Some(ins),
            });
            addr += ins.size();
        } else {
            out.push(Disassembled{
                addr,
                repr: vec![bin[addr]],
                interp: None,
            });
            addr += 1;
        }
    }

    out
}
