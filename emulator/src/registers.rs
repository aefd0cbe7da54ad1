use common::constants::NUM_REGS;

use crate::error::{CpuError, Result};

use log::trace;

// Registers are signed 64 bit and are not truncated to a byte, so repeated
// arithmetic grows past 255. Leaving the i64 range is reported by the ALU.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [i64; NUM_REGS],
}

impl RegisterFile {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, idx: u8) -> Result<i64> {
        self.regs.get(idx as usize).copied().ok_or(CpuError::InvalidRegister(idx))
    }

    pub fn set(&mut self, idx: u8, val: i64) -> Result<()> {
        let reg = self.regs.get_mut(idx as usize).ok_or(CpuError::InvalidRegister(idx))?;
        trace!("Reg: writing {val} to r{idx}");
        *reg = val;
        Ok(())
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.regs
    }
}
