use common::constants::MEM_SIZE;

use crate::error::{CpuError, Result};

use log::trace;

pub struct Memory {
    cells: [u8; MEM_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        Memory{ cells: [0; MEM_SIZE] }
    }

    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    pub fn read(&self, addr: usize) -> Result<u8> {
        self.cells.get(addr).copied().ok_or(CpuError::OutOfBounds(addr as i64))
    }

    pub fn write(&mut self, addr: usize, val: u8) -> Result<u8> {
        let cell = self.cells.get_mut(addr).ok_or(CpuError::OutOfBounds(addr as i64))?;
        trace!("Mem: writing {val:#04x} to {addr:#04x}");
        *cell = val;
        Ok(val)
    }

    // Checks the whole range first so a failed load leaves memory untouched.
    pub fn load(&mut self, data: &[u8], start: usize) -> Result<()> {
        let end = start.saturating_add(data.len());
        if end > self.capacity() {
            return Err(CpuError::OutOfBounds(end.saturating_sub(1) as i64));
        }
        self.cells[start..end].copy_from_slice(data);
        Ok(())
    }

    // Up to `len` bytes starting at `addr`, cut short at the end of memory.
    pub fn window(&self, addr: usize, len: usize) -> &[u8] {
        let start = addr.min(self.capacity());
        let end = addr.saturating_add(len).min(self.capacity());
        &self.cells[start..end]
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
