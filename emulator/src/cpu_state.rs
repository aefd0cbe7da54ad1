use crate::error::Result;
use crate::memory::Memory;
use crate::registers::RegisterFile;

use derive_more::IsVariant;
use log::trace;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Status {
    #[default]
    Idle,
    Running,
    Halted,
}

// Everything an instruction can observe or change. Kept apart from the Cpu so
// it can be inspected and traced without the output device.
#[derive(Default)]
pub struct CpuState {
    pub(crate) num_ins: usize,
    pub(crate) mem: Memory,
    pub(crate) regs: RegisterFile,
    pub(crate) pc: usize,
    pub(crate) running: bool,
    pub(crate) status: Status,
}

impl CpuState {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn inc_ins(&mut self) {
        self.num_ins += 1;
    }

    pub fn num_ins(&self) -> usize {
        self.num_ins
    }

    pub fn mem_read(&self, addr: usize) -> Result<u8> {
        self.mem.read(addr)
    }

    pub fn mem_write(&mut self, addr: usize, val: u8) -> Result<u8> {
        self.mem.write(addr, val)
    }

    pub fn reg_read(&self, idx: u8) -> Result<i64> {
        self.regs.get(idx)
    }

    pub fn reg_write(&mut self, idx: u8, val: i64) -> Result<()> {
        self.regs.set(idx, val)
    }

    pub fn regs(&self) -> &RegisterFile {
        &self.regs
    }

    pub fn mem(&self) -> &Memory {
        &self.mem
    }

    pub fn pc(&self) -> usize {
        self.pc
    }

    pub fn set_pc(&mut self, pc: usize) {
        trace!("PC: {:#04x} -> {pc:#04x}", self.pc);
        self.pc = pc;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn status(&self) -> Status {
        self.status
    }
}
