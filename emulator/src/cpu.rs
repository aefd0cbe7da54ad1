
use common::constants::MAX_OPERANDS;
use common::isa::{Ins, Opcode};
use crate::alu;
use crate::error::{CpuError, Result};
use crate::io::{Console, StdoutConsole};
use crate::{CpuState, Status};

use std::sync::Arc;

use delegate::delegate;
use derive_more::IsVariant;
use log::{debug, info, warn};


#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum ExecRet {
    Ok,
    Halt,
    // Unknown opcode, pc moved past it.
    Skipped(u8),
}


pub struct Cpu {
    state: CpuState,
    console: Arc<dyn Console>,
    step_limit: Option<usize>,
}

impl Cpu {
    pub fn new() -> Cpu {
        Self::with_console(Arc::new(StdoutConsole))
    }

    pub fn with_console(console: Arc<dyn Console>) -> Cpu {
        Cpu {
            state: CpuState::new(),
            console,
            step_limit: None,
        }
    }

    // Bounds a single run(), for programs that never reach a halt.
    pub fn set_step_limit(&mut self, limit: Option<usize>) {
        self.step_limit = limit;
    }

    delegate! {
        to self.state {
            pub fn pc(&self) -> usize;
            pub fn set_pc(&mut self, pc: usize);
            pub fn status(&self) -> Status;
            pub fn is_running(&self) -> bool;
            pub fn num_ins(&self) -> usize;
            pub fn mem_read(&self, addr: usize) -> Result<u8>;
            pub fn mem_write(&mut self, addr: usize, val: u8) -> Result<u8>;
            pub fn reg_read(&self, idx: u8) -> Result<i64>;
            pub fn reg_write(&mut self, idx: u8, val: i64) -> Result<()>;
            pub fn trace(&self) -> String;
        }
    }

    pub fn get_state(&self) -> &CpuState {
        &self.state
    }

    pub fn get_state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    pub fn load_image(&mut self, data: &[u8], start: usize) -> Result<()> {
        self.state.mem.load(data, start)?;
        debug!("Loaded {} bytes at {start:#04x}", data.len());
        Ok(())
    }

    // Run until a halt or an error.
    pub fn run(&mut self) -> Result<()> {
        self.start();
        info!("Running from {:#04x}", self.state.pc);

        let mut steps = 0usize;
        while self.state.running {
            if self.step_limit.is_some_and(|limit| steps >= limit) {
                self.stop();
                return Err(CpuError::StepLimit(steps));
            }
            self.step()?;
            steps += 1;
        }

        info!("Halted at {:#04x} after {steps} instructions", self.state.pc);
        Ok(())
    }

    pub fn run_at(&mut self, pc: usize) -> Result<()> {
        self.state.set_pc(pc);
        self.run()
    }

    // Execute a single instruction. Leaves the cpu halted on HLT or on an error.
    pub fn step(&mut self) -> Result<ExecRet> {
        if !self.state.running {
            self.start();
        }
        self.state.inc_ins();

        let ret = self.exec_next();
        if !matches!(ret, Ok(ExecRet::Ok | ExecRet::Skipped(_))) {
            self.stop();
        }
        ret
    }

    fn start(&mut self) {
        self.state.running = true;
        self.state.status = Status::Running;
    }

    fn stop(&mut self) {
        self.state.running = false;
        self.state.status = Status::Halted;
    }

    fn exec_next(&mut self) -> Result<ExecRet> {
        let pc = self.state.pc;
        let byte = self.state.mem_read(pc)?;

        let Some(op) = Opcode::decode(byte) else {
            // Keep going; if the byte was really an operand, decoding is now out of step.
            warn!("Unknown instruction {byte:#010b} at {pc:#04x}");
            self.console.diagnostic(&format!("Unknown instruction: {byte}"));
            self.state.set_pc(pc + 1);
            return Ok(ExecRet::Skipped(byte));
        };

        let ins = self.fetch_operands(op)?;
        debug!("PC: {pc:#04x}: {ins}");
        self.exec(&ins)
    }

    fn fetch_operands(&self, op: Opcode) -> Result<Ins> {
        let num = op.num_operands();
        let mut operands = [0u8; MAX_OPERANDS];
        for (i, operand) in operands.iter_mut().take(num).enumerate() {
            *operand = self.state.mem_read(self.state.pc.saturating_add(1 + i))?;
        }
        Ok(Ins::new(op, &operands[..num]))
    }


    ///////////////////////////////////////////////////////////////////////////
    // Execute
    ///////////////////////////////////////////////////////////////////////////

    // Every check happens before the first write, so a failing instruction
    // changes nothing.
    fn exec(&mut self, ins: &Ins) -> Result<ExecRet> {
        let args = ins.operands();
        match ins.op {
            Opcode::Hlt => return Ok(ExecRet::Halt),
            Opcode::Ldi => self.state.reg_write(args[0], args[1] as i64)?,
            Opcode::Prn => {
                let val = self.state.reg_read(args[0])?;
                self.console.print(&val.to_string());
            }
            Opcode::Ld => {
                let addr = self.reg_addr(args[1])?;
                let val = self.state.mem_read(addr)?;
                self.state.reg_write(args[0], val as i64)?;
            }
            Opcode::St => {
                let addr = self.reg_addr(args[0])?;
                // Only the low byte fits in a memory cell.
                let val = self.state.reg_read(args[1])? as u8;
                self.state.mem_write(addr, val)?;
            }
            Opcode::Add | Opcode::Sub | Opcode::Mul | Opcode::Div => self.do_alu(ins.op, args[0], args[1])?,
        }

        self.state.set_pc(self.state.pc + ins.size());
        Ok(ExecRet::Ok)
    }

    fn do_alu(&mut self, op: Opcode, reg_a: u8, reg_b: u8) -> Result<()> {
        let a = self.state.reg_read(reg_a)?;
        let b = self.state.reg_read(reg_b)?;
        let res = alu::apply(op, a, b)?;
        self.state.reg_write(reg_a, res)
    }

    // A register used as a memory address.
    fn reg_addr(&self, idx: u8) -> Result<usize> {
        let val = self.state.reg_read(idx)?;
        usize::try_from(val).map_err(|_| CpuError::OutOfBounds(val))
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
