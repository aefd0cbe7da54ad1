
pub mod alu;
pub mod cpu;
pub mod cpu_state;
pub mod error;
pub mod io;
pub mod memory;
pub mod registers;
mod trace;

pub use cpu::{Cpu, ExecRet};
pub use cpu_state::{CpuState, Status};
pub use error::CpuError;
pub use io::Console;
