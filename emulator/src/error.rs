use common::isa::Opcode;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CpuError {
    #[error("Memory address {0} out of bounds")]
    OutOfBounds(i64),

    #[error("Invalid register {0}")]
    InvalidRegister(u8),

    #[error("Unsupported ALU operation: {0}")]
    UnsupportedOperation(Opcode),

    #[error("Division by zero")]
    DivideByZero,

    #[error("Arithmetic overflow in {0}")]
    Overflow(Opcode),

    #[error("Step limit of {0} instructions exceeded")]
    StepLimit(usize),
}

pub type Result<T> = std::result::Result<T, CpuError>;
