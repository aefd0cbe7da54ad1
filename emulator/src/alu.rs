use common::isa::Opcode;

use crate::error::{CpuError, Result};

// Stateless; the caller reads the operands and stores the result in the first
// register. Division truncates toward zero.
pub fn apply(op: Opcode, a: i64, b: i64) -> Result<i64> {
    let res = match op {
        Opcode::Add => a.checked_add(b),
        Opcode::Sub => a.checked_sub(b),
        Opcode::Mul => a.checked_mul(b),
        Opcode::Div => {
            if b == 0 {
                return Err(CpuError::DivideByZero);
            }
            a.checked_div(b)
        }
        _ => return Err(CpuError::UnsupportedOperation(op)),
    };
    res.ok_or(CpuError::Overflow(op))
}
