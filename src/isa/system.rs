//! SYSTEM opcode: environment calls.

use crate::decode::Decoded;
use crate::interpreter::{ExecutionStatus, Interpreter};
use crate::syscall::handle_ecall;

pub fn ecall(interp: &mut Interpreter, d: &Decoded) -> ExecutionStatus {
    let status = handle_ecall(interp);
    interp.pc = d.pc.wrapping_add(4);
    status
}
