//! Host system-call shim.
//!
//! Invoked only by the environment-call instruction (spec.md §6). Reads
//! the selector from `regs[17]` (`a7`) and arguments from `regs[10..16]`
//! (`a0..a5`), writes the return value into `regs[10]`. No file
//! descriptor table is modeled: `read`/`write` operate directly on the
//! matching host descriptor (0/1/2), and any other fd is a no-op.

use std::io::{Read, Write};

use log::{trace, warn};

use crate::interpreter::{ExecutionStatus, Interpreter};

const SYS_READ: u32 = 63;
const SYS_WRITE: u32 = 64;
const SYS_EXIT: u32 = 93;

fn sys_read(interp: &mut Interpreter, fd: u32, buf: u32, count: u32) -> u32 {
    let mut host_buf = vec![0u8; count as usize];
    let read = match fd {
        0 => std::io::stdin().read(&mut host_buf).unwrap_or(0),
        _ => 0,
    };
    interp.memory.write_bytes(buf, &host_buf[..read]);
    read as u32
}

fn sys_write(interp: &mut Interpreter, fd: u32, buf: u32, count: u32) -> u32 {
    let data = interp.memory.read_bytes(buf, count as usize);
    let written = match fd {
        1 => std::io::stdout().write(&data).unwrap_or(0),
        2 => std::io::stderr().write(&data).unwrap_or(0),
        _ => 0,
    };
    written as u32
}

/// Handle the instruction at `ecall`. The decoded record carries no
/// operands for this instruction; everything needed lives in the
/// register file already.
pub fn handle_ecall(interp: &mut Interpreter) -> ExecutionStatus {
    let selector = interp.regs.x(17);
    let a0 = interp.regs.x(10);
    let a1 = interp.regs.x(11);
    let a2 = interp.regs.x(12);

    trace!("ecall selector={selector} a0={a0:#x} a1={a1:#x} a2={a2:#x}");

    match selector {
        SYS_READ => {
            let result = sys_read(interp, a0, a1, a2);
            interp.regs.set_x(10, result);
            ExecutionStatus::Success
        }
        SYS_WRITE => {
            let result = sys_write(interp, a0, a1, a2);
            interp.regs.set_x(10, result);
            ExecutionStatus::Success
        }
        SYS_EXIT => {
            interp.regs.set_x(10, a0);
            ExecutionStatus::ProgramExit
        }
        other => {
            warn!("unrecognized ecall selector {other}");
            ExecutionStatus::TrapIllegal
        }
    }
}
