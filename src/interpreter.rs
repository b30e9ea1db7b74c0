//! Dispatch loop: fetch, decode, dispatch, execute (spec.md §4.5).

use std::collections::HashMap;

use log::{debug, trace};

use crate::decode::{decode, Decoded};
use crate::memory::Memory;
use crate::registers::Registers;

/// Per-cycle handler outcome. No other error channel exists inside the
/// core (spec.md §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Success,
    TrapIllegal,
    TrapLoadFault,
    TrapStoreFault,
    ProgramExit,
}

/// Result of running the dispatch loop to completion.
#[derive(Debug, Clone, Copy)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub pc: u32,
    pub cycles: u64,
    pub exit_code: u32,
}

/// A handler closes over nothing: it is a plain function of the
/// decoded record and the mutable interpreter state (spec.md §9's
/// "one function per operation" variant).
pub type Handler = fn(&mut Interpreter, &Decoded) -> ExecutionStatus;

/// Interpreter state: registers, memory, program counter, and the
/// (immutable once built) dispatch table.
pub struct Interpreter {
    pub regs: Registers,
    pub memory: Memory,
    pub pc: u32,
    dispatch: HashMap<u32, Handler>,
    pc_breakpoint: Option<u32>,
    cycle_breakpoint: Option<u64>,
}

impl Interpreter {
    pub fn new(dispatch: HashMap<u32, Handler>) -> Self {
        Self {
            regs: Registers::new(),
            memory: Memory::new(),
            pc: 0,
            dispatch,
            pc_breakpoint: None,
            cycle_breakpoint: None,
        }
    }

    pub fn set_pc_breakpoint(&mut self, pc: Option<u32>) {
        self.pc_breakpoint = pc;
    }

    pub fn set_cycle_breakpoint(&mut self, cycle: Option<u64>) {
        self.cycle_breakpoint = cycle;
    }

    fn fetch(&self) -> u32 {
        self.memory.load_u32(self.pc)
    }

    /// Execute exactly one cycle: fetch, decode, dispatch, execute,
    /// enforce the zero-register invariant.
    fn step(&mut self, cycle: u64) -> ExecutionStatus {
        let word = self.fetch();
        let (decoded, key) = decode(word, self.pc);

        let tracing = self.pc_breakpoint == Some(self.pc) || self.cycle_breakpoint.is_some_and(|b| cycle >= b);
        if tracing {
            trace!("cycle {cycle}: pc={:#010x} word={:#010x} key={:#010x}", self.pc, word, key);
        } else {
            trace!("cycle {cycle}: pc={:#010x} word={:#010x}", self.pc, word);
        }

        let Some(handler) = self.dispatch.get(&key).copied() else {
            debug!("no handler for dispatch key {:#010x} at pc={:#010x}", key, self.pc);
            return ExecutionStatus::TrapIllegal;
        };

        let status = handler(self, &decoded);
        self.regs.zero_x0();
        status
    }

    /// Run until a trap, program exit, or the cycle limit is reached.
    pub fn run(&mut self, cycle_limit: u64) -> ExecutionResult {
        let mut cycles: u64 = 0;
        loop {
            if cycles >= cycle_limit {
                debug!("cycle limit {cycle_limit} reached at pc={:#010x}", self.pc);
                return ExecutionResult {
                    status: ExecutionStatus::TrapIllegal,
                    pc: self.pc,
                    cycles,
                    exit_code: 1,
                };
            }

            let status = self.step(cycles);
            cycles += 1;

            match status {
                ExecutionStatus::Success => continue,
                ExecutionStatus::ProgramExit => {
                    return ExecutionResult {
                        status,
                        pc: self.pc,
                        cycles,
                        exit_code: self.regs.x(10),
                    };
                }
                _ => {
                    return ExecutionResult {
                        status,
                        pc: self.pc,
                        cycles,
                        exit_code: 1,
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isa;

    #[test]
    fn unmapped_key_traps_illegal() {
        let mut interp = Interpreter::new(HashMap::new());
        interp.memory.store_u32(0, 0xffff_ffff);
        let result = interp.run(10);
        assert_eq!(result.status, ExecutionStatus::TrapIllegal);
        assert_eq!(result.pc, 0);
    }

    #[test]
    fn cycle_limit_traps_illegal() {
        let mut interp = Interpreter::new(isa::build_dispatch_table());
        // addi x0, x0, 0 repeated: always "succeeds" and never advances past pc=0
        // because the program counter increment is a handler's own responsibility.
        // Use a real NOP-like addi that advances pc, looping forever via jal back to 0.
        let jal_self = 0b1101111; // jal x0, 0 encoded below
        let _ = jal_self;
        let word = crate::opcodes::OP_JAL; // jal x0, +0
        interp.memory.store_u32(0, word);
        let result = interp.run(5);
        assert_eq!(result.status, ExecutionStatus::TrapIllegal);
        assert_eq!(result.cycles, 5);
    }
}
