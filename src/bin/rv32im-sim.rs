//! Command-line front-end: `rv32im-sim [OPTIONS] <PROGRAM> [ARGS]...`.

use clap::Parser;
use clap_num::maybe_hex;

use rv32im_sim::elf_loader;
use rv32im_sim::interpreter::{ExecutionStatus, Interpreter};
use rv32im_sim::isa::build_dispatch_table;

/// Interpret a statically-linked RV32IM + RV32F + Zbb executable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the guest executable (ELF32, statically linked)
    program: String,

    /// Arguments passed to the guest program's argv
    args: Vec<String>,

    /// Maximum number of cycles to execute before treating the run as
    /// a timeout (TrapIllegal)
    #[arg(long, default_value_t = 1_000_000)]
    cycle_limit: u64,

    /// Log each retired instruction at trace level via RUST_LOG
    #[arg(long)]
    debug: bool,

    /// Start tracing once this program counter is reached (hex with
    /// 0x prefix, or decimal)
    #[arg(long, value_parser=maybe_hex::<u32>)]
    pc_breakpoint: Option<u32>,

    /// Start tracing once this cycle count is reached (hex with 0x
    /// prefix, or decimal)
    #[arg(long, value_parser=maybe_hex::<u64>)]
    cycle_breakpoint: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "trace" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let mut interp = Interpreter::new(build_dispatch_table());
    interp.set_pc_breakpoint(args.pc_breakpoint);
    interp.set_cycle_breakpoint(args.cycle_breakpoint);

    if let Err(e) = elf_loader::load(&mut interp, &args.program, &args.args) {
        eprintln!("error loading {}: {e}", args.program);
        std::process::exit(1);
    }

    let result = interp.run(args.cycle_limit);

    match result.status {
        ExecutionStatus::ProgramExit => {
            std::process::exit((result.exit_code & 0xff) as i32);
        }
        status => {
            eprintln!(
                "trap {status:?} at pc={:#010x} after {} cycles",
                result.pc, result.cycles
            );
            std::process::exit(1);
        }
    }
}
