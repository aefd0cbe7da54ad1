
use emu_lib::{Cpu, CpuError, ExecRet};

use std::process::ExitCode;

use clap::Parser;
use log::error;

/// LS-8 Interpreter
#[derive(Parser)]
#[command(about)]
struct Args {
    /// Program to run, one binary literal per line
    program: String,

    /// Print the cpu state to stderr before every instruction.
    #[arg(long)]
    trace: bool,

    /// Give up after this many instructions.
    #[arg(long)]
    max_steps: Option<usize>,
}

fn run_traced(cpu: &mut Cpu, max_steps: Option<usize>) -> Result<(), CpuError> {
    let mut steps = 0usize;
    loop {
        if max_steps.is_some_and(|limit| steps >= limit) {
            return Err(CpuError::StepLimit(steps));
        }
        eprintln!("{}", cpu.trace());
        if cpu.step()? == ExecRet::Halt {
            return Ok(());
        }
        steps += 1;
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let bin = match loader::load_file(&args.program) {
        Ok(bin) => bin,
        Err(e) => {
            eprintln!("{}: {e}", args.program);
            return ExitCode::FAILURE;
        }
    };

    let mut cpu = Cpu::new();
    let res = cpu.load_image(&bin, 0).and_then(|_| {
        if args.trace {
            run_traced(&mut cpu, args.max_steps)
        } else {
            cpu.set_step_limit(args.max_steps);
            cpu.run()
        }
    });

    if let Err(e) = res {
        error!("Stopped at {:#04x} after {} instructions", cpu.pc(), cpu.num_ins());
        eprintln!("{}: {e}", args.program);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
