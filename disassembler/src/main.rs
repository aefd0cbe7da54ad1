
use disassembler::{Disassembled, disassemble};

use std::ops::Range;
use std::process::ExitCode;

use clap::Parser;
use log::error;

/// LS-8 Disassembler
#[derive(Parser)]
struct Args {
    /// Program to disassemble, one binary literal per line
    program: String,
}

fn remove_long_zeros(disassembly: &mut Vec<Disassembled>) {
    const THRESH: usize = 8;

    let mut ranges = vec![];
    let mut range_start = None;
    for (i, dis) in disassembly.iter().enumerate() {
        if dis.interp.is_none() && dis.repr == [0] {
            if range_start.is_none() {
                range_start = Some(i);
            }
        } else if let Some(start) = range_start {
            ranges.push(Range{start, end: i});
            range_start = None;
        }
    }
    if let Some(start) = range_start {
        ranges.push(Range{start, end: disassembly.len()});
    }

    for range in ranges.iter().rev() {
        if range.len() > THRESH {
            // Leave the first and last, an ellipses will be added between.
            disassembly.drain(range.start + 1..range.end - 1);
        }
    }
}


fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let bin = match loader::load_file(&args.program) {
        Ok(bin) => bin,
        Err(e) => {
            error!("Loading {} failed", args.program);
            eprintln!("{}: {e}", args.program);
            return ExitCode::FAILURE;
        }
    };
    let mut disassembly = disassemble(&bin);

    remove_long_zeros(&mut disassembly);

    let mut prev: Option<Disassembled> = None;
    for dis in disassembly {
        if let Some(p) = &prev {
            if p.addr + p.repr.len() != dis.addr {
                println!("...");
            }
        }
        println!("{}", dis);
        prev = Some(dis);
    }
    ExitCode::SUCCESS
}
