use emu_lib::io::PipeConsole;
use emu_lib::Cpu;

use std::sync::Arc;

pub fn cpu() -> (Cpu, Arc<PipeConsole>) {
    let console = Arc::new(PipeConsole::default());
    (Cpu::with_console(console.clone()), console)
}

pub fn load_bin(bin: &[u8]) -> (Cpu, Arc<PipeConsole>) {
    let (mut cpu, console) = cpu();
    cpu.load_image(bin, 0).unwrap();
    (cpu, console)
}

// Runs to a halt, returning the printed lines.
pub fn run_bin(bin: &[u8]) -> (Cpu, Vec<String>) {
    let (mut cpu, console) = load_bin(bin);
    cpu.run().unwrap();
    let out = console.take_output();
    (cpu, out)
}

pub fn run_src(src: &str) -> (Cpu, Vec<String>) {
    let bin = loader::parse(src).unwrap();
    run_bin(&bin)
}
