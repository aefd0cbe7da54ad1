
use std::io::{stderr, stdout, Write};
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::io::Console;

use log::error;

#[derive(Default, Debug, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&self, line: &str) {
        let mut out = stdout().lock();
        if let Err(e) = writeln!(out, "{line}").and_then(|_| out.flush()) {
            error!("Failed to write output: {e}");
        }
    }

    fn diagnostic(&self, line: &str) {
        let mut out = stderr().lock();
        if let Err(e) = writeln!(out, "{line}") {
            error!("Failed to write diagnostic: {e}");
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct PipeConsole {
    output: Mutex<VecDeque<String>>,
    diagnostics: Mutex<VecDeque<String>>,
}

impl Console for PipeConsole {
    fn print(&self, line: &str) {
        lock(&self.output).push_back(line.to_owned());
    }

    fn diagnostic(&self, line: &str) {
        lock(&self.diagnostics).push_back(line.to_owned());
    }
}

impl PipeConsole {
    pub fn take_output(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.output)).into()
    }

    pub fn take_diagnostics(&self) -> Vec<String> {
        std::mem::take(&mut *lock(&self.diagnostics)).into()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.output).is_empty() && lock(&self.diagnostics).is_empty()
    }
}

// Buffers stay usable even if a test panicked while holding the lock.
fn lock(buf: &Mutex<VecDeque<String>>) -> std::sync::MutexGuard<'_, VecDeque<String>> {
    buf.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
