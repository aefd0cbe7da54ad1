
pub mod console;

pub use console::{PipeConsole, StdoutConsole};

// Where PRN output and decoder diagnostics end up.
pub trait Console: Send + Sync {
    fn print(&self, line: &str);
    fn diagnostic(&self, line: &str);
}
