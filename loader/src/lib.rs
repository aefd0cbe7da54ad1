use common::constants::MEM_SIZE;

use std::path::Path;

use log::debug;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Unable to read program: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: \"{token}\" is not an 8 bit binary literal")]
    InvalidLiteral { line: usize, token: String },

    #[error("Program is {len} bytes, memory only holds 256")]
    TooLarge { len: usize },
}

// One binary literal per line, e.g. "10000010 # LDI R0,8". Only the first
// token counts; blank lines and lines starting with '#' are skipped.
pub fn parse(input: &str) -> Result<Vec<u8>, LoadError> {
    let mut prog = vec![];
    for (i, line) in input.lines().enumerate() {
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        if token.starts_with('#') {
            continue;
        }

        let byte = u8::from_str_radix(token, 2).map_err(|_| LoadError::InvalidLiteral {
            line: i + 1,
            token: token.to_owned(),
        })?;
        prog.push(byte);
    }

    if prog.len() > MEM_SIZE {
        return Err(LoadError::TooLarge { len: prog.len() });
    }
    debug!("Parsed {} bytes", prog.len());
    Ok(prog)
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let input = std::fs::read_to_string(path)?;
    parse(&input)
}
