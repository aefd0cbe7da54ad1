pub mod constants;
pub mod isa;
