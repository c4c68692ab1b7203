pub mod parser;

pub use parser::{Parser, MAX_DEPTH};
