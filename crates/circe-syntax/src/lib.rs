pub mod error;
pub mod token;
pub mod tree;

pub use error::*;
pub use token::*;
pub use tree::*;
