
//! LIFO stack used by the expression converter.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
