
//! Conversion of infix arithmetic expressions to postfix notation.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod tokenizer;

pub use shunting_yard::convert;
