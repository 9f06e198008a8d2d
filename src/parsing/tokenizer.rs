
use super::source::{SourceOffset, Span};
use super::operator::{Operator, OperatorTable};

use std::fmt::{self, Display, Formatter};
use std::iter::Enumerate;
use std::str::Chars;

/// A single token of an infix expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

/// The contents of a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenData {
  /// A single alphanumeric character, copied to the output as-is.
  Operand(char),
  OpenParen,
  CloseParen,
  /// Any other non-whitespace character. Characters which are not in
  /// the operator table become [`Operator::unknown`].
  Operator(Operator),
}

/// Splits an expression into one token per non-whitespace
/// character.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
  chars: Enumerate<Chars<'a>>,
  operators: &'a OperatorTable,
}

impl<'a> Tokenizer<'a> {
  pub fn new(input: &'a str, operators: &'a OperatorTable) -> Self {
    Self { chars: input.chars().enumerate(), operators }
  }

  fn classify(&self, ch: char) -> TokenData {
    match ch {
      '(' => TokenData::OpenParen,
      ')' => TokenData::CloseParen,
      ch if ch.is_alphanumeric() => TokenData::Operand(ch),
      ch => TokenData::Operator(self.operators.get_or_unknown(ch)),
    }
  }
}

impl<'a> Iterator for Tokenizer<'a> {
  type Item = Token;

  fn next(&mut self) -> Option<Token> {
    let (index, ch) = self.chars.find(|(_, ch)| !ch.is_whitespace())?;
    let span = Span::single(SourceOffset(index));
    Some(Token { data: self.classify(ch), span })
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Operand(ch) => write!(f, "{}", ch),
      TokenData::OpenParen => write!(f, "("),
      TokenData::CloseParen => write!(f, ")"),
      TokenData::Operator(op) => write!(f, "{}", op),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}
