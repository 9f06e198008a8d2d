
//! Shunting yard conversion of infix token streams.

use super::operator::{Operator, OperatorTable};
use super::source::Span;
use super::tokenizer::{Token, TokenData, Tokenizer};
use crate::stack::Stack;

use itertools::Itertools;
use tracing::debug;

/// An entry on the operator stack.
#[derive(Clone, Debug, PartialEq, Eq)]
enum OpStackValue {
  OpenParen(Span),
  Operator(Operator),
}

/// A type implementing this trait receives the output of the
/// shunting yard algorithm, in postfix order.
pub trait ShuntingYardDriver {
  fn emit_operand(&mut self, operand: char);
  fn emit_operator(&mut self, operator: &Operator);
  /// Called for each opening parenthesis that was never closed. These
  /// are flushed along with the remaining operators at the end of the
  /// input.
  fn emit_unclosed_paren(&mut self);
}

/// Driver which collects postfix output as a sequence of textual
/// tokens.
#[derive(Debug, Clone, Default)]
pub struct PostfixWriter {
  tokens: Vec<String>,
}

impl PostfixWriter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn tokens(&self) -> &[String] {
    &self.tokens
  }

  /// The output tokens, separated by single spaces.
  pub fn into_string(self) -> String {
    self.tokens.into_iter().join(" ")
  }
}

impl ShuntingYardDriver for PostfixWriter {
  fn emit_operand(&mut self, operand: char) {
    self.tokens.push(operand.to_string());
  }

  fn emit_operator(&mut self, operator: &Operator) {
    self.tokens.push(operator.to_string());
  }

  fn emit_unclosed_paren(&mut self) {
    self.tokens.push(String::from("("));
  }
}

/// Runs the shunting yard algorithm over `input`, sending output to
/// `driver`.
///
/// No validation is performed. A closing parenthesis with no match
/// simply flushes the whole operator stack, and unclosed opening
/// parentheses are emitted at the end like any other stack entry.
pub fn parse<D, I>(driver: &mut D, input: I)
where D: ShuntingYardDriver + ?Sized,
      I: IntoIterator<Item = Token> {
  let mut operator_stack: Stack<OpStackValue> = Stack::new();
  for token in input {
    match token.data {
      TokenData::Operand(ch) => {
        driver.emit_operand(ch);
      }
      TokenData::OpenParen => {
        operator_stack.push(OpStackValue::OpenParen(token.span));
      }
      TokenData::CloseParen => {
        loop {
          match operator_stack.pop() {
            Ok(OpStackValue::OpenParen(_)) => break,
            Ok(OpStackValue::Operator(op)) => driver.emit_operator(&op),
            Err(_) => {
              debug!(position = %token.span, "unmatched closing parenthesis");
              break;
            }
          }
        }
      }
      TokenData::Operator(op) => {
        // Pop operators until we hit a parenthesis or one which binds
        // more loosely.
        while let Some(OpStackValue::Operator(top)) = operator_stack.pop_if(|value| {
          matches!(value, OpStackValue::Operator(top) if top.binds_before(&op))
        }) {
          driver.emit_operator(&top);
        }
        operator_stack.push(OpStackValue::Operator(op));
      }
    }
  }

  for value in operator_stack.drain_from_top() {
    match value {
      OpStackValue::Operator(op) => driver.emit_operator(&op),
      OpStackValue::OpenParen(span) => {
        debug!(position = %span, "unclosed opening parenthesis");
        driver.emit_unclosed_paren();
      }
    }
  }
}

/// Converts an infix expression to space-separated postfix, using
/// the common arithmetic operators `+ - * / ^`.
pub fn convert(expression: &str) -> String {
  convert_with(expression, OperatorTable::common())
}

/// As [`convert`], but with a custom operator table.
pub fn convert_with(expression: &str, operators: &OperatorTable) -> String {
  let mut writer = PostfixWriter::new();
  parse(&mut writer, Tokenizer::new(expression, operators));
  let postfix = writer.into_string();
  debug!(infix = expression, postfix = %postfix, "converted expression");
  postfix
}
