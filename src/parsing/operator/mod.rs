
mod associativity;
mod precedence;
mod table;

pub use associativity::Associativity;
pub use precedence::Precedence;
pub use table::OperatorTable;

use std::fmt::{self, Display, Formatter};

/// A single-character binary operator, with a precedence and an
/// associativity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operator {
  symbol: char,
  assoc: Associativity,
  prec: Precedence,
}

impl Operator {
  pub const fn new(symbol: char, assoc: Associativity, prec: Precedence) -> Operator {
    Operator { symbol, assoc, prec }
  }

  /// An operator not found in any table. Unknown operators bind
  /// more loosely than every known operator and are not
  /// left-associative, so they never cause anything to be popped
  /// off the operator stack ahead of them.
  pub const fn unknown(symbol: char) -> Operator {
    Operator::new(symbol, Associativity::NONE, Precedence::MIN)
  }

  pub fn symbol(&self) -> char {
    self.symbol
  }

  pub fn associativity(&self) -> Associativity {
    self.assoc
  }

  pub fn precedence(&self) -> Precedence {
    self.prec
  }

  /// Whether `self`, sitting on the operator stack, should be output
  /// before `incoming` is pushed.
  pub fn binds_before(&self, incoming: &Operator) -> bool {
    self.prec > incoming.prec ||
      (self.prec == incoming.prec && incoming.assoc.is_left_assoc())
  }
}

impl Display for Operator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol)
  }
}
