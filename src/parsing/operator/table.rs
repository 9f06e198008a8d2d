
use super::Operator;
use super::precedence::Precedence;
use super::associativity::Associativity;

use once_cell::sync::Lazy;

use std::collections::HashMap;

static COMMON_OPERATORS: Lazy<OperatorTable> = Lazy::new(OperatorTable::common_operators);

/// A table of operators, indexed by their symbol.
#[derive(Debug, Clone, Default)]
pub struct OperatorTable {
  mapping: HashMap<char, Operator>,
}

impl OperatorTable {
  pub fn new() -> OperatorTable {
    OperatorTable::default()
  }

  pub fn with_capacity(capacity: usize) -> OperatorTable {
    OperatorTable {
      mapping: HashMap::with_capacity(capacity),
    }
  }

  pub fn get(&self, symbol: char) -> Option<&Operator> {
    self.mapping.get(&symbol)
  }

  /// Looks up `symbol`, falling back to [`Operator::unknown`] if it
  /// isn't in the table.
  pub fn get_or_unknown(&self, symbol: char) -> Operator {
    self.get(symbol).copied().unwrap_or(Operator::unknown(symbol))
  }

  pub fn insert(&mut self, op: Operator) -> Option<Operator> {
    self.mapping.insert(op.symbol(), op)
  }

  /// The four arithmetic operators and exponentiation.
  pub fn common_operators() -> OperatorTable {
    vec![
      Operator::new('^', Associativity::RIGHT, Precedence::new(3)),
      Operator::new('*', Associativity::LEFT, Precedence::new(2)),
      Operator::new('/', Associativity::LEFT, Precedence::new(2)),
      Operator::new('+', Associativity::LEFT, Precedence::new(1)),
      Operator::new('-', Associativity::LEFT, Precedence::new(1)),
    ].into_iter().collect()
  }

  /// A shared instance of [`OperatorTable::common_operators`].
  pub fn common() -> &'static OperatorTable {
    &COMMON_OPERATORS
  }

  pub fn iter(&self) -> impl Iterator<Item = &Operator> {
    self.mapping.values()
  }
}

impl FromIterator<Operator> for OperatorTable {
  fn from_iter<I>(iter: I) -> Self
  where I : IntoIterator<Item = Operator> {
    let iter = iter.into_iter();
    let (len_bound, _) = iter.size_hint();
    let mut table = OperatorTable::with_capacity(len_bound);
    for op in iter {
      table.insert(op);
    }
    table
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_common_precedences() {
    let table = OperatorTable::common();
    assert_eq!(table.get('^').unwrap().precedence(), Precedence::new(3));
    assert_eq!(table.get('*').unwrap().precedence(), Precedence::new(2));
    assert_eq!(table.get('/').unwrap().precedence(), Precedence::new(2));
    assert_eq!(table.get('+').unwrap().precedence(), Precedence::new(1));
    assert_eq!(table.get('-').unwrap().precedence(), Precedence::new(1));
    assert_eq!(table.iter().count(), 5);
  }

  #[test]
  fn test_common_associativity() {
    let table = OperatorTable::common();
    assert!(table.get('^').unwrap().associativity().is_right_assoc());
    assert!(!table.get('^').unwrap().associativity().is_left_assoc());
    for symbol in ['+', '-', '*', '/'] {
      assert!(table.get(symbol).unwrap().associativity().is_left_assoc());
    }
  }

  #[test]
  fn test_get_or_unknown() {
    let table = OperatorTable::common();
    assert_eq!(table.get('%'), None);
    let unknown = table.get_or_unknown('%');
    assert_eq!(unknown.precedence(), Precedence::MIN);
    assert!(!unknown.associativity().is_left_assoc());
  }

  #[test]
  fn test_insert_replaces() {
    let mut table = OperatorTable::new();
    assert_eq!(table.insert(Operator::new('+', Associativity::LEFT, Precedence::new(1))), None);
    let old = table.insert(Operator::new('+', Associativity::RIGHT, Precedence::new(5)));
    assert_eq!(old.map(|op| op.precedence()), Some(Precedence::new(1)));
    assert_eq!(table.get('+').unwrap().precedence(), Precedence::new(5));
  }
}
