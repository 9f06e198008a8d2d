
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops the top element only if it satisfies the predicate. An
  /// empty stack, or a top element which fails the predicate, leaves
  /// the stack unmodified and returns `None`.
  pub fn pop_if<F>(&mut self, predicate: F) -> Option<T>
  where F: FnOnce(&T) -> bool {
    if self.top().is_some_and(predicate) {
      self.elements.pop()
    } else {
      None
    }
  }

  /// The element at the top of the stack, if any.
  pub fn top(&self) -> Option<&T> {
    self.elements.last()
  }

  /// Pops every element, returning them in pop order (former top of
  /// the stack first).
  pub fn drain_from_top(&mut self) -> impl Iterator<Item = T> + '_ {
    self.elements.drain(..).rev()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_push_and_pop() {
    let mut stack = Stack::new();
    stack.push('+');
    stack.push('*');
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.pop(), Ok('*'));
    assert_eq!(stack.pop(), Ok('+'));
    assert!(stack.is_empty());
  }

  #[test]
  fn test_pop_on_empty() {
    let mut stack: Stack<char> = Stack::new();
    assert_eq!(stack.pop(), Err(StackError::NotEnoughElements { expected: 1, actual: 0 }));
  }

  #[test]
  fn test_pop_if() {
    let mut stack = Stack::from(vec!['(', '+']);
    assert_eq!(stack.pop_if(|c| *c == '('), None);
    assert_eq!(stack.pop_if(|c| *c == '+'), Some('+'));
    assert_eq!(stack.pop_if(|c| *c == '('), Some('('));
    assert_eq!(stack.pop_if(|_| true), None);
  }

  #[test]
  fn test_top() {
    let mut stack = Stack::new();
    assert_eq!(stack.top(), None);
    stack.push(1);
    stack.push(2);
    assert_eq!(stack.top(), Some(&2));
    assert_eq!(stack.len(), 2);
  }

  #[test]
  fn test_drain_from_top() {
    let mut stack = Stack::from(vec![1, 2, 3]);
    let drained: Vec<_> = stack.drain_from_top().collect();
    assert_eq!(drained, vec![3, 2, 1]);
    assert!(stack.is_empty());
  }
}
