
use super::error::StepListError;
use super::label::sample_labels;

use tracing::debug;

use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;

/// Singly linked list of step labels, in insertion order.
///
/// Every node is exclusively owned by its predecessor (or by the list
/// itself, for the first node), so the chain is always finite.
#[derive(Default)]
pub struct StepList {
  head: Link,
  len: usize,
}

type Link = Option<Box<StepNode>>;

struct StepNode {
  label: String,
  next: Link,
}

/// Borrowing iterator over the labels of a [`StepList`], from first
/// to last.
#[derive(Clone)]
pub struct Iter<'a> {
  next: Option<&'a StepNode>,
  remaining: usize,
}

impl StepList {
  pub fn new() -> Self {
    Self::default()
  }

  /// A list holding the five sample steps, in order.
  pub fn with_sample_steps() -> Self {
    sample_labels().map(String::from).collect()
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn is_empty(&self) -> bool {
    self.head.is_none()
  }

  /// Appends `label` as the new last step.
  pub fn add(&mut self, label: impl Into<String>) {
    let label = label.into();
    debug!(label = %label, "adding step");
    let mut cursor = &mut self.head;
    while let Some(node) = cursor {
      cursor = &mut node.next;
    }
    *cursor = Some(Box::new(StepNode { label, next: None }));
    self.len += 1;
  }

  /// Removes the first step and returns its label.
  pub fn remove_front(&mut self) -> Result<String, StepListError> {
    let node = self.head.take().ok_or(StepListError::Empty)?;
    let StepNode { label, next } = *node;
    self.head = next;
    self.len -= 1;
    debug!(label = %label, "removed first step");
    Ok(label)
  }

  /// Removes the last step and returns its label.
  pub fn remove_back(&mut self) -> Result<String, StepListError> {
    let mut cursor = &mut self.head;
    while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
      // unwrap: The loop condition guarantees a node is present.
      cursor = &mut cursor.as_mut().unwrap().next;
    }
    let node = cursor.take().ok_or(StepListError::Empty)?;
    self.len -= 1;
    debug!(label = %node.label, "removed last step");
    Ok(node.label)
  }

  /// Removes the first step whose label is exactly `label` and
  /// returns the removed label. Comparison is case-sensitive.
  pub fn remove_by_value(&mut self, label: &str) -> Result<String, StepListError> {
    let mut cursor = &mut self.head;
    while cursor.as_ref().is_some_and(|node| node.label != label) {
      // unwrap: The loop condition guarantees a node is present.
      cursor = &mut cursor.as_mut().unwrap().next;
    }
    let node = cursor.take().ok_or_else(|| StepListError::NotFound(label.to_owned()))?;
    let StepNode { label, next } = *node;
    *cursor = next;
    self.len -= 1;
    debug!(label = %label, "removed step by value");
    Ok(label)
  }

  /// Iterates over the labels, first to last, without modifying the
  /// list.
  pub fn iter(&self) -> Iter<'_> {
    Iter { next: self.head.as_deref(), remaining: self.len }
  }

  /// The labels of every step, first to last.
  pub fn to_sequence(&self) -> Vec<String> {
    self.iter().map(String::from).collect()
  }
}

impl<'a> Iterator for Iter<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let node = self.next?;
    self.next = node.next.as_deref();
    self.remaining -= 1;
    Some(&node.label)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.remaining, Some(self.remaining))
  }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a StepList {
  type Item = &'a str;
  type IntoIter = Iter<'a>;

  fn into_iter(self) -> Iter<'a> {
    self.iter()
  }
}

impl<S: Into<String>> Extend<S> for StepList {
  fn extend<I>(&mut self, iter: I)
  where I: IntoIterator<Item = S> {
    // Find the tail once, rather than once per element.
    let mut cursor = &mut self.head;
    while let Some(node) = cursor {
      cursor = &mut node.next;
    }
    for label in iter {
      let node = cursor.insert(Box::new(StepNode { label: label.into(), next: None }));
      cursor = &mut node.next;
      self.len += 1;
    }
  }
}

impl<S: Into<String>> FromIterator<S> for StepList {
  fn from_iter<I>(iter: I) -> Self
  where I: IntoIterator<Item = S> {
    let mut list = StepList::new();
    list.extend(iter);
    list
  }
}

impl Debug for StepList {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.debug_list().entries(self.iter()).finish()
  }
}

impl Drop for StepList {
  fn drop(&mut self) {
    // Unlink iteratively so that dropping a long chain doesn't
    // recurse once per node.
    let mut link = self.head.take();
    while let Some(mut node) = link {
      link = node.next.take();
    }
  }
}
