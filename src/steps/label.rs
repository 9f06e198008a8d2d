
//! Short codes for the sample steps.

use phf::phf_map;

/// The five sample steps, keyed by their one-letter code.
static SAMPLE_STEPS: phf::Map<char, &'static str> = phf_map! {
  'A' => "A. Prepare",
  'B' => "B. Gather",
  'C' => "C. Assemble",
  'D' => "D. Review",
  'E' => "E. Deliver",
};

const SAMPLE_CODES: [char; 5] = ['A', 'B', 'C', 'D', 'E'];

/// The sample step labels, in order.
pub fn sample_labels() -> impl Iterator<Item = &'static str> {
  SAMPLE_CODES.into_iter().filter_map(|code| SAMPLE_STEPS.get(&code).copied())
}

/// Maps a single (case-insensitive) letter `A` through `E` to the
/// full label of the corresponding sample step. Anything else is
/// returned with surrounding whitespace trimmed.
pub fn canonical_label(input: &str) -> &str {
  let trimmed = input.trim();
  let mut chars = trimmed.chars();
  if let (Some(code), None) = (chars.next(), chars.next()) {
    if let Some(&label) = SAMPLE_STEPS.get(&code.to_ascii_uppercase()) {
      return label;
    }
  }
  trimmed
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_canonical_label_lowercase_code() {
    assert_eq!(canonical_label("a"), "A. Prepare");
    assert_eq!(canonical_label("e"), "E. Deliver");
  }

  #[test]
  fn test_canonical_label_uppercase_code_with_whitespace() {
    assert_eq!(canonical_label("  C \n"), "C. Assemble");
  }

  #[test]
  fn test_canonical_label_passthrough() {
    assert_eq!(canonical_label("  F "), "F");
    assert_eq!(canonical_label("ab"), "ab");
    assert_eq!(canonical_label(" Bake the cake "), "Bake the cake");
    assert_eq!(canonical_label(""), "");
  }

  #[test]
  fn test_sample_labels_in_order() {
    let labels: Vec<_> = sample_labels().collect();
    assert_eq!(labels, vec!["A. Prepare", "B. Gather", "C. Assemble", "D. Review", "E. Deliver"]);
  }
}
