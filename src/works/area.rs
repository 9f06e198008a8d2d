
//! Areas of simple shapes, from user-entered measurements.

use thiserror::Error;

use std::borrow::Cow;
use std::num::ParseFloatError;

/// The approximation of pi used for circle areas.
pub const PI_APPROX: f64 = 3.1416;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid input")]
pub struct ParseMeasureError {
  #[source]
  source: ParseFloatError,
}

/// Parses a user-entered measurement. Surrounding whitespace is
/// permitted, as are single underscores between digits (`1_000`).
pub fn parse_measure(input: &str) -> Result<f64, ParseMeasureError> {
  strip_digit_separators(input.trim()).parse().map_err(|source| ParseMeasureError { source })
}

/// Removes every underscore that sits directly between two ASCII
/// digits. Any other underscore is left in place, so that parsing
/// rejects it.
fn strip_digit_separators(input: &str) -> Cow<'_, str> {
  if !input.contains('_') {
    return Cow::Borrowed(input);
  }
  let chars: Vec<char> = input.chars().collect();
  let stripped = chars.iter().enumerate().filter(|&(i, &ch)| {
    let between_digits = i > 0 && chars[i - 1].is_ascii_digit() &&
      chars.get(i + 1).is_some_and(|next| next.is_ascii_digit());
    !(ch == '_' && between_digits)
  }).map(|(_, &ch)| ch).collect();
  Cow::Owned(stripped)
}

/// Rounds to two decimal places. Values too large to scale by 100
/// already have no fractional part and are returned as-is.
pub fn round2(value: f64) -> f64 {
  let scaled = value * 100.0;
  if scaled.is_finite() {
    scaled.round() / 100.0
  } else {
    value
  }
}

/// `PI_APPROX * r^2`, rounded to two decimal places.
pub fn circle_area(radius: &str) -> Result<f64, ParseMeasureError> {
  let r = parse_measure(radius)?;
  Ok(round2(PI_APPROX * r.powi(2)))
}

/// `0.5 * base * height`, rounded to two decimal places.
pub fn triangle_area(base: &str, height: &str) -> Result<f64, ParseMeasureError> {
  let b = parse_measure(base)?;
  let h = parse_measure(height)?;
  Ok(round2(0.5 * b * h))
}
