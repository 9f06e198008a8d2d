
/// Upper-cases `text`, using full Unicode case mapping (so, for
/// instance, `ß` becomes `SS`).
pub fn uppercase(text: &str) -> String {
  text.to_uppercase()
}
