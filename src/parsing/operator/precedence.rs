
/// The precedence of an operator. Higher values bind more tightly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
  pub const MIN: Precedence = Precedence(0);

  pub const fn new(n: u8) -> Precedence {
    Precedence(n)
  }
}
