
//! An ordered list of text-labeled steps.
//!
//! The list is a singly linked chain of owned nodes. It is a plain
//! mutable container; callers which share one list across threads
//! must serialize access themselves (see
//! [`WorksState`](crate::state::WorksState)).

mod error;
pub mod label;
mod list;

pub use error::StepListError;
pub use list::{StepList, Iter};
