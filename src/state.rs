
//! Process-lifetime application state.

use crate::parsing::convert;
use crate::steps::StepList;
use crate::works::{WorksRequest, WorksOutcome, StepAction, StepChange, StepOutcome};
use crate::works::area::{circle_area, triangle_area};
use crate::works::text::uppercase;

use tracing::warn;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// The state shared by every request. The step list is the only
/// mutable piece, and all access to it goes through a mutex, so a
/// single `WorksState` may be shared freely between threads.
#[derive(Debug)]
pub struct WorksState {
  steps: Mutex<StepList>,
}

impl WorksState {
  /// A state whose step list holds the five sample steps.
  pub fn new() -> Self {
    Self::with_steps(StepList::with_sample_steps())
  }

  pub fn with_steps(steps: StepList) -> Self {
    Self { steps: Mutex::new(steps) }
  }

  // No list operation can panic part-way through a mutation, so a
  // poisoned list is still a valid list.
  fn lock_steps(&self) -> MutexGuard<'_, StepList> {
    self.steps.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// The current step labels, first to last.
  pub fn steps(&self) -> Vec<String> {
    self.lock_steps().to_sequence()
  }

  pub fn handle(&self, request: WorksRequest) -> WorksOutcome {
    match request {
      WorksRequest::Uppercase(text) => WorksOutcome::Uppercase(uppercase(&text)),
      WorksRequest::CircleArea(radius) => {
        let area = circle_area(&radius);
        if let Err(err) = &area {
          warn!(radius = %radius, error = %err, "rejected circle radius");
        }
        WorksOutcome::CircleArea(area)
      }
      WorksRequest::TriangleArea { base, height } => {
        let area = triangle_area(&base, &height);
        if let Err(err) = &area {
          warn!(base = %base, height = %height, error = %err, "rejected triangle dimensions");
        }
        WorksOutcome::TriangleArea(area)
      }
      WorksRequest::Step(action) => WorksOutcome::Steps(self.apply_step_action(action)),
      WorksRequest::Postfix(expression) => WorksOutcome::Postfix(convert(&expression)),
    }
  }

  fn apply_step_action(&self, action: StepAction) -> StepOutcome {
    let mut steps = self.lock_steps();
    let change = match action {
      StepAction::Add(label) => {
        steps.add(label.clone());
        Ok(StepChange::Added(label))
      }
      StepAction::RemoveFront => steps.remove_front().map(StepChange::Removed),
      StepAction::RemoveBack => steps.remove_back().map(StepChange::Removed),
      StepAction::RemoveByValue(label) => steps.remove_by_value(&label).map(StepChange::Removed),
      StepAction::Show => Ok(StepChange::Unchanged),
    };
    if let Err(err) = &change {
      warn!(error = %err, "step action failed");
    }
    StepOutcome { change, steps: steps.to_sequence() }
  }
}

impl Default for WorksState {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::steps::StepListError;

  use std::sync::Arc;
  use std::thread;

  fn empty_state() -> WorksState {
    WorksState::with_steps(StepList::new())
  }

  #[test]
  fn test_new_state_is_seeded() {
    let state = WorksState::new();
    assert_eq!(state.steps().len(), 5);
    assert_eq!(state.steps()[0], "A. Prepare");
  }

  #[test]
  fn test_handle_uppercase() {
    let state = empty_state();
    let outcome = state.handle(WorksRequest::Uppercase(String::from("abc")));
    assert_eq!(outcome, WorksOutcome::Uppercase(String::from("ABC")));
  }

  #[test]
  fn test_handle_areas() {
    let state = empty_state();
    assert_eq!(state.handle(WorksRequest::CircleArea(String::from("5"))), WorksOutcome::CircleArea(Ok(78.54)));
    let outcome = state.handle(WorksRequest::TriangleArea { base: String::from("3"), height: String::from("4") });
    assert_eq!(outcome, WorksOutcome::TriangleArea(Ok(6.0)));
    let outcome = state.handle(WorksRequest::CircleArea(String::from("abc")));
    assert!(matches!(outcome, WorksOutcome::CircleArea(Err(_))));
  }

  #[test]
  fn test_handle_postfix() {
    let state = empty_state();
    let outcome = state.handle(WorksRequest::Postfix(String::from("(A+B)*C")));
    assert_eq!(outcome, WorksOutcome::Postfix(String::from("A B + C *")));
  }

  #[test]
  fn test_handle_step_actions() {
    let state = empty_state();
    let outcome = state.handle(WorksRequest::Step(StepAction::RemoveFront));
    assert_eq!(outcome, WorksOutcome::Steps(StepOutcome { change: Err(StepListError::Empty), steps: vec![] }));

    state.handle(WorksRequest::Step(StepAction::Add(String::from("a"))));
    state.handle(WorksRequest::Step(StepAction::Add(String::from("b"))));
    let outcome = state.handle(WorksRequest::Step(StepAction::Add(String::from("c"))));
    assert_eq!(outcome, WorksOutcome::Steps(StepOutcome {
      change: Ok(StepChange::Added(String::from("c"))),
      steps: vec![String::from("a"), String::from("b"), String::from("c")],
    }));

    let outcome = state.handle(WorksRequest::Step(StepAction::RemoveBack));
    assert_eq!(outcome, WorksOutcome::Steps(StepOutcome {
      change: Ok(StepChange::Removed(String::from("c"))),
      steps: vec![String::from("a"), String::from("b")],
    }));

    let outcome = state.handle(WorksRequest::Step(StepAction::RemoveByValue(String::from("z"))));
    assert_eq!(outcome, WorksOutcome::Steps(StepOutcome {
      change: Err(StepListError::NotFound(String::from("z"))),
      steps: vec![String::from("a"), String::from("b")],
    }));
  }

  #[test]
  fn test_concurrent_adds() {
    let state = Arc::new(empty_state());
    let handles: Vec<_> = (0..8).map(|i| {
      let state = Arc::clone(&state);
      thread::spawn(move || {
        for j in 0..50 {
          state.handle(WorksRequest::Step(StepAction::Add(format!("{}-{}", i, j))));
        }
      })
    }).collect();
    for handle in handles {
      handle.join().unwrap();
    }
    assert_eq!(state.steps().len(), 400);
  }
}
