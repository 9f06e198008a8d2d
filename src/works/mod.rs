
//! The four demonstrations offered by the works page, and the
//! request types which select between them.

pub mod area;
pub mod text;

use area::ParseMeasureError;
use crate::steps::StepListError;
use crate::steps::label::canonical_label;

use serde::Deserialize;

use std::fmt::{self, Display, Formatter};

/// The raw fields of a works form submission. Every field is
/// optional, and blank fields are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WorksForm {
  pub text: Option<String>,
  pub radius: Option<String>,
  pub base: Option<String>,
  pub height: Option<String>,
  pub step_action: Option<String>,
  pub step: Option<String>,
  pub expression: Option<String>,
}

/// A single demonstration to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorksRequest {
  Uppercase(String),
  CircleArea(String),
  TriangleArea { base: String, height: String },
  Step(StepAction),
  Postfix(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
  Add(String),
  RemoveFront,
  RemoveBack,
  RemoveByValue(String),
  Show,
}

/// What a step action did to the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepChange {
  Added(String),
  Removed(String),
  Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
  pub change: Result<StepChange, StepListError>,
  /// The full list of steps after the action, first to last.
  pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorksOutcome {
  Uppercase(String),
  CircleArea(Result<f64, ParseMeasureError>),
  TriangleArea(Result<f64, ParseMeasureError>),
  Steps(StepOutcome),
  Postfix(String),
}

fn non_blank(field: &Option<String>) -> Option<&str> {
  field.as_deref().filter(|s| !s.trim().is_empty())
}

impl WorksForm {
  /// Selects the demonstration this form asks for. Fields are
  /// considered in a fixed order (text, radius, base and height, step
  /// action, expression), and the first one present wins.
  pub fn into_request(self) -> Option<WorksRequest> {
    if let Some(text) = non_blank(&self.text) {
      return Some(WorksRequest::Uppercase(text.to_owned()));
    }
    if let Some(radius) = non_blank(&self.radius) {
      return Some(WorksRequest::CircleArea(radius.to_owned()));
    }
    if let (Some(base), Some(height)) = (non_blank(&self.base), non_blank(&self.height)) {
      return Some(WorksRequest::TriangleArea { base: base.to_owned(), height: height.to_owned() });
    }
    if let Some(action) = self.step_action() {
      return Some(WorksRequest::Step(action));
    }
    non_blank(&self.expression).map(|expr| WorksRequest::Postfix(expr.to_owned()))
  }

  fn step_action(&self) -> Option<StepAction> {
    let step = non_blank(&self.step);
    match non_blank(&self.step_action)?.trim() {
      "add" => step.map(|s| StepAction::Add(s.to_owned())),
      "front" => Some(StepAction::RemoveFront),
      "back" => Some(StepAction::RemoveBack),
      "remove" => step.map(|s| StepAction::RemoveByValue(canonical_label(s).to_owned())),
      "show" => Some(StepAction::Show),
      _ => None,
    }
  }
}

impl Display for StepChange {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      StepChange::Added(label) => write!(f, "Added step '{}'.", label),
      StepChange::Removed(label) => write!(f, "Removed step '{}'.", label),
      StepChange::Unchanged => Ok(()),
    }
  }
}

impl Display for WorksOutcome {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      WorksOutcome::Uppercase(text) => write!(f, "{}", text),
      // Debug keeps the fractional part of whole numbers (`6.0`).
      WorksOutcome::CircleArea(Ok(area)) | WorksOutcome::TriangleArea(Ok(area)) => write!(f, "{:?}", area),
      WorksOutcome::CircleArea(Err(err)) | WorksOutcome::TriangleArea(Err(err)) => write!(f, "{}", err),
      WorksOutcome::Steps(outcome) => {
        match &outcome.change {
          Ok(StepChange::Unchanged) => {}
          Ok(change) => writeln!(f, "{}", change)?,
          Err(err) => writeln!(f, "{}", err)?,
        }
        write!(f, "{}", outcome.steps.join(" -> "))
      }
      WorksOutcome::Postfix(postfix) => write!(f, "{}", postfix),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn form(json: &str) -> WorksForm {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn test_empty_form() {
    assert_eq!(WorksForm::default().into_request(), None);
    assert_eq!(form("{}").into_request(), None);
  }

  #[test]
  fn test_text_wins() {
    let request = form(r#"{"text": "hi", "radius": "2", "expression": "A+B"}"#).into_request();
    assert_eq!(request, Some(WorksRequest::Uppercase(String::from("hi"))));
  }

  #[test]
  fn test_blank_fields_are_skipped() {
    let request = form(r#"{"text": "   ", "radius": "2"}"#).into_request();
    assert_eq!(request, Some(WorksRequest::CircleArea(String::from("2"))));
  }

  #[test]
  fn test_triangle_needs_both_fields() {
    assert_eq!(form(r#"{"base": "3"}"#).into_request(), None);
    assert_eq!(form(r#"{"base": "3", "height": " "}"#).into_request(), None);
    assert_eq!(
      form(r#"{"base": "3", "height": "4"}"#).into_request(),
      Some(WorksRequest::TriangleArea { base: String::from("3"), height: String::from("4") }),
    );
  }

  #[test]
  fn test_step_actions() {
    assert_eq!(
      form(r#"{"step_action": "add", "step": "F. Celebrate"}"#).into_request(),
      Some(WorksRequest::Step(StepAction::Add(String::from("F. Celebrate")))),
    );
    assert_eq!(
      form(r#"{"step_action": "front"}"#).into_request(),
      Some(WorksRequest::Step(StepAction::RemoveFront)),
    );
    assert_eq!(
      form(r#"{"step_action": "back"}"#).into_request(),
      Some(WorksRequest::Step(StepAction::RemoveBack)),
    );
    assert_eq!(
      form(r#"{"step_action": "show"}"#).into_request(),
      Some(WorksRequest::Step(StepAction::Show)),
    );
  }

  #[test]
  fn test_remove_uses_canonical_label() {
    assert_eq!(
      form(r#"{"step_action": "remove", "step": " c "}"#).into_request(),
      Some(WorksRequest::Step(StepAction::RemoveByValue(String::from("C. Assemble")))),
    );
  }

  #[test]
  fn test_add_without_label_falls_through() {
    assert_eq!(form(r#"{"step_action": "add", "step": ""}"#).into_request(), None);
    assert_eq!(
      form(r#"{"step_action": "add", "expression": "A*B"}"#).into_request(),
      Some(WorksRequest::Postfix(String::from("A*B"))),
    );
  }

  #[test]
  fn test_unknown_step_action() {
    assert_eq!(form(r#"{"step_action": "shuffle"}"#).into_request(), None);
  }

  #[test]
  fn test_display_outcomes() {
    assert_eq!(WorksOutcome::Uppercase(String::from("HI")).to_string(), "HI");
    assert_eq!(WorksOutcome::CircleArea(Ok(78.54)).to_string(), "78.54");
    assert_eq!(WorksOutcome::TriangleArea(Ok(6.0)).to_string(), "6.0");
    assert_eq!(WorksOutcome::TriangleArea(area::triangle_area("x", "1")).to_string(), "Invalid input");
    let steps = WorksOutcome::Steps(StepOutcome {
      change: Err(StepListError::Empty),
      steps: vec![],
    });
    assert_eq!(steps.to_string(), "The list is empty.\n");
    let steps = WorksOutcome::Steps(StepOutcome {
      change: Ok(StepChange::Removed(String::from("a"))),
      steps: vec![String::from("b"), String::from("c")],
    });
    assert_eq!(steps.to_string(), "Removed step 'a'.\nb -> c");
  }
}
