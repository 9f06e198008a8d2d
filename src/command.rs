
//! Line-oriented command syntax for the interactive front end.
//!
//! Each line is a command name followed by its argument text, for
//! example `add Bake the cake`, `triangle 3 4`, or `postfix (A+B)*C`.

use crate::steps::label::canonical_label;
use crate::works::{WorksRequest, StepAction};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use std::str::FromStr;

static COMMAND_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^\s*(\S+)\s*(.*?)\s*$").unwrap());

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Request(WorksRequest),
  Help,
  Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseCommandError {
  #[error("Empty command.")]
  EmptyCommand,
  #[error("Unknown command '{0}'. Type 'help' for a list of commands.")]
  UnknownCommand(String),
  #[error("Command '{command}' expects {expected}.")]
  MissingArgument {
    command: &'static str,
    expected: &'static str,
  },
}

pub const HELP_TEXT: &str = "\
Commands:
  upper <text>          upper-case the text
  circle <radius>       area of a circle
  triangle <base> <h>   area of a triangle
  add <label>           append a step
  front                 remove the first step
  back                  remove the last step
  remove <label|A-E>    remove a step by label or sample code
  steps                 show the steps
  postfix <expression>  convert an infix expression to postfix
  help                  show this message
  quit                  exit";

fn require<'a>(
  arg: &'a str,
  command: &'static str,
  expected: &'static str,
) -> Result<&'a str, ParseCommandError> {
  if arg.is_empty() {
    Err(ParseCommandError::MissingArgument { command, expected })
  } else {
    Ok(arg)
  }
}

impl FromStr for Command {
  type Err = ParseCommandError;

  fn from_str(line: &str) -> Result<Self, Self::Err> {
    let captures = COMMAND_RE.captures(line).ok_or(ParseCommandError::EmptyCommand)?;
    let name = captures[1].to_lowercase();
    let arg = captures.get(2).map_or("", |m| m.as_str());
    let request = match name.as_str() {
      "help" => return Ok(Command::Help),
      "quit" | "exit" => return Ok(Command::Quit),
      "upper" => WorksRequest::Uppercase(require(arg, "upper", "some text")?.to_owned()),
      "circle" => WorksRequest::CircleArea(require(arg, "circle", "a radius")?.to_owned()),
      "triangle" => {
        let mut parts = arg.split_whitespace();
        match (parts.next(), parts.next()) {
          (Some(base), Some(height)) =>
            WorksRequest::TriangleArea { base: base.to_owned(), height: height.to_owned() },
          _ =>
            return Err(ParseCommandError::MissingArgument { command: "triangle", expected: "a base and a height" }),
        }
      }
      "add" => WorksRequest::Step(StepAction::Add(require(arg, "add", "a step label")?.to_owned())),
      "front" => WorksRequest::Step(StepAction::RemoveFront),
      "back" => WorksRequest::Step(StepAction::RemoveBack),
      "remove" => {
        let label = require(arg, "remove", "a step label")?;
        WorksRequest::Step(StepAction::RemoveByValue(canonical_label(label).to_owned()))
      }
      "steps" | "list" => WorksRequest::Step(StepAction::Show),
      "postfix" => WorksRequest::Postfix(require(arg, "postfix", "an expression")?.to_owned()),
      _ => return Err(ParseCommandError::UnknownCommand(name)),
    };
    Ok(Command::Request(request))
  }
}
