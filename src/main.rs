
use stepworks::command::{Command, HELP_TEXT};
use stepworks::logging::init_logging;
use stepworks::state::WorksState;
use stepworks::steps::StepList;

use clap::Parser;
use tracing::{info, warn};

use std::io::{self, BufRead, Write};

/// Interactive front end for the step list and the expression
/// converter. Reads one command per line from standard input.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
  /// Log filter, in `tracing_subscriber::EnvFilter` syntax.
  #[arg(long, env = "STEPWORKS_LOG", default_value = "info")]
  log_level: String,

  /// Start with an empty step list instead of the sample steps.
  #[arg(long)]
  no_samples: bool,
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_logging(&cli.log_level);

  let state = if cli.no_samples {
    WorksState::with_steps(StepList::new())
  } else {
    WorksState::new()
  };
  info!(steps = state.steps().len(), "stepworks ready");

  let stdin = io::stdin();
  let mut stdout = io::stdout().lock();
  for line in stdin.lock().lines() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }
    match line.parse::<Command>() {
      Ok(Command::Request(request)) => writeln!(stdout, "{}", state.handle(request))?,
      Ok(Command::Help) => writeln!(stdout, "{}", HELP_TEXT)?,
      Ok(Command::Quit) => break,
      Err(err) => {
        warn!(line = %line, "could not parse command");
        writeln!(stdout, "{}", err)?;
      }
    }
    stdout.flush()?;
  }
  Ok(())
}
