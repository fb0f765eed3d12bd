use crate::cli::dispatch::ExitStatus;
use clap::error::ErrorKind;
use itertools::Itertools;
use std::fmt::{Display, Formatter};

/// Command line could not be turned into a handler invocation: missing or unknown subcommand, or arguments
/// rejected by the subcommand's schema. Also carries `--help` and `--version` requests, which are not failures.
#[derive(Debug)]
pub struct UsageError {
  error: clap::Error,
  subcommands: Vec<String>,
}

impl UsageError {
  pub fn new(error: clap::Error, subcommands: Vec<String>) -> Self {
    Self { error, subcommands }
  }

  pub fn kind(&self) -> ErrorKind {
    self.error.kind()
  }

  /// Help or version output was requested
  pub fn is_display_request(&self) -> bool {
    matches!(self.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
  }

  /// No valid subcommand was selected
  pub fn is_subcommand_selection(&self) -> bool {
    matches!(
      self.kind(),
      ErrorKind::InvalidSubcommand | ErrorKind::MissingSubcommand | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
  }

  pub fn exit_status(&self) -> ExitStatus {
    if self.is_display_request() {
      ExitStatus::SUCCESS
    } else {
      ExitStatus::USAGE
    }
  }

  pub fn subcommands_str(&self) -> String {
    format!("Available subcommands: {}", self.subcommands.iter().join(", "))
  }

  /// Print the message (help and version to stdout, everything else to stderr) and return the exit status
  pub fn report(&self) -> ExitStatus {
    if let Err(err) = self.error.print() {
      eprintln!("{self}");
      eprintln!("Unable to print usage message: {err}");
    } else if self.is_subcommand_selection() {
      eprintln!("\n{}", self.subcommands_str());
    }
    self.exit_status()
  }
}

impl Display for UsageError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.error.render().to_string().trim_end())?;
    if self.is_subcommand_selection() {
      write!(f, "\n\n{}", self.subcommands_str())?;
    }
    Ok(())
  }
}

impl std::error::Error for UsageError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    Some(&self.error)
  }
}
