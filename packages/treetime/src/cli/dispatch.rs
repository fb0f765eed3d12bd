use crate::cli::parsed_args::ParsedArgs;
use eyre::{Report, WrapErr};
use log::{debug, info};
use std::fmt::{Display, Formatter};
use std::process::ExitCode;

/// Process exit status
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExitStatus(u8);

impl ExitStatus {
  pub const SUCCESS: Self = Self(0);

  /// Command line could not be parsed
  pub const USAGE: Self = Self(2);

  pub const fn new(code: u8) -> Self {
    Self(code)
  }

  pub const fn code(self) -> u8 {
    self.0
  }

  /// Absent status means success. Explicit status is kept as is.
  pub fn from_handler_output(output: Option<u8>) -> Self {
    output.map_or(Self::SUCCESS, Self)
  }
}

impl From<ExitStatus> for ExitCode {
  fn from(status: ExitStatus) -> Self {
    ExitCode::from(status.code())
  }
}

impl Display for ExitStatus {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Run the handler of the selected subcommand, exactly once. Handler errors are returned to the caller as is.
pub fn dispatch(parsed: ParsedArgs<'_>) -> Result<ExitStatus, Report> {
  let name = parsed.name();
  debug!("Running subcommand '{name}'");

  let output = parsed
    .handler()
    .invoke(&parsed)
    .wrap_err_with(|| format!("When running subcommand '{name}'"))?;

  let status = ExitStatus::from_handler_output(output);
  info!("Subcommand '{name}' finished with exit status {status}");
  Ok(status)
}
