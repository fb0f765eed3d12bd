use crate::cli::subcommand::Handler;
use clap::{ArgMatches, FromArgMatches};
use eyre::{Report, WrapErr};
use std::fmt::{Debug, Formatter};

/// Result of parsing the command line against a registry. Holds the argument values of the selected
/// subcommand (global flags included) and the handler bound to it.
pub struct ParsedArgs<'r> {
  name: &'r str,
  matches: ArgMatches,
  handler: &'r dyn Handler,
}

impl<'r> ParsedArgs<'r> {
  pub(crate) fn new(name: &'r str, matches: ArgMatches, handler: &'r dyn Handler) -> Self {
    Self { name, matches, handler }
  }

  /// Name of the selected subcommand
  pub fn name(&self) -> &'r str {
    self.name
  }

  pub fn matches(&self) -> &ArgMatches {
    &self.matches
  }

  pub fn handler(&self) -> &'r dyn Handler {
    self.handler
  }

  /// Extract a typed view of the arguments, e.g. a `clap::Args` struct of global flags
  pub fn get<A: FromArgMatches>(&self) -> Result<A, Report> {
    A::from_arg_matches(&self.matches)
      .wrap_err_with(|| format!("When reading arguments of subcommand '{}'", self.name))
  }
}

impl Debug for ParsedArgs<'_> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("ParsedArgs")
      .field("name", &self.name)
      .field("matches", &self.matches)
      .finish_non_exhaustive()
  }
}
