use crate::cli::parsed_args::ParsedArgs;
use clap::builder::StyledStr;
use clap::{Args, Command, FromArgMatches};
use eyre::{Report, WrapErr};
use std::fmt::{Debug, Formatter};

/// What a handler returns. `Ok(None)`: success with the default status. `Ok(Some(status))`: explicit exit status,
/// passed through unchanged. `Err(report)`: the subcommand failed.
pub type HandlerOutput = Result<Option<u8>, Report>;

/// Behavior bound to a subcommand
pub trait Handler {
  fn invoke(&self, parsed: &ParsedArgs<'_>) -> HandlerOutput;
}

impl<F> Handler for F
where
  F: Fn(&ParsedArgs<'_>) -> HandlerOutput,
{
  fn invoke(&self, parsed: &ParsedArgs<'_>) -> HandlerOutput {
    self(parsed)
  }
}

/// A named operation selectable as the first command-line token: its argument schema and its handler
pub struct Subcommand {
  name: String,
  schema: Command,
  handler: Box<dyn Handler>,
}

impl Subcommand {
  /// Subcommand named after its schema
  pub fn new(schema: Command, handler: impl Fn(&ParsedArgs<'_>) -> HandlerOutput + 'static) -> Self {
    Self::from_handler(schema, handler)
  }

  pub fn from_handler(schema: Command, handler: impl Handler + 'static) -> Self {
    Self {
      name: schema.get_name().to_owned(),
      schema,
      handler: Box::new(handler),
    }
  }

  /// Subcommand whose schema is a `clap::Args` struct. The handler receives the struct filled from parsed arguments.
  pub fn from_args<A>(name: impl Into<String>, handler: impl Fn(&A) -> HandlerOutput + 'static) -> Self
  where
    A: Args + FromArgMatches,
  {
    let schema = A::augment_args(Command::new(name.into()));
    Self::new(schema, move |parsed| {
      let args = A::from_arg_matches(parsed.matches())
        .wrap_err_with(|| format!("When reading arguments of subcommand '{}'", parsed.name()))?;
      handler(&args)
    })
  }

  #[must_use]
  pub fn about(mut self, about: impl Into<StyledStr>) -> Self {
    self.schema = self.schema.about(about);
    self
  }

  #[must_use]
  pub fn long_about(mut self, long_about: impl Into<StyledStr>) -> Self {
    self.schema = self.schema.long_about(long_about);
    self
  }

  /// Keep out of help, completions and the list of available subcommands. The subcommand can still be invoked.
  #[must_use]
  pub fn hide(mut self) -> Self {
    self.schema = self.schema.hide(true);
    self
  }

  pub fn is_hidden(&self) -> bool {
    self.schema.is_hide_set()
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn schema(&self) -> &Command {
    &self.schema
  }

  pub fn handler(&self) -> &dyn Handler {
    self.handler.as_ref()
  }
}

impl Debug for Subcommand {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Subcommand").field("name", &self.name).finish_non_exhaustive()
  }
}
