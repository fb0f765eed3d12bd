use crate::cli::parsed_args::ParsedArgs;
use crate::cli::subcommand::Subcommand;
use crate::cli::usage::UsageError;
use clap::error::ErrorKind;
use clap::Command;
use itertools::Itertools;
use std::collections::BTreeSet;
use std::ffi::OsString;
use std::iter;
use thiserror::Error;

/// Names generated by the argument parser itself
const RESERVED_NAMES: &[&str] = &["help"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
  #[error("Subcommand '{0}' is registered more than once")]
  DuplicateName(String),

  #[error("Subcommand name '{0}' is reserved")]
  ReservedName(String),

  #[error("Subcommand name must not be empty")]
  EmptyName,
}

pub struct RegistryBuilder {
  root: Command,
  subcommands: Vec<Subcommand>,
}

impl RegistryBuilder {
  #[must_use]
  pub fn subcommand(mut self, subcommand: Subcommand) -> Self {
    self.subcommands.push(subcommand);
    self
  }

  pub fn build(self) -> Result<Registry, RegistryError> {
    let Self { root, subcommands } = self;

    let mut seen = BTreeSet::new();
    for name in subcommands.iter().map(Subcommand::name) {
      if name.is_empty() {
        return Err(RegistryError::EmptyName);
      }
      if RESERVED_NAMES.contains(&name) {
        return Err(RegistryError::ReservedName(name.to_owned()));
      }
      if !seen.insert(name) {
        return Err(RegistryError::DuplicateName(name.to_owned()));
      }
    }

    let command = subcommands
      .iter()
      .fold(root, |command, subcommand| command.subcommand(subcommand.schema().clone()))
      .subcommand_required(true)
      .arg_required_else_help(true);

    Ok(Registry { command, subcommands })
  }
}

/// All subcommands known to the tool, combined into one parser definition
pub struct Registry {
  command: Command,
  subcommands: Vec<Subcommand>,
}

impl Registry {
  /// Start a registry. `root` carries the program name, its help text and global arguments.
  pub fn builder(root: Command) -> RegistryBuilder {
    RegistryBuilder {
      root,
      subcommands: vec![],
    }
  }

  /// Parser definition of the whole tool, e.g. for generating shell completions
  pub fn command(&self) -> &Command {
    &self.command
  }

  /// Names of the subcommands offered to users, in registration order. Hidden subcommands are not listed.
  pub fn names(&self) -> Vec<String> {
    self
      .subcommands
      .iter()
      .filter(|s| !s.is_hidden())
      .map(|s| s.name().to_owned())
      .collect_vec()
  }

  pub fn get(&self, name: &str) -> Option<&Subcommand> {
    self.subcommands.iter().find(|s| s.name() == name)
  }

  /// Parse arguments (without the program name) and select the subcommand to run
  pub fn parse<I, T>(&self, args: I) -> Result<ParsedArgs<'_>, UsageError>
  where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
  {
    let argv = iter::once(OsString::from(self.command.get_name())).chain(args.into_iter().map(Into::into));

    let mut matches = self
      .command
      .clone()
      .try_get_matches_from(argv)
      .map_err(|error| self.usage_error(error))?;

    let Some((name, sub_matches)) = matches.remove_subcommand() else {
      return Err(self.make_usage_error(ErrorKind::MissingSubcommand, "a subcommand is required"));
    };

    let Some(subcommand) = self.get(&name) else {
      return Err(self.make_usage_error(ErrorKind::InvalidSubcommand, format!("unrecognized subcommand '{name}'")));
    };

    Ok(ParsedArgs::new(subcommand.name(), sub_matches, subcommand.handler()))
  }

  fn usage_error(&self, error: clap::Error) -> UsageError {
    UsageError::new(error, self.names())
  }

  fn make_usage_error(&self, kind: ErrorKind, message: impl std::fmt::Display) -> UsageError {
    self.usage_error(self.command.clone().error(kind, message))
  }
}
