//! Inspired by clap-verbosity-flag:
//! https://github.com/rust-cli/clap-verbosity-flag
use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Args};
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub struct Verbosity {
  /// Set verbosity level of console output. Without any verbosity flags, `RUST_LOG` is used if set, `warn` otherwise.
  #[clap(long, global = true, value_parser = PossibleValuesParser::new(["off", "error", "warn", "info", "debug", "trace"])
      .try_map(|s| s.parse::<LevelFilter>()))]
  #[clap(conflicts_with = "quiet", conflicts_with = "verbose", conflicts_with = "silent")]
  #[clap(display_order = 95)]
  pub verbosity: Option<LevelFilter>,

  /// Disable all console output. Same as `--verbosity=off`
  #[clap(long, global = true)]
  #[clap(conflicts_with = "quiet", conflicts_with = "verbose", conflicts_with = "verbosity")]
  #[clap(display_order = 96)]
  pub silent: bool,

  /// Make console output more verbose. Add multiple occurrences to increase verbosity further.
  #[clap(long, short = 'v', action = ArgAction::Count, global = true)]
  #[clap(conflicts_with = "quiet", conflicts_with = "verbosity", conflicts_with = "silent")]
  #[clap(display_order = 97)]
  pub verbose: u8,

  /// Make console output more quiet. Add multiple occurrences to make output even more quiet.
  #[clap(long, short = 'q', action = ArgAction::Count, global = true)]
  #[clap(conflicts_with = "verbose", conflicts_with = "verbosity")]
  #[clap(display_order = 98)]
  pub quiet: u8,
}

impl Verbosity {
  /// Level requested on the command line. `None` when no verbosity flag was given.
  pub const fn get_filter_level(&self) -> Option<LevelFilter> {
    if self.silent {
      // --verbosity=<level> and --silent take priority over -v and -q
      return Some(LevelFilter::Off);
    }

    let base = match self.verbosity {
      Some(level) => level,
      None if self.verbose == 0 && self.quiet == 0 => return None,
      None => LevelFilter::Warn,
    };

    let ilevel = level_to_int(base);
    let ilevel = ilevel.saturating_add(self.verbose);
    let ilevel = ilevel.saturating_sub(self.quiet);
    Some(level_from_int(ilevel))
  }
}

const fn level_to_int(level: LevelFilter) -> u8 {
  match level {
    LevelFilter::Off => 0,
    LevelFilter::Error => 1,
    LevelFilter::Warn => 2,
    LevelFilter::Info => 3,
    LevelFilter::Debug => 4,
    LevelFilter::Trace => 5,
  }
}

const fn level_from_int(verbosity: u8) -> LevelFilter {
  match verbosity {
    0 => LevelFilter::Off,
    1 => LevelFilter::Error,
    2 => LevelFilter::Warn,
    3 => LevelFilter::Info,
    4 => LevelFilter::Debug,
    5.. => LevelFilter::Trace,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use clap::Parser;
  use pretty_assertions::assert_eq;
  use rstest::rstest;

  #[derive(Parser, Debug)]
  struct Cli {
    #[clap(flatten)]
    verbosity: Verbosity,
  }

  #[rstest]
  #[case(vec![], None)]
  #[case(vec!["-v"], Some(LevelFilter::Info))]
  #[case(vec!["-vvvvvv"], Some(LevelFilter::Trace))]
  #[case(vec!["-q"], Some(LevelFilter::Error))]
  #[case(vec!["-qqqq"], Some(LevelFilter::Off))]
  #[case(vec!["--verbosity", "debug"], Some(LevelFilter::Debug))]
  #[case(vec!["--verbosity", "warn"], Some(LevelFilter::Warn))]
  #[case(vec!["--silent"], Some(LevelFilter::Off))]
  fn test_filter_level(#[case] args: Vec<&str>, #[case] expected: Option<LevelFilter>) {
    let cli = Cli::try_parse_from(std::iter::once("treetime").chain(args)).unwrap();
    assert_eq!(cli.verbosity.get_filter_level(), expected);
  }

  #[test]
  fn silent_conflicts_with_verbose() {
    assert!(Cli::try_parse_from(["treetime", "--silent", "-v"]).is_err());
  }
}
