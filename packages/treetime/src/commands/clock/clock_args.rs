use crate::io::rtt_csv::RttColumns;
use clap::{Args, ValueHint};
use std::fmt::Debug;
use std::path::PathBuf;

/// Column names of the root-to-tip table
#[derive(Args, Debug, Clone, Default)]
pub struct RttColumnArgs {
  /// Label of the column to be used as taxon name. Default: first of 'name', 'strain', 'accession'
  #[clap(long)]
  pub name_column: Option<String>,

  /// Label of the column to be used as sampling date. Default: first of 'date', 'numdate'
  ///
  /// Dates are either year fractions (as in 2012.15) or ISO dates (as in 2012-02-24).
  #[clap(long)]
  pub date_column: Option<String>,

  /// Label of the column to be used as root-to-tip divergence. Default: first of 'divergence', 'div', 'distance'
  #[clap(long)]
  pub div_column: Option<String>,
}

impl From<&RttColumnArgs> for RttColumns {
  fn from(args: &RttColumnArgs) -> Self {
    Self {
      name: args.name_column.clone(),
      date: args.date_column.clone(),
      divergence: args.div_column.clone(),
    }
  }
}

#[derive(Args, Debug)]
pub struct TreetimeClockArgs {
  /// CSV file with sampling dates and root-to-tip divergences of tips, with columns 'name, date, divergence'
  ///
  /// Delimiter is chosen from file extension: 'csv' (comma), 'tsv' (tab), 'ssv' (semicolon).
  /// Use special value "-" to read comma-separated data from standard input (stdin).
  #[clap(long, short = 'd')]
  #[clap(value_hint = ValueHint::FilePath)]
  pub dates: PathBuf,

  #[clap(flatten)]
  pub columns: RttColumnArgs,

  /// Path to output JSON file with the clock model
  ///
  /// Omit this argument or use special value "-" to write to standard output (stdout).
  #[clap(long, short = 'o')]
  #[clap(value_hint = ValueHint::AnyPath)]
  #[clap(default_value = "-")]
  pub output: PathBuf,

  /// Filename to save the root-to-tip chart to
  #[clap(long)]
  #[clap(value_hint = ValueHint::FilePath)]
  pub plot_rtt: Option<PathBuf>,
}
