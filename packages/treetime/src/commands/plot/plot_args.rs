use crate::commands::clock::clock_args::RttColumnArgs;
use clap::{Args, ValueHint};
use std::fmt::Debug;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct TreetimePlotArgs {
  /// CSV file with sampling dates and root-to-tip divergences of tips, with columns 'name, date, divergence'
  ///
  /// Delimiter is chosen from file extension: 'csv' (comma), 'tsv' (tab), 'ssv' (semicolon).
  /// Use special value "-" to read comma-separated data from standard input (stdin).
  #[clap(long, short = 'i')]
  #[clap(value_hint = ValueHint::FilePath)]
  pub input: PathBuf,

  #[clap(flatten)]
  pub columns: RttColumnArgs,

  /// Path to output file with the chart
  ///
  /// Omit this argument or use special value "-" to write to standard output (stdout).
  #[clap(long, short = 'o')]
  #[clap(value_hint = ValueHint::AnyPath)]
  #[clap(default_value = "-")]
  pub output: PathBuf,

  /// Chart width, in braille dots (2 per character)
  #[clap(long, default_value_t = 160)]
  pub width: u16,

  /// Chart height, in braille dots (4 per line)
  #[clap(long, default_value_t = 80)]
  pub height: u16,
}
