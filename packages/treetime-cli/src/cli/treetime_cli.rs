use crate::cli::verbosity::Verbosity;
use clap::builder::PossibleValuesParser;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};
use clap_complete_fig::Fig;
use eyre::{eyre, Report};
use lazy_static::lazy_static;
use log::debug;
use std::ffi::OsString;
use std::io;
use treetime::cli::dispatch::{dispatch, ExitStatus};
use treetime::cli::registry::Registry;
use treetime::cli::subcommand::{HandlerOutput, Subcommand};
use treetime::commands::clock::run_clock::run_clock;
use treetime::commands::info::run_info::run_info;
use treetime::commands::plot::run_plot::run_plot;
use treetime::utils::clap_styles::styles;
use treetime::utils::global_init::setup_logger;

lazy_static! {
  static ref SHELLS: &'static [&'static str] = &["bash", "elvish", "fish", "fig", "powershell", "zsh"];
}

#[derive(Parser, Debug)]
#[clap(name = "treetime")]
#[clap(author, version)]
#[clap(styles = styles())]
#[clap(verbatim_doc_comment)]
/// Maximum-likelihood phylodynamic inference
///
/// Documentation: https://treetime.readthedocs.io/en/stable/
/// Publication:   https://academic.oup.com/ve/article/4/1/vex042/4794731
pub struct TreetimeArgs {
  #[clap(flatten)]
  pub verbosity: Verbosity,
}

#[derive(clap::Args, Debug)]
pub struct TreetimeCompletionsArgs {
  /// Name of the shell to generate appropriate completions
  #[clap(value_name = "SHELL", default_value_t = String::from("bash"), value_parser = PossibleValuesParser::new(SHELLS.iter().copied()))]
  pub shell: String,
}

/// Exit with a chosen status, or panic. Registered in debug builds only.
#[cfg(debug_assertions)]
#[derive(clap::Args, Debug)]
pub struct TreetimeExitStatusArgs {
  /// Exit status to return. Without it, the default status is used.
  #[clap(long)]
  pub status: Option<u8>,

  /// Panic instead of returning
  #[clap(long)]
  pub panic: bool,
}

/// All subcommands of treetime
pub fn build_registry() -> Result<Registry, Report> {
  let builder = Registry::builder(TreetimeArgs::command())
    .subcommand(
      Subcommand::from_args("clock", run_clock)
        .about("Calculates the root-to-tip regression and quantifies the 'clock-i-ness' of the tree.")
        .long_about("Calculates the root-to-tip regression and quantifies the 'clock-i-ness' of the tree. Reads a table of tip sampling dates and root-to-tip divergences, fits the molecular clock and writes the clock rate, root date (tMRCA) and the R² of the fit as JSON. Optionally draws the root-to-tip chart with --plot-rtt."),
    )
    .subcommand(
      Subcommand::from_args("plot", run_plot)
        .about("Draws the root-to-tip chart of a table of tip dates and divergences."),
    )
    .subcommand(
      Subcommand::from_args("info", run_info)
        .about("Prints information about the runtime environment, such as the chart rendering backend."),
    )
    .subcommand(
      Subcommand::from_args("completions", run_completions)
        .about("Generate shell completions.")
        .long_about("Generate shell completions.\n\nThis will print the completions file contents to the console. Refer to your shell's documentation on how to install the completions.\n\nExample for Ubuntu Linux:\n\n   treetime completions bash > ~/.local/share/bash-completion/treetime"),
    );

  #[cfg(debug_assertions)]
  let builder = builder.subcommand(Subcommand::from_args("exit-status", run_exit_status).hide());

  Ok(builder.build()?)
}

#[cfg(debug_assertions)]
fn run_exit_status(args: &TreetimeExitStatusArgs) -> HandlerOutput {
  if args.panic {
    panic!("Panic requested with --panic");
  }
  Ok(args.status)
}

fn run_completions(args: &TreetimeCompletionsArgs) -> HandlerOutput {
  generate_shell_completions(&args.shell)?;
  Ok(None)
}

pub fn generate_shell_completions(shell: &str) -> Result<(), Report> {
  let registry = build_registry()?;
  let mut command = registry.command().clone();

  if shell.to_lowercase() == "fig" {
    generate(Fig, &mut command, "treetime", &mut io::stdout());
    return Ok(());
  }

  let generator = <Shell as ValueEnum>::from_str(&shell.to_lowercase(), true)
    .map_err(|err| eyre!("{}: Possible values: {}", err, SHELLS.join(", ")))?;

  let bin_name = command.get_name().to_owned();

  generate(generator, &mut command, bin_name, &mut io::stdout());

  Ok(())
}

/// Parse command line arguments (without the program name) and run the selected subcommand
pub fn run_cli<I, T>(args: I) -> Result<ExitStatus, Report>
where
  I: IntoIterator<Item = T>,
  T: Into<OsString> + Clone,
{
  let registry = build_registry()?;

  let parsed = match registry.parse(args) {
    Ok(parsed) => parsed,
    Err(usage_error) => return Ok(usage_error.report()),
  };

  setup_logger(parsed.get::<Verbosity>()?.get_filter_level());

  debug!("{parsed:#?}");

  dispatch(parsed)
}
