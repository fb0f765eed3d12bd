use ctor::ctor;
use eyre::Report;
use std::env;
use std::process::ExitCode;
use treetime::utils::global_init::global_init;
use treetime_cli::cli::treetime_cli::run_cli;

#[ctor]
fn init() {
  // Runs before main: the rendering backend is fixed before any subcommand is registered or run
  global_init();
}

fn main() -> Result<ExitCode, Report> {
  let status = run_cli(env::args_os().skip(1))?;
  Ok(status.into())
}
