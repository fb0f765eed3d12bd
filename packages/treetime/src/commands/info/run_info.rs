use crate::cli::subcommand::HandlerOutput;
use crate::io::json::{json_write_str, JsonPretty};
use crate::render::backend::{render_backend, RenderBackend};
use clap::Args;
use serde::{Deserialize, Serialize};

#[derive(Args, Debug)]
pub struct TreetimeInfoArgs {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeInfo {
  pub version: String,
  pub render_backend: RenderBackend,
  pub interactive: bool,
}

impl RuntimeInfo {
  pub fn current() -> Self {
    let backend = render_backend();
    Self {
      version: env!("CARGO_PKG_VERSION").to_owned(),
      render_backend: backend,
      interactive: backend.is_interactive(),
    }
  }
}

pub fn run_info(_: &TreetimeInfoArgs) -> HandlerOutput {
  println!("{}", json_write_str(&RuntimeInfo::current(), JsonPretty(true))?);
  Ok(None)
}
