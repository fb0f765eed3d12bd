//! Process-wide selection of the chart rendering backend.
//!
//! The backend is chosen once per process. Whoever comes first wins: either an explicit
//! [`select_render_backend`] call, or the first [`render_backend`] read, which locks in the default.
//! Nothing checks that selection happened before the first chart was drawn, so the selection has to
//! run before any renderer is constructed. Binaries do it from a `#[ctor]` constructor via
//! [`crate::utils::global_init::global_init`].

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::sync::OnceLock;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RenderBackend {
  /// Render into text buffers and files. Never touches the terminal.
  Headless,

  /// Draw to the interactive console, sized to the current terminal.
  #[default]
  Terminal,
}

impl RenderBackend {
  pub const fn is_interactive(self) -> bool {
    matches!(self, Self::Terminal)
  }
}

impl Display for RenderBackend {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Headless => write!(f, "headless"),
      Self::Terminal => write!(f, "terminal"),
    }
  }
}

/// Single-assignment holder of a backend.
#[derive(Debug)]
pub struct BackendSlot(OnceLock<RenderBackend>);

impl BackendSlot {
  pub const fn new() -> Self {
    Self(OnceLock::new())
  }

  /// Store the backend unless one is already stored. Returns the backend in effect.
  pub fn select(&self, backend: RenderBackend) -> RenderBackend {
    *self.0.get_or_init(|| backend)
  }

  /// Backend in effect. The first read of an empty slot stores the default.
  pub fn get(&self) -> RenderBackend {
    *self.0.get_or_init(RenderBackend::default)
  }

  pub fn is_selected(&self) -> bool {
    self.0.get().is_some()
  }
}

impl Default for BackendSlot {
  fn default() -> Self {
    Self::new()
  }
}

static RENDER_BACKEND: BackendSlot = BackendSlot::new();

pub fn select_render_backend(backend: RenderBackend) -> RenderBackend {
  RENDER_BACKEND.select(backend)
}

pub fn render_backend() -> RenderBackend {
  RENDER_BACKEND.get()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use rstest::rstest;

  #[rstest]
  #[case(RenderBackend::Headless, RenderBackend::Terminal)]
  #[case(RenderBackend::Terminal, RenderBackend::Headless)]
  #[case(RenderBackend::Headless, RenderBackend::Headless)]
  fn first_selection_wins(#[case] first: RenderBackend, #[case] second: RenderBackend) {
    let slot = BackendSlot::new();
    assert_eq!(slot.select(first), first);
    assert_eq!(slot.select(second), first);
    assert_eq!(slot.get(), first);
  }

  #[test]
  fn first_read_locks_in_default() {
    let slot = BackendSlot::new();
    assert!(!slot.is_selected());
    assert_eq!(slot.get(), RenderBackend::Terminal);
    assert_eq!(slot.select(RenderBackend::Headless), RenderBackend::Terminal);
  }

  #[test]
  fn process_backend_is_headless_after_global_init() {
    // the test harness runs `global_init()` from a constructor
    assert_eq!(render_backend(), RenderBackend::Headless);
    assert_eq!(select_render_backend(RenderBackend::Terminal), RenderBackend::Headless);
    assert_eq!(render_backend(), RenderBackend::Headless);
  }

  #[test]
  fn serializes_as_kebab_case() -> Result<(), serde_json::Error> {
    assert_eq!(serde_json::to_string(&RenderBackend::Headless)?, r#""headless""#);
    Ok(())
  }
}
