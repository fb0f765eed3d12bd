use crate::io::file::create_file_or_stdout;
use crate::make_error;
use crate::render::backend::{render_backend, RenderBackend};
use eyre::{Report, WrapErr};
use log::{info, warn};
use num_traits::clamp;
use rgb::RGB8;
use std::io::Write;
use std::path::Path;
use textplots::{Chart, ColorPlot, Plot, Shape};

const MIN_CHART_DIM: u16 = 32;
const MAX_CHART_DIM: u16 = 1024;

/// Canvas dimensions in braille dots
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChartSize {
  pub width: u32,
  pub height: u32,
}

impl ChartSize {
  pub fn new(width: u16, height: u16) -> Self {
    Self {
      width: u32::from(clamp(width, MIN_CHART_DIM, MAX_CHART_DIM)),
      height: u32::from(clamp(height, MIN_CHART_DIM, MAX_CHART_DIM)),
    }
  }
}

impl Default for ChartSize {
  fn default() -> Self {
    Self::new(160, 80)
  }
}

#[derive(Clone, Debug)]
pub enum Series {
  Points { points: Vec<(f32, f32)>, color: RGB8 },
  Line { slope: f32, intercept: f32, color: RGB8 },
}

#[derive(Clone, Debug, Default)]
pub struct Figure {
  pub series: Vec<Series>,
}

impl Figure {
  pub fn points(mut self, points: Vec<(f32, f32)>, color: RGB8) -> Self {
    self.series.push(Series::Points { points, color });
    self
  }

  pub fn line(mut self, slope: f32, intercept: f32, color: RGB8) -> Self {
    self.series.push(Series::Line { slope, intercept, color });
    self
  }

  /// Horizontal extent of all point series, padded so that points do not sit on the frame
  pub fn x_range(&self) -> Option<(f32, f32)> {
    let (x_min, x_max) = self
      .series
      .iter()
      .filter_map(|series| match series {
        Series::Points { points, .. } => Some(points.iter().map(|(x, _)| *x)),
        Series::Line { .. } => None,
      })
      .flatten()
      .filter(|x| x.is_finite())
      .fold(None, |acc: Option<(f32, f32)>, x| match acc {
        None => Some((x, x)),
        Some((lo, hi)) => Some((lo.min(x), hi.max(x))),
      })?;

    if x_max - x_min <= f32::EPSILON * x_max.abs().max(1.0) {
      return Some((x_min - 0.5, x_max + 0.5));
    }
    let pad = (x_max - x_min) * 0.01;
    Some((x_min - pad, x_max + pad))
  }
}

/// Draws figures using the backend it was set up with.
#[derive(Clone, Debug)]
pub struct Renderer {
  backend: RenderBackend,
  size: Option<ChartSize>,
}

impl Renderer {
  pub fn new(backend: RenderBackend) -> Self {
    Self { backend, size: None }
  }

  /// Renderer for the backend selected for this process
  pub fn from_environment() -> Self {
    Self::new(render_backend())
  }

  #[must_use]
  pub fn with_size(mut self, size: ChartSize) -> Self {
    self.size = Some(size);
    self
  }

  /// Render to a string. Available for every backend; never queries the terminal.
  pub fn render_to_string(&self, figure: &Figure) -> Result<String, Report> {
    let Some((x_min, x_max)) = figure.x_range() else {
      return make_error!("Unable to render chart: there are no points to plot");
    };
    let size = self.size.unwrap_or_default();
    let shapes = to_shapes(figure);

    let mut chart = Chart::new(size.width, size.height, x_min, x_max);
    let mut chart_ref = &mut chart;
    for (shape, _) in &shapes {
      chart_ref = chart_ref.lineplot(shape);
    }
    chart_ref.axis();
    chart_ref.figures();
    Ok(chart_ref.to_string())
  }

  /// Render the figure. Headless backend writes plain text into `output` (`-` is standard output). Terminal backend
  /// draws a colored chart on the console and ignores `output`.
  pub fn render(&self, figure: &Figure, output: impl AsRef<Path>) -> Result<(), Report> {
    let output = output.as_ref();
    match self.backend {
      RenderBackend::Headless => {
        let text = self.render_to_string(figure)?;
        let mut file = create_file_or_stdout(output)?;
        writeln!(file, "{text}")
          .and_then(|()| file.flush())
          .wrap_err_with(|| format!("When writing chart to '{}'", output.display()))?;
        info!("Chart written to '{}'", output.display());
        Ok(())
      }
      RenderBackend::Terminal => {
        warn!(
          "Drawing chart on the terminal. Output path '{}' is not used by this backend.",
          output.display()
        );
        self.draw_on_terminal(figure)
      }
    }
  }

  fn draw_on_terminal(&self, figure: &Figure) -> Result<(), Report> {
    let Some((x_min, x_max)) = figure.x_range() else {
      return make_error!("Unable to draw chart: there are no points to plot");
    };

    let size = match self.size {
      Some(size) => size,
      None => {
        let (width, height) = crossterm::terminal::size().wrap_err("When querying terminal dimensions")?;
        ChartSize::new(width, height)
      }
    };

    let shapes = to_shapes(figure);

    let mut chart = Chart::new(size.width, size.height, x_min, x_max);
    let mut chart_ref = &mut chart;
    for (shape, color) in &shapes {
      chart_ref = chart_ref.linecolorplot(shape, *color);
    }
    chart_ref.display();
    Ok(())
  }
}

fn to_shapes(figure: &Figure) -> Vec<(Shape<'_>, RGB8)> {
  figure
    .series
    .iter()
    .map(|series| match series {
      Series::Points { points, color } => (Shape::Points(points.as_slice()), *color),
      Series::Line { slope, intercept, color } => {
        let (slope, intercept) = (*slope, *intercept);
        (Shape::Continuous(Box::new(move |x: f32| slope * x + intercept)), *color)
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use rstest::rstest;

  const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };

  #[rstest]
  #[case(0, 0, 32, 32)]
  #[case(80, 24, 80, 32)]
  #[case(4000, 100, 1024, 100)]
  fn chart_size_is_clamped(#[case] w: u16, #[case] h: u16, #[case] ew: u32, #[case] eh: u32) {
    assert_eq!(ChartSize::new(w, h), ChartSize { width: ew, height: eh });
  }

  #[test]
  fn x_range_is_padded() {
    let figure = Figure::default().points(vec![(2000.0, 0.0), (2010.0, 1.0)], RED);
    let (x_min, x_max) = figure.x_range().unwrap();
    assert!((x_min - 1999.9).abs() < 1e-3, "{x_min}");
    assert!((x_max - 2010.1).abs() < 1e-3, "{x_max}");
  }

  #[test]
  fn x_range_of_single_date_is_widened() {
    let figure = Figure::default().points(vec![(2000.0, 0.0), (2000.0, 1.0)], RED);
    assert_eq!(figure.x_range(), Some((1999.5, 2000.5)));
  }

  #[test]
  fn empty_figure_has_no_range() {
    let figure = Figure::default().line(1.0, 0.0, RED);
    assert_eq!(figure.x_range(), None);
  }

  #[test]
  fn renders_text_chart_without_terminal() -> Result<(), Report> {
    let figure = Figure::default()
      .points(vec![(2000.0, 0.01), (2005.0, 0.02), (2010.0, 0.03)], RED)
      .line(0.002, -3.99, RED);
    let text = Renderer::new(RenderBackend::Headless)
      .with_size(ChartSize::new(64, 32))
      .render_to_string(&figure)?;
    assert!(!text.trim().is_empty());
    Ok(())
  }

  #[test]
  fn headless_render_writes_output_file() -> Result<(), Report> {
    let dir = tempfile::tempdir()?;
    let output = dir.path().join("charts").join("rtt.txt");
    let figure = Figure::default().points(vec![(1.0, 1.0), (2.0, 4.0), (3.0, 9.0)], RED);

    Renderer::new(RenderBackend::Headless).render(&figure, &output)?;

    assert!(std::fs::read_to_string(&output)?.lines().count() > 1);
    Ok(())
  }

  #[test]
  fn rendering_empty_figure_fails() {
    let result = Renderer::new(RenderBackend::Headless).render_to_string(&Figure::default());
    assert!(result.is_err());
  }
}
