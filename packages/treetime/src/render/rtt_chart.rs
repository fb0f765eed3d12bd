use crate::commands::clock::clock_model::ClockModel;
use crate::io::rtt_csv::RttRecord;
use crate::render::renderer::{Figure, Renderer};
use eyre::Report;
use itertools::Itertools;
use log::{info, warn};
use rgb::RGB8;
use std::path::Path;

const POINTS_COLOR: RGB8 = RGB8 { r: 255, g: 105, b: 97 };
const LINE_COLOR: RGB8 = RGB8 { r: 8, g: 140, b: 232 };

/// Root-to-tip chart: divergence of each tip against its sampling date, with the regression line if there is one
pub fn rtt_figure(records: &[RttRecord], clock_model: Option<&ClockModel>) -> Figure {
  let rtt_points = records
    .iter()
    .map(|record| (record.date as f32, record.divergence as f32))
    .collect_vec();

  let figure = Figure::default().points(rtt_points, POINTS_COLOR);

  match clock_model {
    Some(model) => figure.line(model.clock_rate() as f32, model.intercept() as f32, LINE_COLOR),
    None => figure,
  }
}

pub fn draw_rtt_chart(
  renderer: &Renderer,
  records: &[RttRecord],
  clock_model: Option<&ClockModel>,
  output: impl AsRef<Path>,
) -> Result<(), Report> {
  match clock_model {
    Some(model) => {
      info!("Root to tip regression:");
      info!("  {}", model.equation_str());
      info!("Root date: {:.1}", model.t_mrca());
      info!("Rate:      {:.4e}", model.clock_rate());
      info!("R²:        {:.4}", model.r_squared());
    }
    None => warn!("When drawing root-to-tip chart: no clock model available. Only data points will be drawn."),
  }

  renderer.render(&rtt_figure(records, clock_model), output)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::render::renderer::Series;
  use pretty_assertions::assert_eq;

  fn records() -> Vec<RttRecord> {
    vec![
      RttRecord { name: "A".to_owned(), date: 2000.0, divergence: 0.01 },
      RttRecord { name: "B".to_owned(), date: 2010.0, divergence: 0.02 },
    ]
  }

  #[test]
  fn figure_has_points_and_regression_line() -> Result<(), Report> {
    let model = ClockModel::from_records(&records())?;
    let figure = rtt_figure(&records(), Some(&model));
    assert_eq!(figure.series.len(), 2);
    assert!(matches!(&figure.series[0], Series::Points { points, .. } if points.len() == 2));
    assert!(matches!(figure.series[1], Series::Line { .. }));
    Ok(())
  }

  #[test]
  fn figure_without_model_has_only_points() {
    let figure = rtt_figure(&records(), None);
    assert_eq!(figure.series.len(), 1);
  }
}
