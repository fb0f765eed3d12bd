use crate::io::rtt_csv::RttRecord;
use crate::make_error;
use eyre::Report;
use getset::CopyGetters;
use serde::{Deserialize, Serialize};

/// Linear model of root-to-tip divergence against sampling date
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, CopyGetters)]
pub struct ClockModel {
  #[getset(get_copy = "pub")]
  clock_rate: f64,

  #[getset(get_copy = "pub")]
  intercept: f64,

  #[getset(get_copy = "pub")]
  chisq: f64,

  #[getset(get_copy = "pub")]
  r_val: f64,
}

impl ClockModel {
  /// Ordinary least squares fit of `divergence = clock_rate * date + intercept`
  pub fn from_records(records: &[RttRecord]) -> Result<Self, Report> {
    if records.len() < 2 {
      return make_error!(
        "At least 2 tips with dates and divergences are required for root-to-tip regression, but found {}",
        records.len()
      );
    }

    let n = records.len() as f64;
    let mean_date = records.iter().map(|r| r.date).sum::<f64>() / n;
    let mean_div = records.iter().map(|r| r.divergence).sum::<f64>() / n;

    // Sums of centered products, so that year-scale dates keep their precision
    let (mut sxx, mut sxy, mut syy) = (0.0, 0.0, 0.0);
    for RttRecord { date, divergence, .. } in records {
      let dx = date - mean_date;
      let dy = divergence - mean_div;
      sxx += dx * dx;
      sxy += dx * dy;
      syy += dy * dy;
    }

    if !sxx.is_finite() || !sxy.is_finite() {
      return make_error!(
        "Root-to-tip regression is numerically unstable: dates or divergences are too large or not finite"
      );
    }

    if sxx <= 0.0 {
      return make_error!("No variation in sampling dates! Please specify your clock rate explicitly.");
    }

    let clock_rate = sxy / sxx;
    let intercept = mean_div - clock_rate * mean_date;
    if !clock_rate.is_finite() || !intercept.is_finite() {
      return make_error!(
        "Root-to-tip regression produced a non-finite clock rate ({clock_rate}) or intercept ({intercept})"
      );
    }

    let chisq = records
      .iter()
      .map(|RttRecord { date, divergence, .. }| {
        let residual = (divergence - mean_div) - clock_rate * (date - mean_date);
        residual * residual
      })
      .sum();

    let r_val = if syy > 0.0 && syy.is_finite() {
      sxy / (sxx * syy).sqrt()
    } else {
      0.0
    };

    Ok(Self {
      clock_rate,
      intercept,
      chisq,
      r_val,
    })
  }

  pub fn date(&self, div: f64) -> f64 {
    (div - self.intercept()) / self.clock_rate()
  }

  /// Time of root (most recent common ancestor)
  pub fn t_mrca(&self) -> f64 {
    self.date(0.0)
  }

  pub fn r_squared(&self) -> f64 {
    self.r_val().powi(2)
  }

  /// String showing line equation (for display)
  pub fn equation_str(&self) -> String {
    format!(
      "div = {:.4e}t {:} {:.4e}",
      self.clock_rate(),
      if self.intercept() < 0.0 { "-" } else { "+" },
      self.intercept().abs()
    )
  }
}

/// What `treetime clock` reports
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ClockModelSummary {
  pub clock_rate: f64,
  pub intercept: f64,
  pub chisq: f64,
  pub r_val: f64,
  pub r_squared: f64,
  pub t_mrca: f64,
  pub equation: String,
  pub num_tips: usize,
}

impl ClockModelSummary {
  pub fn new(model: &ClockModel, num_tips: usize) -> Self {
    Self {
      clock_rate: model.clock_rate(),
      intercept: model.intercept(),
      chisq: model.chisq(),
      r_val: model.r_val(),
      r_squared: model.r_squared(),
      t_mrca: model.t_mrca(),
      equation: model.equation_str(),
      num_tips,
    }
  }
}
