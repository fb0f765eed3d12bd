use crate::io::csv::{get_col_name, guess_csv_delimiter};
use crate::io::file::open_file_or_stdin;
use crate::make_internal_report;
use chrono::{Datelike, NaiveDate};
use csv::{ReaderBuilder as CsvReaderBuilder, StringRecord, Trim};
use eyre::{eyre, Report, WrapErr};
use itertools::Itertools;
use log::warn;
use serde::{Deserialize, Serialize};
use std::path::Path;

const NAME_COLUMNS: &[&str] = &["name", "strain", "accession"];
const DATE_COLUMNS: &[&str] = &["date", "numdate"];
const DIV_COLUMNS: &[&str] = &["divergence", "div", "distance"];

/// One tip of the tree: its sampling date (as year fraction) and its divergence from the root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RttRecord {
  pub name: String,
  pub date: f64,
  pub divergence: f64,
}

/// Column names requested by the user. `None` means autodetect from the known names.
#[derive(Clone, Debug, Default)]
pub struct RttColumns {
  pub name: Option<String>,
  pub date: Option<String>,
  pub divergence: Option<String>,
}

/// Reads a table of tip dates and root-to-tip divergences. Rows with missing or unparseable values are skipped.
pub fn read_rtt_table(filepath: impl AsRef<Path>, columns: &RttColumns) -> Result<Vec<RttRecord>, Report> {
  let filepath = filepath.as_ref();
  let file =
    open_file_or_stdin(&Some(filepath)).wrap_err_with(|| format!("When reading file: '{}'", filepath.display()))?;
  let delimiter = guess_csv_delimiter(filepath)
    .wrap_err_with(|| format!("When guessing CSV delimiter for '{}'", filepath.display()))?;

  let mut reader = CsvReaderBuilder::new()
    .trim(Trim::All)
    .delimiter(delimiter)
    .from_reader(file);

  let headers = reader
    .headers()
    .map_err(|err| eyre!("{err}"))
    .wrap_err_with(|| format!("When reading header row of '{}'", filepath.display()))?
    .iter()
    .map(|header| header.trim_start_matches('#').trim_end_matches('#').to_owned())
    .collect_vec();

  let name_idx = get_col_name(&headers, NAME_COLUMNS, &columns.name)
    .wrap_err_with(|| format!("When detecting name column in '{}'", filepath.display()))?;
  let date_idx = get_col_name(&headers, DATE_COLUMNS, &columns.date)
    .wrap_err_with(|| format!("When detecting date column in '{}'", filepath.display()))?;
  let div_idx = get_col_name(&headers, DIV_COLUMNS, &columns.divergence)
    .wrap_err_with(|| format!("When detecting divergence column in '{}'", filepath.display()))?;

  let mut records = vec![];
  for (index, record) in reader.records().enumerate() {
    let record = record.wrap_err_with(|| format!("When reading row {index} of '{}'", filepath.display()))?;
    match convert_record(index, &record, name_idx, date_idx, div_idx)? {
      Some(record) => records.push(record),
      None => warn!("Row {index} of '{}': missing or unparseable date or divergence. Skipping.", filepath.display()),
    }
  }
  Ok(records)
}

fn convert_record(
  index: usize,
  record: &StringRecord,
  name_idx: usize,
  date_idx: usize,
  div_idx: usize,
) -> Result<Option<RttRecord>, Report> {
  let get = |idx: usize| {
    record
      .get(idx)
      .ok_or_else(|| make_internal_report!("Row '{index}': Unable to get column with index '{idx}'"))
  };

  let name = get(name_idx)?.to_owned();
  let date = read_date(get(date_idx)?);
  let divergence = get(div_idx)?.parse::<f64>().ok().filter(|div| div.is_finite());

  Ok(date.zip(divergence).map(|(date, divergence)| RttRecord {
    name,
    date,
    divergence,
  }))
}

/// Accepts year fractions (`2012.15`) and ISO dates (`2012-02-24`). Calendar dates map to the middle of the day.
pub fn read_date(date_str: &str) -> Option<f64> {
  if let Ok(year_frac) = date_str.parse::<f64>() {
    return year_frac.is_finite().then_some(year_frac);
  }
  let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").ok()?;
  let year_start = NaiveDate::from_ymd_opt(date.year(), 1, 1)?;
  let next_year_start = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)?;
  let days_in_year = next_year_start.signed_duration_since(year_start).num_days() as f64;
  let days_from_year_start = date.signed_duration_since(year_start).num_days() as f64;
  Some(date.year() as f64 + (days_from_year_start + 0.5) / days_in_year)
}
