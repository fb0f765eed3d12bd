use crate::io::file::is_path_stdin;
use crate::io::fs::extension;
use crate::make_error;
use eyre::{eyre, Report};
use std::path::Path;

/// Find index of a column, either the one the user asked for, or the first header matching one of the known names
pub fn get_col_name(headers: &[String], possible_names: &[&str], provided_name: &Option<String>) -> Result<usize, Report> {
  if let Some(provided_name) = provided_name {
    match headers.iter().position(|header| header == provided_name) {
      Some(idx) => Ok(idx),
      None => make_error!(
        "Unable to find column '{provided_name}'. Available columns are: {}",
        headers.join(", ")
      ),
    }
  } else {
    headers
      .iter()
      .position(|header| possible_names.contains(&header.as_str()))
      .ok_or_else(|| {
        eyre!(
          "Unable to find column:\n  Looking for: {}\n  Available columns are: {}",
          possible_names.join(", "),
          headers.join(", ")
        )
      })
  }
}

pub fn guess_csv_delimiter(filepath: impl AsRef<Path>) -> Result<u8, Report> {
  let filepath = filepath.as_ref();
  if is_path_stdin(filepath) {
    return Ok(b',');
  }
  let ext = extension(filepath)
    .ok_or_else(|| eyre!("Unable to detect file extension: '{}'", filepath.display()))?
    .to_lowercase();
  match ext.as_str() {
    "csv" => Ok(b','),
    "tsv" => Ok(b'\t'),
    "ssv" => Ok(b';'),
    _ => make_error!("Unknown file extension: '{ext}'. Expected one of: csv, tsv, ssv"),
  }
}
