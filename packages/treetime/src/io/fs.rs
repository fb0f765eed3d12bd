use eyre::{eyre, Report, WrapErr};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::{env, fs};

pub fn absolute_path(path: impl AsRef<Path>) -> Result<PathBuf, Report> {
  let path = path.as_ref();

  let absolute_path = if path.is_absolute() {
    path.to_path_buf()
  } else {
    env::current_dir()?.join(path)
  };

  Ok(absolute_path)
}

pub fn ensure_dir(filepath: impl AsRef<Path>) -> Result<(), Report> {
  let filepath = filepath.as_ref();
  {
    let parent_dir = filepath
      .parent()
      .ok_or_else(|| eyre!("Unable to get parent path for '{}'", filepath.display()))?;

    let parent_path = absolute_path(parent_dir)?;

    fs::create_dir_all(&parent_path).wrap_err_with(|| format!("When creating directory '{}'", parent_path.display()))
  }
  .wrap_err_with(|| format!("When ensuring parent directory for '{}'", filepath.display()))
}

pub fn filename_maybe(filepath: impl AsRef<Path>) -> Option<String> {
  filepath.as_ref().file_name()?.to_str()?.to_owned().into()
}

pub fn extension(filepath: impl AsRef<Path>) -> Option<String> {
  let filepath = filepath.as_ref();
  filepath.extension().and_then(OsStr::to_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use rstest::rstest;

  #[rstest]
  #[case("dates.csv", Some("csv"))]
  #[case("path/to/rtt.tsv", Some("tsv"))]
  #[case("archive.tar.gz", Some("gz"))]
  #[case("noext", None)]
  fn test_extension(#[case] path: &str, #[case] expected: Option<&str>) {
    assert_eq!(extension(path).as_deref(), expected);
  }

  #[test]
  fn ensure_dir_creates_missing_parents() -> Result<(), Report> {
    let root = tempfile::tempdir()?;
    let filepath = root.path().join("a").join("b").join("chart.txt");
    ensure_dir(&filepath)?;
    assert!(root.path().join("a").join("b").is_dir());
    Ok(())
  }
}
