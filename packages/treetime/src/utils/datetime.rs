use chrono::{DateTime, Utc};

pub fn date_now() -> DateTime<Utc> {
  Utc::now()
}

pub fn date_format_precise(datetime: &DateTime<Utc>) -> String {
  datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use pretty_assertions::assert_eq;

  #[test]
  fn formats_with_milliseconds() {
    let date = Utc.with_ymd_and_hms(2021, 3, 14, 15, 9, 26).unwrap();
    assert_eq!(date_format_precise(&date), "2021-03-14 15:09:26.000");
  }
}
