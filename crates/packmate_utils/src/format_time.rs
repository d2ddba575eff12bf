const ONE_HOUR_MS: u64 = 60 * 60 * 1000;

/// Renders elapsed milliseconds as a zero-padded `MM:SS` stamp. Anything past
/// one hour saturates to the literal `HOURS`.
pub fn format_time(ms: u64) -> String {
  if ms > ONE_HOUR_MS {
    return "HOURS".to_string();
  }
  let minutes = ms / 1000 / 60;
  let seconds = (ms / 1000) % 60;
  format!("{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
  use super::format_time;

  #[test]
  fn zero_pads_minutes_and_seconds() {
    assert_eq!(format_time(0), "00:00");
    assert_eq!(format_time(999), "00:00");
    assert_eq!(format_time(1000), "00:01");
    assert_eq!(format_time(65_000), "01:05");
    assert_eq!(format_time(59 * 60 * 1000), "59:00");
  }

  #[test]
  fn saturates_past_one_hour() {
    assert_eq!(format_time(60 * 60 * 1000), "60:00");
    assert_eq!(format_time(60 * 60 * 1000 + 1), "HOURS");
    assert_eq!(format_time(u64::MAX), "HOURS");
  }
}
