const UNITS: [(&str, u64); 4] =
  [("GB", 1 << 30), ("MB", 1 << 20), ("KB", 1 << 10), ("B", 1)];

/// Renders a byte count with the largest unit whose scaled value stays >= 1,
/// two decimal places. Zero falls through to `0.00 B`.
pub fn format_bytes(bytes: u64) -> String {
  for (unit, divisor) in UNITS {
    let size = bytes as f64 / divisor as f64;
    if size >= 1.0 {
      return format!("{size:.2} {unit}");
    }
  }
  "0.00 B".to_string()
}
