use ansi_term::Colour;
use packmate_common::BuildSummary;
use packmate_utils::format_bytes::format_bytes;

/// Gutter keeping asset rows aligned under the stamp column.
const GUTTER: &str = "--:-- ";

/// Renders the operator-facing report for one finished build: a stamp plus
/// hash/duration header, one aligned row per emitted asset, then any error
/// messages verbatim, one per line. No side effects.
pub fn render_report(stamp: &str, summary: &BuildSummary) -> String {
  let dim = Colour::White.dimmed();

  let mut left = 0;
  let mut right = 0;
  let mut rows = Vec::with_capacity(summary.assets.len());
  for asset in &summary.assets {
    let size = format_bytes(asset.size);
    left = left.max(asset.name.len());
    right = right.max(size.len());
    rows.push((asset.name.as_str(), size));
  }

  let header = format!("{} in {} ms", summary.hash, summary.duration.as_millis());
  let mut out = format!("{} {}", dim.paint(stamp), dim.paint(header));

  for (name, size) in rows {
    let name_pad = left - name.len();
    let size_pad = right - size.len();
    out.push('\n');
    out.push_str(&format!(
      "{}{}{:name_pad$} {} {:size_pad$}{}",
      dim.paint(GUTTER),
      Colour::Green.paint(name),
      "",
      dim.paint("|"),
      "",
      size,
    ));
  }

  if !summary.errors.is_empty() {
    out.push('\n');
    out.push_str(&summary.errors.to_string());
  }

  out
}
