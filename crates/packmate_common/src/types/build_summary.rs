use std::time::Duration;

use arcstr::ArcStr;
use packmate_error::BuildError;

/// Result summary of one finished build cycle, as reported by the host on
/// its `done` event.
#[derive(Debug, Default)]
pub struct BuildSummary {
  pub hash: ArcStr,
  pub duration: Duration,
  pub assets: Vec<AssetStat>,
  pub errors: BuildError,
}

/// Name and size of one emitted asset.
#[derive(Debug, Clone)]
pub struct AssetStat {
  pub name: String,
  pub size: u64,
}
