mod emit_dedup;
mod plugin;
mod report;
mod rewrite_entries;
mod telemetry;
mod transforms;
mod utils;

pub use crate::{
  emit_dedup::EmitDedup,
  plugin::Packmate,
  report::render_report,
  rewrite_entries::{rewrite_entries, ASSET_TRANSFORM, PUG_TRANSFORM, STYLUS_TRANSFORM},
  telemetry::TelemetryLogger,
  transforms::AssetPassthrough,
};
pub use packmate_common::*;
pub use packmate_error::{BuildError, BuildResult};
