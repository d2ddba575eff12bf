use std::io::Write;

use packmate_common::{
  BuildSummary, Compilation, EntryMap, NormalizedPackmateOptions, PackmateOptions,
};
use packmate_error::BuildResult;

use crate::emit_dedup::EmitDedup;
use crate::rewrite_entries::rewrite_entries;
use crate::telemetry::TelemetryLogger;
use crate::transforms::AssetPassthrough;
use crate::utils::normalize_options::normalize_options;

/// The plugin suite facade. Construct one per build configuration, attach it
/// before compilation, and wire its lifecycle methods into the host's
/// `compile`, `emit` and `done` hooks. All cross-build state (the
/// emit-identity cache, the idle clock) lives on the instance.
pub struct Packmate {
  options: NormalizedPackmateOptions,
  dedup: EmitDedup,
  asset: AssetPassthrough,
  logger: Option<TelemetryLogger>,
}

impl Packmate {
  pub fn new(options: PackmateOptions) -> Self {
    Self {
      options: normalize_options(options),
      dedup: EmitDedup::default(),
      asset: AssetPassthrough::default(),
      logger: None,
    }
  }

  pub fn options(&self) -> &NormalizedPackmateOptions {
    &self.options
  }

  /// Attaches to a build: rewrites the entry map in place, once, and brings
  /// up the telemetry logger. Watch mode starts the idle clock and therefore
  /// needs a tokio runtime.
  pub fn attach(&mut self, entries: &mut EntryMap, watch: bool) {
    self.attach_with_sink(entries, watch, None);
  }

  /// `attach` with the operator output redirected, for hosts that own the
  /// terminal (and for tests). `None` keeps the default stderr sink.
  pub fn attach_with_sink(
    &mut self,
    entries: &mut EntryMap,
    watch: bool,
    sink: Option<Box<dyn Write + Send>>,
  ) {
    rewrite_entries(entries, &self.options);
    if self.options.logger {
      let mut logger = match sink {
        Some(sink) => TelemetryLogger::with_sink(watch, sink),
        None => TelemetryLogger::new(watch),
      };
      logger.attach();
      self.logger = Some(logger);
    }
  }

  /// Build cycle starting.
  pub fn on_compile(&mut self) {
    if let Some(logger) = &mut self.logger {
      logger.on_compile();
    }
  }

  /// Emit cycle: identity-based suppression first, then pending passthrough
  /// replacements, matching the order the hooks registered in. Returning
  /// signals completion to the host.
  pub fn on_emit(&mut self, compilation: &mut Compilation) -> BuildResult<()> {
    self.dedup.on_emit(compilation);
    self.asset.apply_pending(&mut compilation.assets);
    Ok(())
  }

  /// Build cycle finished.
  pub fn on_done(&mut self) {
    if let Some(logger) = &mut self.logger {
      logger.on_done();
    }
  }

  /// Formatted report for a finished build, when the logger feature is on.
  pub fn render_report(&self, summary: &BuildSummary) -> Option<String> {
    self.logger.as_ref().map(|logger| logger.render_report(summary))
  }

  /// The passthrough transform, for the host's module pipeline.
  pub fn asset_transform(&mut self) -> &mut AssetPassthrough {
    &mut self.asset
  }

  /// Final teardown: stops the idle clock so no periodic task outlives the
  /// build process's last cycle.
  pub fn shutdown(&mut self) {
    if let Some(logger) = &mut self.logger {
      logger.shutdown();
    }
  }
}

#[cfg(test)]
mod tests {
  use arcstr::ArcStr;
  use packmate_common::{AssetSource, Compilation, EntryMap, PackmateOptions};

  use super::Packmate;

  fn plugin(options: PackmateOptions) -> Packmate {
    Packmate::new(PackmateOptions { logger: Some(false), ..options })
  }

  fn cycle(id: u32, hash: &str) -> Compilation {
    let mut compilation = Compilation::default();
    compilation.records.chunk_ids_by_name.insert(ArcStr::from("main"), id);
    compilation.records.chunk_hashes.insert(format!("c{id}"), ArcStr::from(hash));
    compilation
      .assets
      .insert(ArcStr::from("main"), AssetSource::Rendered("console.log(1);".to_string()));
    compilation
  }

  #[test]
  fn attach_rewrites_entries_through_the_configured_transforms() {
    let mut plugin = plugin(PackmateOptions { stylus: Some(true), ..Default::default() });
    let mut entries: EntryMap = [
      ("main".to_string(), "app.js".to_string()),
      ("theme".to_string(), "theme.styl".to_string()),
    ]
    .into_iter()
    .collect();

    plugin.attach(&mut entries, false);

    assert_eq!(entries["main"], "packmate/asset?entry=main!app.js");
    assert_eq!(entries["theme"], "packmate/asset?entry=theme!packmate/stylus!theme.styl");
  }

  #[test]
  fn unchanged_output_is_suppressed_on_the_second_cycle() {
    let mut plugin = plugin(PackmateOptions::default());

    let mut first = cycle(1, "abc");
    plugin.on_emit(&mut first).expect("emit hooks");
    assert!(first.assets.contains_key("main"));

    let mut second = cycle(1, "abc");
    plugin.on_emit(&mut second).expect("emit hooks");
    assert!(!second.assets.contains_key("main"));
  }

  #[test]
  fn passthrough_replacements_apply_to_surviving_assets() {
    use packmate_common::{ContentTransform, TransformContext};

    let mut plugin = plugin(PackmateOptions::default());
    let mut ctx = TransformContext::new("logo.svg");
    ctx.query.insert("entry".to_string(), "main".to_string());
    plugin.asset_transform().transform(b"<svg/>", &mut ctx).expect("transform succeeds");

    let mut compilation = cycle(1, "abc");
    plugin.on_emit(&mut compilation).expect("emit hooks");
    assert_eq!(compilation.assets["main"], AssetSource::Raw(b"<svg/>".to_vec()));
  }

  #[test]
  fn logger_disabled_means_no_report() {
    let mut plugin = plugin(PackmateOptions::default());
    let mut entries = EntryMap::default();
    plugin.attach(&mut entries, false);
    assert!(plugin.render_report(&packmate_common::BuildSummary::default()).is_none());
  }
}
