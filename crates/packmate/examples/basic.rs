use std::time::Duration;

use arcstr::ArcStr;

use packmate::{
  AssetSource, AssetStat, BuildError, BuildSummary, Compilation, EntryMap, Packmate,
  PackmateOptions,
};

#[tokio::main]
async fn main() {
  let mut plugin = Packmate::new(PackmateOptions { stylus: Some(true), ..Default::default() });

  let mut entries = EntryMap::default();
  entries.insert("main.js".to_string(), "./src/main.js".to_string());
  entries.insert("theme".to_string(), "./src/theme.styl".to_string());
  plugin.attach(&mut entries, false);
  eprintln!("entries after rewrite: {entries:#?}");

  // one compile -> emit -> done cycle, standing in for the host bundler
  plugin.on_compile();
  let mut compilation = Compilation::default();
  compilation.records.chunk_ids_by_name.insert(ArcStr::from("main"), 0);
  compilation.records.chunk_hashes.insert("c0".to_string(), ArcStr::from("9f2c"));
  compilation
    .assets
    .insert(ArcStr::from("main"), AssetSource::Rendered("console.log(1);".to_string()));
  plugin.on_emit(&mut compilation).expect("emit hooks");
  plugin.on_done();

  let summary = BuildSummary {
    hash: ArcStr::from("9f2c"),
    duration: Duration::from_millis(184),
    assets: vec![AssetStat { name: "main".to_string(), size: 15 }],
    errors: BuildError::default(),
  };
  if let Some(report) = plugin.render_report(&summary) {
    eprintln!("{report}");
  }

  plugin.shutdown();
}
