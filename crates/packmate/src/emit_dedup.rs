use arcstr::ArcStr;
use packmate_common::{ChunkIdentity, Compilation};
use rustc_hash::FxHashMap;

/// Drops outgoing assets whose chunk identity has not changed since the
/// previous emit cycle, so the host does not rewrite byte-identical files.
///
/// The identity cache lives on the instance and dies with it. The first
/// cycle after construction always emits everything; no suppressed content
/// is retained or replayed.
#[derive(Debug, Default)]
pub struct EmitDedup {
  cache: FxHashMap<ArcStr, ChunkIdentity>,
}

impl EmitDedup {
  /// Suppression pass for one emit cycle. The cache is replaced wholesale
  /// with the identities observed this cycle, so names absent from the
  /// current records are forgotten.
  pub fn on_emit(&mut self, compilation: &mut Compilation) {
    let current: FxHashMap<ArcStr, ChunkIdentity> = compilation
      .records
      .chunk_ids_by_name
      .keys()
      .filter_map(|name| {
        compilation.records.chunk_identity(name).map(|identity| (name.clone(), identity))
      })
      .collect();

    for (name, identity) in &current {
      if self.cache.get(name) == Some(identity) {
        compilation.assets.shift_remove(name.as_str());
      }
    }

    self.cache = current;
  }
}
