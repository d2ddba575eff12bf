use arcstr::ArcStr;
use packmate_utils::indexmap::FxIndexMap;
use rustc_hash::FxHashMap;

use crate::{AssetStore, ChunkIdentity};

/// Marker prefixing numeric chunk ids in the hash cache (`c0`, `c17`, ...).
pub const CHUNK_ID_MARKER: char = 'c';

/// Mutable view of one emit cycle handed to plugin hooks.
#[derive(Debug, Default)]
pub struct Compilation {
  pub records: CompilationRecords,
  pub assets: AssetStore,
}

/// By-name chunk registry and content-hash cache of the host compilation.
#[derive(Debug, Default)]
pub struct CompilationRecords {
  /// Numeric chunk ids keyed by chunk name, in chunk creation order.
  pub chunk_ids_by_name: FxIndexMap<ArcStr, u32>,
  /// Content hashes keyed by marker-formatted chunk id.
  pub chunk_hashes: FxHashMap<String, ArcStr>,
}

impl CompilationRecords {
  /// Resolves a chunk name to its identity tuple. `None` when the name is
  /// unknown or no hash has been recorded for its id yet.
  pub fn chunk_identity(&self, name: &str) -> Option<ChunkIdentity> {
    let id = format!("{CHUNK_ID_MARKER}{}", self.chunk_ids_by_name.get(name)?);
    let hash = self.chunk_hashes.get(&id)?.clone();
    Some(ChunkIdentity { id, hash })
  }
}
