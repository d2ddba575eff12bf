mod entry;
mod plugin_options;
mod transform;
mod transform_request;
mod types;

pub use crate::{
  entry::EntryMap,
  plugin_options::{NormalizedPackmateOptions, PackmateOptions},
  transform::{ContentTransform, TransformContext},
  transform_request::{
    parse_query, parse_request, TransformRef, QUERY_SEPARATOR, SEGMENT_SEPARATOR,
  },
  types::{
    asset_source::{AssetSource, AssetStore},
    build_summary::{AssetStat, BuildSummary},
    chunk_identity::ChunkIdentity,
    compilation::{Compilation, CompilationRecords, CHUNK_ID_MARKER},
  },
};
