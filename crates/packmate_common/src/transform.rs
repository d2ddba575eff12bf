use std::path::PathBuf;

use packmate_error::BuildResult;
use packmate_utils::indexmap::FxIndexMap;

/// Per-invocation context handed to a content transform by the module
/// pipeline.
#[derive(Debug, Default)]
pub struct TransformContext {
  pub resource_path: PathBuf,
  /// Query parameters parsed from the transform's request segment.
  pub query: FxIndexMap<String, String>,
  pub minimize: bool,
  dependencies: Vec<PathBuf>,
}

impl TransformContext {
  pub fn new(resource_path: impl Into<PathBuf>) -> Self {
    Self { resource_path: resource_path.into(), ..Self::default() }
  }

  /// Registers a file the transform output depends on, keeping duplicates
  /// out so watch mode does not track the same path twice.
  pub fn add_dependency(&mut self, path: impl Into<PathBuf>) {
    let path = path.into();
    if !self.dependencies.contains(&path) {
      self.dependencies.push(path);
    }
  }

  pub fn dependencies(&self) -> &[PathBuf] {
    &self.dependencies
  }
}

/// A stateless content-to-content transform sitting in front of the module
/// pipeline. Implementations own no caches and introduce no concurrency.
pub trait ContentTransform {
  /// Whether the transform accepts raw bytes rather than UTF-8 text.
  fn raw(&self) -> bool {
    false
  }

  /// Produces the module body replacing `content`.
  fn transform(&mut self, content: &[u8], ctx: &mut TransformContext) -> BuildResult<String>;
}
