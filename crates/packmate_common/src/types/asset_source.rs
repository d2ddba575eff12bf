use arcstr::ArcStr;
use packmate_utils::indexmap::FxIndexMap;

/// Outgoing assets keyed by output name, in emission order.
pub type AssetStore = FxIndexMap<ArcStr, AssetSource>;

/// Content of one outgoing asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
  /// Code produced by the normal toolchain.
  Rendered(String),
  /// Raw bytes that bypass the toolchain untouched.
  Raw(Vec<u8>),
}

impl AssetSource {
  pub fn as_bytes(&self) -> &[u8] {
    match self {
      Self::Rendered(code) => code.as_bytes(),
      Self::Raw(bytes) => bytes,
    }
  }

  pub fn len(&self) -> usize {
    self.as_bytes().len()
  }

  pub fn is_empty(&self) -> bool {
    self.as_bytes().is_empty()
  }
}
