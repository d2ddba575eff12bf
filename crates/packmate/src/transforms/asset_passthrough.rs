use arcstr::ArcStr;
use packmate_common::{AssetSource, AssetStore, ContentTransform, TransformContext};
use packmate_error::BuildResult;
use packmate_utils::xxhash::xxhash_hex;

/// Keeps an entry asset byte-identical to its input: whatever the normal
/// toolchain renders for the entry is overwritten with the original raw
/// bytes at emit time, while importing script code sees the content digest
/// as the module value.
#[derive(Debug, Default)]
pub struct AssetPassthrough {
  pending: Vec<PendingReplacement>,
}

#[derive(Debug)]
struct PendingReplacement {
  entry: ArcStr,
  content: Vec<u8>,
}

impl ContentTransform for AssetPassthrough {
  fn raw(&self) -> bool {
    true
  }

  fn transform(&mut self, content: &[u8], ctx: &mut TransformContext) -> BuildResult<String> {
    let entry = ctx
      .query
      .get("entry")
      .ok_or_else(|| anyhow::anyhow!("asset transform requires an `entry` query parameter"))?;
    let digest = xxhash_hex(content);
    self
      .pending
      .push(PendingReplacement { entry: ArcStr::from(entry.as_str()), content: content.to_vec() });
    Ok(format!("module.exports = {digest:?};"))
  }
}

impl AssetPassthrough {
  /// Applies the replacements queued since the last emit, then forgets them.
  /// An entry with no asset in the outgoing set is skipped.
  pub fn apply_pending(&mut self, assets: &mut AssetStore) {
    for replacement in self.pending.drain(..) {
      if let Some(source) = assets.get_mut(replacement.entry.as_str()) {
        *source = AssetSource::Raw(replacement.content);
      }
    }
  }
}
