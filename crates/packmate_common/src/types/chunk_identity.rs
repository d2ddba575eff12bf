use arcstr::ArcStr;

/// One named output's build identity at a point in time. `id` identifies the
/// chunk grouping, `hash` its content; two identities are equal iff both
/// fields match exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkIdentity {
  pub id: String,
  pub hash: ArcStr,
}
