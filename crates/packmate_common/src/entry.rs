use packmate_utils::indexmap::FxIndexMap;

/// Entry names mapped to module request strings, in declaration order.
pub type EntryMap = FxIndexMap<String, String>;
