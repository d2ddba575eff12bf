pub mod asset_source;
pub mod build_summary;
pub mod chunk_identity;
pub mod compilation;
