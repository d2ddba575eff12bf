pub mod format_bytes;
pub mod format_time;
pub mod indexmap;
pub mod xxhash;
