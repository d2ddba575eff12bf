use xxhash_rust::xxh3::xxh3_128;

/// Digest of a content buffer, rendered as 32 lowercase hex digits so it can
/// be embedded verbatim in generated module code.
pub fn xxhash_hex(input: &[u8]) -> String {
  format!("{:032x}", xxh3_128(input))
}

#[test]
fn test_xxhash_hex() {
  let digest = xxhash_hex(b"hello");
  assert_eq!(digest.len(), 32);
  assert!(digest.bytes().all(|b| b.is_ascii_hexdigit()));
  assert_eq!(digest, xxhash_hex(b"hello"));
  assert_ne!(digest, xxhash_hex(b"hello!"));
  assert_ne!(xxhash_hex(b""), xxhash_hex(b"\0"));
}
