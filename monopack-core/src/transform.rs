//! Keyed per-byte payload transform
//!
//! XOR with a single key byte, applied in place. Self-inverse: applying it
//! twice with the same key restores the input, so the same routine serves
//! both pack and unpack. Operates on raw bytes and is binary-safe.
//!
//! This is obfuscation, not encryption.

/// Transform `buf` in place with `key`
pub fn transform(buf: &mut [u8], key: u8) {
    for b in buf.iter_mut() {
        *b ^= key;
    }
}
