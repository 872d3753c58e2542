//! Fuzzing placeholder for the monopack decoder
//!
//! To use with cargo-fuzz:
//! 1. Install cargo-fuzz: cargo install cargo-fuzz
//! 2. Run fuzzer: cargo fuzz run fuzz_unpack

use monopack_core::ArchiveConfig;

pub fn fuzz_decode_record(data: &[u8]) {
    use monopack_core::record::decode_record;

    // Try with the legacy width and with a width matching the input;
    // neither must panic
    let _ = decode_record(data, &ArchiveConfig::default());
    if !data.is_empty() {
        let config = ArchiveConfig::default().with_record_width(data.len());
        let _ = decode_record(data, &config);
    }
}

pub fn fuzz_unpack(data: &[u8]) {
    use monopack_core::decoder::unpack;
    use std::io::Cursor;

    // Walk the whole stream - should never panic, only error
    for entry in unpack(Cursor::new(data.to_vec()), &ArchiveConfig::default()) {
        if entry.is_err() {
            break;
        }
    }
}
