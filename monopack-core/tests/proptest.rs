//! Property-based tests using proptest

use monopack_core::{
    decoder::unpack,
    encoder::{pack, PackSource},
    record::{decode_record, encode_record, EntryRecord},
    transform::transform,
    ArchiveConfig,
};
use proptest::prelude::*;
use std::io::Cursor;

fn entry_name() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._-]{1,20}"
}

proptest! {
    #[test]
    fn prop_round_trip_pack_unpack(
        files in prop::collection::vec(
            (entry_name(), prop::collection::vec(any::<u8>(), 0..512)),
            0..8
        ),
        key in any::<u8>()
    ) {
        let config = ArchiveConfig::default().with_key(key);

        let sources: Vec<_> = files
            .iter()
            .map(|(name, content)| {
                PackSource::new(name.clone(), content.len() as u64, Cursor::new(content.clone()))
            })
            .collect();

        let mut sink = Vec::new();
        let count = pack(sources, &mut sink, &config).unwrap();
        prop_assert_eq!(count as usize, files.len());

        let entries = unpack(Cursor::new(sink), &config).collect_entries().unwrap();
        prop_assert_eq!(entries.len(), files.len());

        for (entry, (name, content)) in entries.iter().zip(&files) {
            prop_assert_eq!(&entry.record.name, name);
            prop_assert_eq!(entry.payload.as_ref(), &content[..]);
        }
    }

    #[test]
    fn prop_transform_is_involution(
        data in prop::collection::vec(any::<u8>(), 0..1024),
        key in any::<u8>()
    ) {
        let mut buf = data.clone();
        transform(&mut buf, key);
        transform(&mut buf, key);
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn prop_encoded_record_has_fixed_width(
        name in entry_name(),
        size in any::<u64>()
    ) {
        let config = ArchiveConfig::default();
        let block = encode_record(&EntryRecord::new(name, size), &config).unwrap();
        prop_assert_eq!(block.len(), config.record_width);
    }

    #[test]
    fn prop_record_round_trip(
        name in entry_name(),
        size in any::<u64>()
    ) {
        let config = ArchiveConfig::default();
        let record = EntryRecord::new(name, size);
        let block = encode_record(&record, &config).unwrap();
        let decoded = decode_record(&block, &config).unwrap();
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn prop_decode_record_never_panics(
        block in prop::collection::vec(any::<u8>(), 0..256)
    ) {
        let config = ArchiveConfig::default();
        let result = decode_record(&block, &config);
        prop_assert!(result.is_ok() || result.is_err());
    }

    #[test]
    fn prop_unpack_never_panics(
        data in prop::collection::vec(any::<u8>(), 0..4096)
    ) {
        let config = ArchiveConfig::default();
        for entry in unpack(Cursor::new(data), &config) {
            if entry.is_err() {
                break;
            }
        }
    }

    #[test]
    fn prop_unpack_of_random_data_never_succeeds_partially_silently(
        data in prop::collection::vec(any::<u8>(), 1..99)
    ) {
        // Fewer bytes than one record is always a truncation, never success
        let config = ArchiveConfig::default();
        let result = unpack(Cursor::new(data), &config).collect_entries();
        prop_assert!(result.is_err());
    }
}
