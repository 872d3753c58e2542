//! Streaming pack: source files -> archive
//!
//! The encoder writes one entry per source, in the order supplied. Which
//! files to include and how to order them is the caller's decision; the
//! encoder only sees already-resolved `(name, declared length, reader)`
//! triples and an open sink.

use crate::config::ArchiveConfig;
use crate::constants::COPY_BUF_SIZE;
use crate::error::PackError;
use crate::record::{encode_record, EntryRecord};
use crate::transform::transform;
use std::io::{ErrorKind, Read, Write};

#[cfg(feature = "logging")]
use tracing::debug;

/// One file to be packed: name, declared byte length, and its reader
pub struct PackSource<R> {
    /// Entry name recorded in the archive
    pub name: String,

    /// Declared byte length; the reader must yield exactly this many bytes
    pub len: u64,

    /// Byte source for the payload
    pub reader: R,
}

impl<R: Read> PackSource<R> {
    /// Create a new pack source
    pub fn new(name: impl Into<String>, len: u64, reader: R) -> Self {
        Self {
            name: name.into(),
            len,
            reader,
        }
    }
}

/// Pack every source into `sink`, returning the number of entries written
///
/// Any failure aborts the whole run; an archive that stops short of the
/// full source list is not valid and is reported as an error, never as a
/// smaller success.
pub fn pack<R: Read, W: Write>(
    sources: Vec<PackSource<R>>,
    sink: &mut W,
    config: &ArchiveConfig,
) -> Result<u64, PackError> {
    let mut count = 0u64;
    for source in sources {
        pack_entry(source, sink, config)?;
        count += 1;
    }
    Ok(count)
}

/// Pack a single entry: fixed-width record, then the transformed payload
///
/// The record is encoded (and the name checked against the record width)
/// before anything is written, so an oversized name leaves the sink
/// untouched. The payload is streamed through a bounded buffer and must
/// match the declared length exactly: a source that ends early or keeps
/// going past `len` is a `SourceRead` error, not a silently adjusted entry.
pub fn pack_entry<R: Read, W: Write>(
    source: PackSource<R>,
    sink: &mut W,
    config: &ArchiveConfig,
) -> Result<(), PackError> {
    let record = EntryRecord::new(source.name, source.len);
    let block = encode_record(&record, config)?;

    sink.write_all(&block)
        .map_err(|e| PackError::SinkWrite(e.to_string()))?;

    let mut reader = source.reader;
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut remaining = source.len;

    while remaining > 0 {
        let want = remaining.min(COPY_BUF_SIZE as u64) as usize;
        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(PackError::SourceRead(format!(
                    "{}: source ended after {} of {} declared bytes",
                    record.name,
                    source.len - remaining,
                    source.len
                )));
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(PackError::SourceRead(e.to_string())),
        };

        transform(&mut buf[..n], config.key);
        sink.write_all(&buf[..n])
            .map_err(|e| PackError::SinkWrite(e.to_string()))?;
        remaining -= n as u64;
    }

    // A source longer than declared would desynchronize the archive just as
    // badly as a short one; probe one byte past the declared length.
    match reader.read(&mut buf[..1]) {
        Ok(0) => {}
        Ok(_) => {
            return Err(PackError::SourceRead(format!(
                "{}: source longer than declared {} bytes",
                record.name, source.len
            )));
        }
        Err(e) if e.kind() == ErrorKind::Interrupted => {}
        Err(e) => return Err(PackError::SourceRead(e.to_string())),
    }

    #[cfg(feature = "logging")]
    debug!(name = %record.name, size = record.size, "packed entry");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn source(name: &str, content: &[u8]) -> PackSource<Cursor<Vec<u8>>> {
        PackSource::new(name, content.len() as u64, Cursor::new(content.to_vec()))
    }

    #[test]
    fn test_pack_single_entry_layout() {
        let config = ArchiveConfig::default().with_record_width(8);
        let mut sink = Vec::new();

        pack(vec![source("a.txt", b"hi")], &mut sink, &config).unwrap();

        assert_eq!(&sink[..8], b"a.txt 2 ");
        assert_eq!(&sink[8..], &[b'h' ^ 0x11, b'i' ^ 0x11]);
    }

    #[test]
    fn test_entries_are_back_to_back() {
        let config = ArchiveConfig::default();
        let mut sink = Vec::new();

        let count = pack(
            vec![source("one.txt", b"abc"), source("two.txt", b"defgh")],
            &mut sink,
            &config,
        )
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(sink.len(), 2 * config.record_width + 3 + 5);
        // Second record starts immediately after the first payload
        assert!(sink[config.record_width + 3..].starts_with(b"two.txt 5"));
    }

    #[test]
    fn test_zero_length_entry() {
        let config = ArchiveConfig::default();
        let mut sink = Vec::new();

        pack(vec![source("empty.txt", b"")], &mut sink, &config).unwrap();

        assert_eq!(sink.len(), config.record_width);
        assert!(sink.starts_with(b"empty.txt 0"));
    }

    #[test]
    fn test_overflow_writes_nothing() {
        let config = ArchiveConfig::default().with_record_width(8);
        let mut sink = Vec::new();

        let result = pack(vec![source("bee.txt", b"yo!")], &mut sink, &config);

        assert!(matches!(result, Err(PackError::RecordOverflow { .. })));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_short_source_is_detected() {
        let config = ArchiveConfig::default();
        let mut sink = Vec::new();
        // Declares 10 bytes but the reader only has 4
        let short = PackSource::new("short.bin", 10, Cursor::new(b"abcd".to_vec()));

        let result = pack(vec![short], &mut sink, &config);
        assert!(matches!(result, Err(PackError::SourceRead(_))));
    }

    #[test]
    fn test_long_source_is_detected() {
        let config = ArchiveConfig::default();
        let mut sink = Vec::new();
        let long = PackSource::new("long.bin", 2, Cursor::new(b"abcd".to_vec()));

        let result = pack(vec![long], &mut sink, &config);
        assert!(matches!(result, Err(PackError::SourceRead(_))));
    }

    #[test]
    fn test_payload_larger_than_copy_buffer() {
        let config = ArchiveConfig::default();
        let content: Vec<u8> = (0..3 * COPY_BUF_SIZE + 17).map(|i| i as u8).collect();
        let mut sink = Vec::new();

        pack(vec![source("big.bin", &content)], &mut sink, &config).unwrap();

        assert_eq!(sink.len(), config.record_width + content.len());
        for (i, b) in sink[config.record_width..].iter().enumerate() {
            assert_eq!(*b, content[i] ^ config.key);
        }
    }
}
