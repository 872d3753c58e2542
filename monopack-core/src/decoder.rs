//! Streaming unpack: archive -> entries
//!
//! The decoder walks the archive one entry at a time: read a fixed-width
//! record, then read and transform exactly the payload length the record
//! declares. Consuming the payload before moving on is what keeps every
//! later record aligned; a decoder that only reads records would hand back
//! garbage for everything past the first entry.

use crate::config::ArchiveConfig;
use crate::error::PackError;
use crate::record::{decode_record, EntryRecord};
use crate::transform::transform;
use bytes::Bytes;
use std::io::{ErrorKind, Read};

#[cfg(feature = "logging")]
use tracing::debug;

/// One reconstructed entry: its record and the restored payload bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Decoded metadata record
    pub record: EntryRecord,

    /// Payload with the transform reversed (the original file bytes)
    pub payload: Bytes,
}

/// Lazy iterator over the entries of an archive
///
/// Yields `Result<Entry>` until clean end-of-stream. Fused after the first
/// error: the stream position is unreliable past a failure, so iteration
/// stops rather than resynchronize. Not restartable without reopening the
/// underlying reader.
pub struct Unpacker<R> {
    reader: R,
    config: ArchiveConfig,
    record_buf: Vec<u8>,
    done: bool,
}

/// Start unpacking `reader` with the given configuration
///
/// The key must match the one used at pack time; the archive carries no key
/// material, so agreement is an out-of-band contract.
pub fn unpack<R: Read>(reader: R, config: &ArchiveConfig) -> Unpacker<R> {
    Unpacker::new(reader, config)
}

impl<R: Read> Unpacker<R> {
    /// Create an unpacker positioned at the start of an archive
    pub fn new(reader: R, config: &ArchiveConfig) -> Self {
        Self {
            reader,
            config: *config,
            record_buf: vec![0u8; config.record_width],
            done: false,
        }
    }

    /// Collect every remaining entry, stopping at the first error
    pub fn collect_entries(self) -> Result<Vec<Entry>, PackError> {
        self.collect()
    }

    fn next_entry(&mut self) -> Result<Option<Entry>, PackError> {
        let width = self.config.record_width;

        // Zero bytes at a record boundary is the normal end of the archive;
        // anything between 1 and width-1 is a torn trailing record.
        let filled = self.read_up_to(width)?;
        if filled == 0 {
            return Ok(None);
        }
        if filled < width {
            return Err(PackError::TruncatedArchive {
                expected: width,
                actual: filled,
            });
        }

        let record = decode_record(&self.record_buf, &self.config)?;

        let size = usize::try_from(record.size).map_err(|_| {
            PackError::MalformedRecord(format!("payload size {} exceeds address space", record.size))
        })?;

        let mut payload = vec![0u8; size];
        let got = read_full(&mut self.reader, &mut payload)?;
        if got < size {
            return Err(PackError::TruncatedArchive {
                expected: size,
                actual: got,
            });
        }

        transform(&mut payload, self.config.key);

        #[cfg(feature = "logging")]
        debug!(name = %record.name, size = record.size, "unpacked entry");

        Ok(Some(Entry {
            record,
            payload: Bytes::from(payload),
        }))
    }

    fn read_up_to(&mut self, width: usize) -> Result<usize, PackError> {
        let mut filled = 0;
        while filled < width {
            match self.reader.read(&mut self.record_buf[filled..width]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(PackError::SourceRead(e.to_string())),
            }
        }
        Ok(filled)
    }
}

fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, PackError> {
    let mut got = 0;
    while got < buf.len() {
        match reader.read(&mut buf[got..]) {
            Ok(0) => break,
            Ok(n) => got += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(PackError::SourceRead(e.to_string())),
        }
    }
    Ok(got)
}

impl<R: Read> Iterator for Unpacker<R> {
    type Item = Result<Entry, PackError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_entry() {
            Ok(Some(entry)) => Some(Ok(entry)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
