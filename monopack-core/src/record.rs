//! Fixed-width metadata record codec
//!
//! Every entry in an archive starts with a record of exactly
//! `config.record_width` bytes: the entry name, one delimiter byte, the
//! payload size in decimal ASCII, then filler bytes out to the fixed width.
//! The constant width is what lets the decoder read a record without any
//! length prefix, so encode and decode must agree on it exactly.

use crate::config::ArchiveConfig;
use crate::constants::{RECORD_DELIMITER, RECORD_FILLER};
use crate::error::PackError;
use alloc::format;
use alloc::string::{String, ToString};
use bytes::{BufMut, Bytes, BytesMut};
use serde::{Deserialize, Serialize};

/// Metadata for one archive entry: original file name and payload size
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Original file name
    pub name: String,

    /// Original file length in bytes
    pub size: u64,
}

impl EntryRecord {
    /// Create a new entry record
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
        }
    }

    /// Length of the unpadded `"{name} {size}"` form in bytes
    pub fn encoded_len(&self) -> usize {
        self.name.len() + 1 + decimal_width(self.size)
    }
}

/// Encode a record into exactly `config.record_width` bytes
///
/// Layout: `name`, one delimiter byte, `size` as decimal ASCII with no
/// leading zeros, right-padded with filler. Fails with `RecordOverflow`
/// before producing any bytes if the unpadded form is wider than the record.
pub fn encode_record(record: &EntryRecord, config: &ArchiveConfig) -> Result<Bytes, PackError> {
    validate_name(&record.name)?;

    if record.encoded_len() > config.record_width {
        return Err(PackError::RecordOverflow {
            name: record.name.clone(),
            width: config.record_width,
        });
    }

    let mut buf = BytesMut::with_capacity(config.record_width);
    buf.put_slice(record.name.as_bytes());
    buf.put_u8(RECORD_DELIMITER);
    buf.put_slice(record.size.to_string().as_bytes());
    buf.resize(config.record_width, RECORD_FILLER);

    Ok(buf.freeze())
}

/// Decode a record from exactly `config.record_width` bytes
///
/// Trailing filler is trimmed, then the block is split on the first
/// delimiter into name and size. Anything else is `MalformedRecord`.
pub fn decode_record(block: &[u8], config: &ArchiveConfig) -> Result<EntryRecord, PackError> {
    if block.len() != config.record_width {
        return Err(PackError::MalformedRecord(format!(
            "record block is {} bytes, expected {}",
            block.len(),
            config.record_width
        )));
    }

    let end = block
        .iter()
        .rposition(|&b| b != RECORD_FILLER)
        .map_or(0, |i| i + 1);
    let trimmed = &block[..end];

    let delim = memchr::memchr(RECORD_DELIMITER, trimmed)
        .ok_or_else(|| PackError::MalformedRecord("no delimiter between name and size".into()))?;
    let (name_bytes, size_bytes) = (&trimmed[..delim], &trimmed[delim + 1..]);

    if name_bytes.is_empty() {
        return Err(PackError::MalformedRecord("empty entry name".into()));
    }

    let name = core::str::from_utf8(name_bytes)
        .map_err(|_| PackError::MalformedRecord("entry name is not valid UTF-8".into()))?;

    if size_bytes.is_empty() || !size_bytes.iter().all(u8::is_ascii_digit) {
        return Err(PackError::MalformedRecord(format!(
            "size field {:?} is not a non-negative decimal integer",
            String::from_utf8_lossy(size_bytes)
        )));
    }
    let size: u64 = core::str::from_utf8(size_bytes)
        .map_err(|_| PackError::MalformedRecord("size field is not valid UTF-8".into()))?
        .parse()
        .map_err(|_| PackError::MalformedRecord("size field out of range".into()))?;

    Ok(EntryRecord::new(name, size))
}

fn validate_name(name: &str) -> Result<(), PackError> {
    if name.is_empty() {
        return Err(PackError::InvalidName("name is empty".into()));
    }
    if name.bytes().any(|b| b == RECORD_DELIMITER || b == 0) {
        return Err(PackError::InvalidName(format!(
            "{name:?} contains a delimiter or NUL byte"
        )));
    }
    Ok(())
}

fn decimal_width(n: u64) -> usize {
    n.to_string().len()
}
