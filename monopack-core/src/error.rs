//! Error types for monopack operations

use alloc::string::String;

/// Errors that can occur while packing or unpacking an archive
#[cfg_attr(feature = "std", derive(thiserror::Error))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Entry name plus its decimal size does not fit in the fixed-width record
    #[cfg_attr(
        feature = "std",
        error("record overflow: entry {name:?} does not fit in a {width}-byte record")
    )]
    RecordOverflow {
        /// The entry name that was rejected.
        name: String,
        /// The configured record width.
        width: usize,
    },

    /// Entry name cannot be represented in the record format
    #[cfg_attr(feature = "std", error("invalid entry name: {0}"))]
    InvalidName(String),

    /// Metadata record could not be parsed - archive is corrupt or the
    /// record width does not match the one it was written with
    #[cfg_attr(feature = "std", error("malformed metadata record: {0}"))]
    MalformedRecord(String),

    /// Stream ended mid-record or mid-payload
    #[cfg_attr(
        feature = "std",
        error("truncated archive: expected {expected} bytes, got {actual}")
    )]
    TruncatedArchive {
        /// The number of bytes expected.
        expected: usize,
        /// The number of bytes actually available.
        actual: usize,
    },

    /// Underlying read failure, or a source shorter/longer than declared
    #[cfg_attr(feature = "std", error("source read error: {0}"))]
    SourceRead(String),

    /// Underlying write failure; the archive written so far is not valid
    #[cfg_attr(feature = "std", error("sink write error: {0}"))]
    SinkWrite(String),
}
