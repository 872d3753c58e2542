//! Archive configuration
//!
//! The record width and transform key are format parameters shared
//! out-of-band between packer and unpacker; the archive itself carries
//! neither. Both sides must agree or every record decode fails.

use crate::constants::{DEFAULT_KEY, DEFAULT_RECORD_WIDTH};
use serde::{Deserialize, Serialize};

/// Geometry and key for one archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Fixed byte width of every metadata record
    pub record_width: usize,

    /// Single-byte XOR key applied to payload bytes
    pub key: u8,
}

impl ArchiveConfig {
    /// Configuration matching the legacy wire format (width 100, key 0x11)
    pub const fn legacy() -> Self {
        Self {
            record_width: DEFAULT_RECORD_WIDTH,
            key: DEFAULT_KEY,
        }
    }

    /// Set the record width
    pub const fn with_record_width(mut self, record_width: usize) -> Self {
        self.record_width = record_width;
        self
    }

    /// Set the transform key
    pub const fn with_key(mut self, key: u8) -> Self {
        self.key = key;
        self
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self::legacy()
    }
}
