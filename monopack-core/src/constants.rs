//! Constants and defaults for the monopack container format

/// Default width of every metadata record in bytes (legacy wire constant)
pub const DEFAULT_RECORD_WIDTH: usize = 100;

/// Default transform key (legacy wire constant; shared out-of-band)
pub const DEFAULT_KEY: u8 = 0x11;

/// Delimiter between the name and size fields inside a record
pub const RECORD_DELIMITER: u8 = b' ';

/// Filler byte used to right-pad a record to its fixed width
pub const RECORD_FILLER: u8 = b' ';

/// Size of the working buffer used when streaming payload bytes
pub const COPY_BUF_SIZE: usize = 1024;
