//! # Monopack Core
//!
//! A single-file container format: many source files packed back to back into
//! one archive, each entry a fixed-width metadata record followed by its
//! XOR-obfuscated payload.
//!
//! ## Modules
//!
//! - `constants`: Wire format constants and defaults
//! - `config`: Archive geometry and key configuration
//! - `record`: Fixed-width metadata record codec
//! - `transform`: Keyed per-byte payload transform
//! - `encoder`: Streaming pack (files -> archive)
//! - `decoder`: Streaming unpack (archive -> entries)
//!
//! The transform is an obfuscation step, not encryption; do not rely on it
//! for confidentiality.

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

extern crate alloc;

pub mod config;
pub mod constants;
#[cfg(feature = "std")]
pub mod decoder;
#[cfg(feature = "std")]
pub mod encoder;
pub mod error;
pub mod record;
pub mod transform;

// Re-export commonly used types
pub use config::ArchiveConfig;
pub use error::PackError;
pub use record::EntryRecord;

#[cfg(feature = "std")]
pub use decoder::{unpack, Entry, Unpacker};
#[cfg(feature = "std")]
pub use encoder::{pack, PackSource};

/// Result type alias for monopack operations
pub type Result<T> = core::result::Result<T, PackError>;
