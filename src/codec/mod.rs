//! Codec Module
//!
//! Binary encoding of a whole map table, used by `SyncMap::serialize` and
//! `SyncMap::merge`.
//!
//! ## Frame Format (V1)
//!
//! ```text
//! ┌───────────┬──────────┬───────────────┬──────────┬──────────┬─────────────┐
//! │ Magic (2) │ Ver (1)  │ Type tag (4)  │ CRC (4)  │ Len (4)  │  Payload    │
//! └───────────┴──────────┴───────────────┴──────────┴──────────┴─────────────┘
//! ```
//!
//! - Magic: `b"SM"`
//! - Ver: frame format version
//! - Type tag: CRC32 over the key and value type names
//! - CRC: CRC32 of the payload
//! - Len: payload length in bytes
//!
//! All header integers are big-endian.
//!
//! ### Payload
//! The table encoded with bincode's default options: a `u64` pair count
//! followed by each key and value, in ascending key order. Little-endian
//! fixed-width integers, `u64` length prefixes for strings and sequences.

mod frame;

pub use frame::{decode_table, encode_table, type_tag};

/// Frame magic bytes
pub const MAGIC: [u8; 2] = *b"SM";

/// Current frame format version
pub const FORMAT_VERSION: u8 = 1;

/// Header size: magic (2) + version (1) + type tag (4) + crc (4) + len (4)
pub const HEADER_SIZE: usize = 15;
