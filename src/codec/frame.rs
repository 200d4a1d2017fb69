//! Frame encoding and decoding

use std::any::type_name;
use std::collections::BTreeMap;

use bincode::Options;
use bytes::{Buf, BufMut};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{FORMAT_VERSION, HEADER_SIZE, MAGIC};
use crate::config::Config;
use crate::error::{Result, SyncMapError};

/// Tag identifying the key/value type pair a frame was encoded for
pub fn type_tag<K, V>() -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(type_name::<K>().as_bytes());
    hasher.update(b",");
    hasher.update(type_name::<V>().as_bytes());
    hasher.finalize()
}

/// Payload encoding: bincode defaults with fixed-width integers, no trailing bytes
fn payload_options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// Encode a table into a frame
///
/// Only the `u32` length field bounds the payload; `Config::max_payload_size`
/// is enforced when decoding.
pub fn encode_table<K, V>(table: &BTreeMap<K, V>) -> Result<Vec<u8>>
where
    K: Serialize,
    V: Serialize,
{
    let payload = payload_options()
        .serialize(table)
        .map_err(|e| SyncMapError::Serialization(e.to_string()))?;

    if payload.len() > u32::MAX as usize {
        return Err(SyncMapError::Serialization(format!(
            "payload too large: {} bytes (max {})",
            payload.len(),
            u32::MAX
        )));
    }

    let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
    frame.put_slice(&MAGIC);
    frame.put_u8(FORMAT_VERSION);
    frame.put_u32(type_tag::<K, V>());
    frame.put_u32(crc32fast::hash(&payload));
    frame.put_u32(payload.len() as u32);
    frame.put_slice(&payload);

    Ok(frame)
}

/// Decode a frame back into a table
///
/// The whole frame is validated and decoded before anything is returned, so
/// a failure never yields a partial table.
pub fn decode_table<K, V>(bytes: &[u8], config: &Config) -> Result<BTreeMap<K, V>>
where
    K: DeserializeOwned + Ord,
    V: DeserializeOwned,
{
    if bytes.len() < HEADER_SIZE {
        return Err(SyncMapError::Corruption(format!(
            "frame too short: {} bytes",
            bytes.len()
        )));
    }

    let mut buf = bytes;

    let mut magic = [0u8; 2];
    buf.copy_to_slice(&mut magic);
    if magic != MAGIC {
        return Err(SyncMapError::Corruption(format!("bad magic: {:02x?}", magic)));
    }

    let version = buf.get_u8();
    if version != FORMAT_VERSION {
        return Err(SyncMapError::Corruption(format!(
            "unsupported format version: {}",
            version
        )));
    }

    let tag = buf.get_u32();
    if config.strict_types && tag != type_tag::<K, V>() {
        return Err(SyncMapError::Corruption(format!(
            "type mismatch: frame was not encoded for ({}, {})",
            type_name::<K>(),
            type_name::<V>()
        )));
    }

    let stored_crc = buf.get_u32();
    let len = buf.get_u32();

    if len > config.max_payload_size {
        return Err(SyncMapError::Corruption(format!(
            "payload too large: {} bytes (max {})",
            len, config.max_payload_size
        )));
    }

    if buf.remaining() != len as usize {
        return Err(SyncMapError::Corruption(format!(
            "length mismatch: header says {} bytes, found {}",
            len,
            buf.remaining()
        )));
    }

    if config.verify_checksum {
        let computed_crc = crc32fast::hash(buf);
        if computed_crc != stored_crc {
            return Err(SyncMapError::Corruption(format!(
                "checksum mismatch: expected {:08x}, got {:08x}",
                stored_crc, computed_crc
            )));
        }
    }

    payload_options()
        .deserialize(buf)
        .map_err(|e| SyncMapError::Serialization(e.to_string()))
}
