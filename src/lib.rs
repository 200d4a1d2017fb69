//! # syncmap
//!
//! A concurrency-safe ordered map with:
//! - Single-writer/multi-reader locking around one table
//! - Deterministic rendering (`map[k1:v1 k2:v2]`, keys ascending)
//! - Binary snapshots of the full contents
//! - Additive-only merge of a snapshot into a live map
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Callers                               │
//! │                  (Many Threads, Arc)                         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      SyncMap                                 │
//! │        RwLock<BTreeMap>  (Single Writer / Multi Reader)      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │ snapshot (read lock, copy, release)
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Display   │          │    Codec    │
//!   │  map[k:v]   │          │ (Frame+CRC) │
//!   └─────────────┘          └─────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::collections::HashMap;
//! use syncmap::SyncMap;
//!
//! let map = SyncMap::new(HashMap::from([("x".to_string(), 0), ("y".to_string(), 0)]));
//!
//! map.insert("a".to_string(), 1, false).unwrap();
//! map.insert("a".to_string(), 2, false).unwrap();
//! map.remove("y");
//!
//! assert_eq!(map.to_string(), "map[a:2 x:0]");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod codec;
pub mod map;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{SyncMapError, Result};
pub use config::Config;
pub use map::{sorted_keys, Snapshot, SyncMap};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of syncmap
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
