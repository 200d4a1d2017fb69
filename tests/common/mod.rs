//! Shared test helpers

#![allow(dead_code)]

use std::collections::HashMap;

use syncmap::SyncMap;

/// Install a tracing subscriber once (honours RUST_LOG)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a `SyncMap<String, i32>` from string-keyed pairs
pub fn string_map(pairs: &[(&str, i32)]) -> SyncMap<String, i32> {
    let init: HashMap<String, i32> = pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    SyncMap::new(init)
}
