//! Concurrency Tests
//!
//! Tests verify:
//! - Concurrent distinct inserts are all retained
//! - Concurrent readers see consistent values
//! - Only one of many racing `fail_if_exists` inserts wins
//! - Merges are observed all-or-nothing by concurrent readers

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use common::{init_tracing, string_map};
use syncmap::{SyncMap, SyncMapError};

// =============================================================================
// Writer Tests
// =============================================================================

#[test]
fn test_concurrent_distinct_inserts() {
    init_tracing();
    let map = Arc::new(string_map(&[]));
    let n = 1_000;

    let mut handles = vec![];

    for i in 0..n {
        let m = Arc::clone(&map);
        let handle = thread::spawn(move || {
            m.insert(i.to_string(), i, false).unwrap();
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), n as usize);
}

#[test]
fn test_racing_fail_if_exists_has_single_winner() {
    let map: SyncMap<&str, usize> = SyncMap::default();
    let winners = AtomicUsize::new(0);
    let conflicts = AtomicUsize::new(0);

    crossbeam::scope(|s| {
        for i in 0..16 {
            let map = &map;
            let winners = &winners;
            let conflicts = &conflicts;
            s.spawn(move |_| match map.insert("shared", i, true) {
                Ok(None) => {
                    winners.fetch_add(1, Ordering::SeqCst);
                }
                Err(SyncMapError::KeyExists) => {
                    conflicts.fetch_add(1, Ordering::SeqCst);
                }
                other => panic!("unexpected insert result: {:?}", other),
            });
        }
    })
    .unwrap();

    assert_eq!(winners.load(Ordering::SeqCst), 1);
    assert_eq!(conflicts.load(Ordering::SeqCst), 15);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_concurrent_insert_and_remove() {
    let map: SyncMap<usize, usize> = SyncMap::default();

    crossbeam::scope(|s| {
        for t in 0..8 {
            let map = &map;
            s.spawn(move |_| {
                for j in 0..100 {
                    let key = t * 100 + j;
                    map.insert(key, j, false).unwrap();
                    if j % 2 == 0 {
                        map.remove(&key);
                    }
                }
            });
        }
    })
    .unwrap();

    assert_eq!(map.len(), 8 * 50);
    assert!(map.get_keys().iter().all(|k| k % 2 == 1));
}

// =============================================================================
// Reader Tests
// =============================================================================

#[test]
fn test_concurrent_reads() {
    let map = Arc::new(string_map(&[("key", 42)]));

    let mut handles = vec![];

    for _ in 0..10 {
        let m = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for _ in 0..100 {
                assert_eq!(m.get("key"), Ok(42));
                assert!(m.contains("key"));
                assert_eq!(m.render(), "map[key:42]");
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_readers_never_see_partial_merge() {
    init_tracing();
    let payload: Vec<(usize, usize)> = (0..500).map(|i| (i, i)).collect();
    let bytes = SyncMap::new(payload).serialize().unwrap();

    let map: SyncMap<usize, usize> = SyncMap::default();

    crossbeam::scope(|s| {
        for _ in 0..4 {
            let map = &map;
            s.spawn(move |_| {
                for _ in 0..200 {
                    let len = map.len();
                    assert!(len == 0 || len == 500, "observed partial merge: {}", len);

                    let snapshot = map.snapshot();
                    assert!(snapshot.len() == 0 || snapshot.len() == 500);
                }
            });
        }

        let map = &map;
        s.spawn(move |_| {
            assert_eq!(map.merge(&bytes), Ok(500));
        });
    })
    .unwrap();

    assert_eq!(map.len(), 500);
}
