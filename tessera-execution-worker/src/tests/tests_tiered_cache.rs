// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

use super::mock::write_set;
use crate::tiered_state_cache::TieredStateCache;
use std::sync::Arc;
use tessera_execution_exports::test_exports::InMemoryStateReader;

#[test]
fn test_first_read_is_memoized_against_parent_mutation() {
    let parent = Arc::new(InMemoryStateReader::new());
    parent.set("k", b"v1".to_vec());
    let cache = TieredStateCache::new(parent.clone());

    assert_eq!(cache.try_get("k").unwrap(), Some(b"v1".to_vec()));

    // the baseline moves under the session; the memoized value must not
    parent.set("k", b"v2".to_vec());
    assert_eq!(cache.try_get("k").unwrap(), Some(b"v1".to_vec()));
}

#[test]
fn test_absence_is_memoized_too() {
    let parent = Arc::new(InMemoryStateReader::new());
    let cache = TieredStateCache::new(parent.clone());

    assert_eq!(cache.try_get("ghost").unwrap(), None);

    parent.set("ghost", b"appeared".to_vec());
    assert_eq!(cache.try_get("ghost").unwrap(), None);
}

#[test]
fn test_overlay_write_shadows_memoized_original() {
    let parent = Arc::new(InMemoryStateReader::new());
    parent.set("k", b"old".to_vec());
    let mut cache = TieredStateCache::new(parent);

    assert_eq!(cache.try_get("k").unwrap(), Some(b"old".to_vec()));

    cache.update(&write_set(&[("k", b"new")]));
    assert_eq!(cache.try_get("k").unwrap(), Some(b"new".to_vec()));
}

#[test]
fn test_overlay_delete_reads_as_absent() {
    let parent = Arc::new(InMemoryStateReader::new());
    parent.set("k", b"present".to_vec());
    let mut cache = TieredStateCache::new(parent);

    let mut state_set = write_set(&[]);
    state_set.delete("k".to_string());
    cache.update(&state_set);

    assert_eq!(cache.try_get("k").unwrap(), None);
}

#[test]
fn test_update_makes_unread_keys_visible() {
    // a key never fetched from the parent still reads from the overlay
    let parent = Arc::new(InMemoryStateReader::new());
    let mut cache = TieredStateCache::new(parent);

    cache.update(&write_set(&[("fresh", b"value")]));
    assert_eq!(cache.try_get("fresh").unwrap(), Some(b"value".to_vec()));
}

#[test]
fn test_later_update_wins_over_earlier_update() {
    let parent = Arc::new(InMemoryStateReader::new());
    let mut cache = TieredStateCache::new(parent);

    cache.update(&write_set(&[("k", b"first")]));
    cache.update(&write_set(&[("k", b"second")]));
    assert_eq!(cache.try_get("k").unwrap(), Some(b"second".to_vec()));

    let mut state_set = write_set(&[]);
    state_set.delete("k".to_string());
    cache.update(&state_set);
    assert_eq!(cache.try_get("k").unwrap(), None);
}
