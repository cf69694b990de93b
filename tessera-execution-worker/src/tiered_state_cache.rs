// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! The tiered state cache represents, in a compressed way, the state
//! observed by one group during speculative execution. It never writes to
//! the committed state but keeps track of the changes applied on top of it.
//!
//! Reads transparently fall back to the committed baseline and are memoized
//! in an "original values" layer on first access: a transaction that reads
//! the same key several times within one session always observes the same
//! pre-block value, even if the parent layer were mutated concurrently.
//! The "current values" overlay holds writes and deletes ingested from
//! already-accepted execution results and always shadows the original layer.
//!
//! One instance is scoped to a single block-building attempt and discarded
//! if the attempt is abandoned.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tessera_execution_exports::{
    ExecutionError, SetOrDelete, StateReader, TransactionExecutingStateSet,
};

/// Two-layer key/value cache over a shared read-only committed baseline
pub struct TieredStateCache {
    /// committed state the session was seeded from; never mutated
    parent: Arc<dyn StateReader>,
    /// pre-block value of every key read so far; memoized on first parent
    /// access and never refreshed for the remainder of the session
    original_values: RwLock<HashMap<String, Option<Vec<u8>>>>,
    /// local writes and deletes accumulated from accepted execution results
    current_values: HashMap<String, SetOrDelete<Vec<u8>>>,
}

impl TieredStateCache {
    /// Creates a cache seeded from a committed baseline
    pub fn new(parent: Arc<dyn StateReader>) -> Self {
        TieredStateCache {
            parent,
            original_values: Default::default(),
            current_values: Default::default(),
        }
    }

    /// Gets the effective value of a key.
    /// The overlay shadows the original layer; a deleted key reads as absent.
    ///
    /// # Arguments
    /// * `key`: state path to read
    pub fn try_get(&self, key: &str) -> Result<Option<Vec<u8>>, ExecutionError> {
        if let Some(entry) = self.current_values.get(key) {
            return Ok(match entry {
                SetOrDelete::Set(value) => Some(value.clone()),
                SetOrDelete::Delete => None,
            });
        }
        if let Some(original) = self.original_values.read().get(key) {
            return Ok(original.clone());
        }
        let fetched = self.parent.get(key)?;
        let mut memo = self.original_values.write();
        // keep the first memoized value in case of a concurrent fetch
        let value = memo.entry(key.to_string()).or_insert(fetched);
        Ok(value.clone())
    }

    /// Ingests the writes and deletes of an accepted execution result into
    /// the overlay, so that subsequent dependent reads observe its effects
    ///
    /// # Arguments
    /// * `state_set`: effect set of the accepted transaction
    pub fn update(&mut self, state_set: &TransactionExecutingStateSet) {
        for (key, value) in &state_set.writes {
            self.current_values
                .insert(key.clone(), SetOrDelete::Set(value.clone()));
        }
        for key in &state_set.deletes {
            self.current_values.insert(key.clone(), SetOrDelete::Delete);
        }
    }
}

impl StateReader for TieredStateCache {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ExecutionError> {
        self.try_get(key)
    }
}
