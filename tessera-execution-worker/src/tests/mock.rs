// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! Shared helpers for the worker tests: deterministic transactions, chain
//! contexts, resource sets and extraction outcomes built by hand.

use crate::resource_extractor::ResourceExtractionOutcome;
use std::collections::BTreeSet;
use tessera_execution_exports::{ResourceId, TransactionExecutingStateSet, TransactionResourceInfo};
use tessera_models::{Address, BlockHash, ChainContext, Transaction, TransactionId};

/// Deterministic transaction id derived from a seed byte
pub fn transaction_id(seed: u8) -> TransactionId {
    TransactionId::new([seed; 32])
}

/// Deterministic transaction derived from a seed byte
pub fn transaction(seed: u8) -> Transaction {
    Transaction {
        id: transaction_id(seed),
        from: Address::new([1; 32]),
        to: Address::new([2; 32]),
        method_name: "transfer".to_string(),
        params: vec![seed],
    }
}

/// Chain context of an arbitrary baseline block
pub fn chain_context() -> ChainContext {
    ChainContext::new(BlockHash::new([9; 32]), 42)
}

/// Path-resource set from literal names
pub fn resources(paths: &[&str]) -> BTreeSet<ResourceId> {
    paths
        .iter()
        .map(|path| ResourceId::Path(path.to_string()))
        .collect()
}

/// Effect set writing the given key/value pairs
pub fn write_set(entries: &[(&str, &[u8])]) -> TransactionExecutingStateSet {
    let mut state_set = TransactionExecutingStateSet::default();
    for (key, value) in entries {
        state_set.set(key.to_string(), value.to_vec());
    }
    state_set
}

/// Extraction outcome built from explicit resource infos, with no failures
pub fn extraction_outcome(infos: Vec<TransactionResourceInfo>) -> ResourceExtractionOutcome {
    ResourceExtractionOutcome {
        infos: infos
            .into_iter()
            .map(|info| (info.transaction_id, info))
            .collect(),
        failed_transactions: Default::default(),
    }
}

/// Ids of every transaction of every group, preserving group structure
pub fn group_ids(groups: &[Vec<Transaction>]) -> Vec<Vec<TransactionId>> {
    groups
        .iter()
        .map(|group| group.iter().map(|transaction| transaction.id).collect())
        .collect()
}
