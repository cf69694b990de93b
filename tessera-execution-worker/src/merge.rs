// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module combines per-group execution results into a single block
//! outcome.
//!
//! Groups are resource-disjoint by construction, so their written-key sets
//! should never overlap. An observed overlap indicates either a stale or
//! incorrect resource declaration from a contract, or a non-parallelizable
//! transaction whose effects were not correctly isolated. The policy is
//! deliberately conservative and order-sensitive: the first group to claim a
//! key wins, and an overlapping group is dropped wholesale. Dropped groups
//! are reported, never retried here; the caller may re-submit them for
//! sequential-only execution.

use std::collections::HashSet;
use tessera_execution_exports::{BlockStateSet, ExecutionReturnSet, ExecutionStatus};
use tracing::warn;

/// Outcome of merging all group results of one batch
#[derive(Default)]
pub(crate) struct MergeOutcome {
    /// accepted return sets, in merge order
    pub return_sets: Vec<ExecutionReturnSet>,
    /// return sets of dropped groups, statuses rewritten to `Conflict`
    pub conflicting: Vec<ExecutionReturnSet>,
    /// every state key written by an accepted group
    pub written_keys: HashSet<String>,
    /// aggregated block-level state delta of the accepted return sets
    pub block_state_set: BlockStateSet,
}

/// Merges per-group results in the order the groups were produced.
/// A group whose written keys intersect those of an earlier-merged group is
/// dropped entirely; its effects never reach the block state set.
pub(crate) fn merge_group_results(group_results: Vec<Vec<ExecutionReturnSet>>) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    for return_sets in group_results {
        let group_keys: HashSet<String> = return_sets
            .iter()
            .flat_map(|set| set.written_keys().cloned())
            .collect();
        if group_keys.is_disjoint(&outcome.written_keys) {
            for return_set in &return_sets {
                outcome.block_state_set.apply(return_set);
            }
            outcome.written_keys.extend(group_keys);
            outcome.return_sets.extend(return_sets);
        } else {
            let transaction_ids: Vec<String> = return_sets
                .iter()
                .map(|set| set.transaction_id.to_string())
                .collect();
            warn!(
                "dropping group of {} transactions due to state key conflict: [{}]",
                return_sets.len(),
                transaction_ids.join(", ")
            );
            outcome
                .conflicting
                .extend(return_sets.into_iter().map(|mut set| {
                    set.status = ExecutionStatus::Conflict;
                    set
                }));
        }
    }
    outcome
}
