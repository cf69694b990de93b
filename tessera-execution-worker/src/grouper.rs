// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module partitions a batch of transactions into independent groups.
//!
//! Two transactions end up in the same group when their declared resource
//! sets are transitively connected through the union-find structure. Every
//! transaction without an independence guarantee (missing or failed resource
//! declaration) goes to a single catch-all group that executes in original
//! relative order, emulating sequential semantics.
//!
//! When a target core count is supplied and the naive grouping produced more
//! groups than cores, a rebalancing strategy merges whole groups together.
//! Merging whole groups is always safe; splitting a group never is, as it
//! would break the partition computed by the union-find structure.

use crate::resource_extractor::ResourceExtractionOutcome;
use crate::union_find::UnionFind;
use std::collections::HashMap;
use tessera_execution_exports::{ExecutionError, GroupingStrategy};
use tessera_models::{Transaction, TransactionId};
use tracing::debug;

/// Result of grouping one batch
pub struct Grouping {
    /// independent groups, ordered by first appearance of their transactions
    /// in the input batch; the catch-all group, if any, is last.
    /// Within a group, input order is preserved.
    pub groups: Vec<Vec<Transaction>>,
    /// transactions excluded from all groups because their resource lookup
    /// raised a hard error; callers must re-queue or drop these
    pub failed_transactions: HashMap<TransactionId, ExecutionError>,
}

/// Where a transaction was placed during the first grouping pass
enum Placement {
    /// empty resource set: no conflict is possible, own group
    Singleton(Transaction),
    /// holds the union-find handle of the first declared resource
    Connected(Transaction, usize),
}

/// Union-find based grouping engine.
/// Owns the union-find structure for the duration of one grouping call.
pub struct Grouper;

impl Grouper {
    /// Partitions a batch into independent groups plus one catch-all group.
    ///
    /// # Arguments
    /// * `transactions`: the batch, in block order
    /// * `resources`: per-transaction resource infos and hard failures,
    ///   as produced by the resource extractor for this same batch
    ///
    /// # Returns
    /// The computed `Grouping`. The union of all groups is exactly the input
    /// batch minus the failed transactions, each transaction appearing once.
    pub fn group(transactions: Vec<Transaction>, resources: ResourceExtractionOutcome) -> Grouping {
        let ResourceExtractionOutcome {
            infos,
            failed_transactions,
        } = resources;

        let mut union_find = UnionFind::new();
        let mut resource_nodes: HashMap<_, usize> = HashMap::new();
        let mut placements = Vec::with_capacity(transactions.len());
        let mut non_parallelizable = Vec::new();

        for transaction in transactions {
            if failed_transactions.contains_key(&transaction.id) {
                continue;
            }
            let info = match infos.get(&transaction.id) {
                Some(info) => info,
                None => {
                    // no footprint was produced for this transaction:
                    // treat it as non-parallelizable rather than guessing
                    debug!(
                        "no resource info for transaction {}, assigning to catch-all group",
                        transaction.id
                    );
                    non_parallelizable.push(transaction);
                    continue;
                }
            };
            if info.non_parallelizable {
                non_parallelizable.push(transaction);
                continue;
            }
            if info.resources.is_empty() {
                placements.push(Placement::Singleton(transaction));
                continue;
            }
            let mut handle = None;
            for resource in &info.resources {
                let node = *resource_nodes
                    .entry(resource.clone())
                    .or_insert_with(|| union_find.make_set());
                handle = Some(match handle {
                    None => node,
                    Some(previous) => union_find.union(previous, node),
                });
            }
            placements.push(Placement::Connected(
                transaction,
                handle.expect("non-empty resource set yields a handle"),
            ));
        }

        // resolve representatives and build groups,
        // ordered by first transaction appearance
        let mut groups: Vec<Vec<Transaction>> = Vec::new();
        let mut root_to_group: HashMap<usize, usize> = HashMap::new();
        for placement in placements {
            match placement {
                Placement::Singleton(transaction) => {
                    groups.push(vec![transaction]);
                }
                Placement::Connected(transaction, handle) => {
                    let root = union_find.find(handle);
                    match root_to_group.get(&root) {
                        Some(&group_index) => groups[group_index].push(transaction),
                        None => {
                            root_to_group.insert(root, groups.len());
                            groups.push(vec![transaction]);
                        }
                    }
                }
            }
        }

        // the catch-all group always comes last:
        // it carries no independence guarantee with respect to the others
        if !non_parallelizable.is_empty() {
            groups.push(non_parallelizable);
        }

        Grouping {
            groups,
            failed_transactions,
        }
    }

    /// Rebalances groups down to `core_count` by merging whole groups.
    /// Has no effect when the grouping already fits the core count.
    ///
    /// # Arguments
    /// * `groups`: groups produced by `group`
    /// * `core_count`: target number of execution cores (must be non-zero)
    /// * `strategy`: merging strategy to apply
    pub fn rebalance(
        groups: Vec<Vec<Transaction>>,
        core_count: usize,
        strategy: GroupingStrategy,
    ) -> Vec<Vec<Transaction>> {
        if core_count == 0 || groups.len() <= core_count {
            return groups;
        }
        match strategy {
            GroupingStrategy::None => groups,
            GroupingStrategy::MaxAddMins => Self::rebalance_max_add_mins(groups, core_count),
            GroupingStrategy::MinsAddUp => Self::rebalance_mins_add_up(groups, core_count),
        }
    }

    /// Sorts groups by descending size and repeatedly fills the current
    /// largest remaining group with the smallest remaining groups, as long as
    /// the merged size stays within the average per-core transaction count.
    /// If rounding leaves more groups than cores, the smallest groups are
    /// concatenated down to exactly `core_count` groups.
    fn rebalance_max_add_mins(
        mut groups: Vec<Vec<Transaction>>,
        core_count: usize,
    ) -> Vec<Vec<Transaction>> {
        groups.sort_by(|a, b| b.len().cmp(&a.len()));
        let total: usize = groups.iter().map(Vec::len).sum();
        let threshold = total / core_count;

        let mut remaining: std::collections::VecDeque<Vec<Transaction>> = groups.into();
        let mut merged = Vec::new();
        while let Some(mut base) = remaining.pop_front() {
            while let Some(smallest) = remaining.back() {
                if base.len() + smallest.len() > threshold {
                    break;
                }
                base.extend(remaining.pop_back().expect("back was just observed"));
            }
            merged.push(base);
        }

        if merged.len() > core_count {
            merged.sort_by(|a, b| b.len().cmp(&a.len()));
            while merged.len() > core_count {
                let tail = merged.pop().expect("more than core_count groups remain");
                merged
                    .last_mut()
                    .expect("at least core_count groups remain")
                    .extend(tail);
            }
        }
        merged
    }

    /// Sorts groups by descending size and repeatedly merges the two smallest
    /// groups into one, re-inserting the merged group at its sorted position,
    /// until the group count equals the core count.
    fn rebalance_mins_add_up(
        mut groups: Vec<Vec<Transaction>>,
        core_count: usize,
    ) -> Vec<Vec<Transaction>> {
        groups.sort_by(|a, b| b.len().cmp(&a.len()));
        while groups.len() > core_count {
            let smallest = groups.pop().expect("more than core_count groups remain");
            let mut merged = groups.pop().expect("at least two groups remain");
            merged.extend(smallest);
            let position = groups.partition_point(|group| group.len() >= merged.len());
            groups.insert(position, merged);
        }
        groups
    }
}
