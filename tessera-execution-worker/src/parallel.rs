// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module orchestrates the parallel execution of one batch.
//!
//! The batch is grouped (see grouper.rs) and each group is dispatched to a
//! strictly sequential executor on its own task, against a group-local
//! tiered state cache seeded from the shared committed baseline. The
//! union-find partition guarantees disjoint resource access across groups,
//! which is the entire rationale for grouping: no lock protects state during
//! the parallel phase. The merge pass runs single-threaded after all group
//! tasks have joined.

use crate::grouper::Grouper;
use crate::merge::merge_group_results;
use crate::resource_extractor::ResourceExtractor;
use crate::sequential::SequentialExecutingService;
use crate::tiered_state_cache::TieredStateCache;
use std::sync::Arc;
use tessera_execution_exports::{
    CancellationToken, ContractInvoker, ExecutionConfig, ExecutionError, ExecutionReturnSet,
    GroupingStrategy, ParallelExecutionOutput, StateReader,
};
use tessera_models::{ChainContext, Transaction};
use tracing::debug;

/// Service executing batches of transactions in parallel groups.
/// Constructed once per node process and handed to the block-production
/// pipeline; holds no per-batch state.
pub struct ParallelExecutingService {
    /// execution config
    config: ExecutionConfig,
    /// interface to the contract virtual machine
    invoker: Arc<dyn ContractInvoker>,
}

impl ParallelExecutingService {
    /// Creates a new parallel executing service
    ///
    /// # Arguments
    /// * `config`: execution config
    /// * `invoker`: interface to the contract virtual machine
    pub fn new(config: ExecutionConfig, invoker: Arc<dyn ContractInvoker>) -> Self {
        ParallelExecutingService { config, invoker }
    }

    /// Executes a batch of transactions destined for one block.
    ///
    /// # Arguments
    /// * `context`: baseline of the block-building attempt
    /// * `transactions`: pending transactions, in block order
    /// * `baseline`: read-only snapshot of committed state at `context`;
    ///   must not be mutated during the batch
    /// * `cancellation`: observed between transactions within each group
    ///
    /// # Returns
    /// The accepted and conflicting return sets plus the aggregated block
    /// state set, or a fatal error aborting the whole batch attempt
    pub fn execute(
        &self,
        context: &ChainContext,
        transactions: Vec<Transaction>,
        baseline: Arc<dyn StateReader>,
        cancellation: &CancellationToken,
    ) -> Result<ParallelExecutionOutput, ExecutionError> {
        let batch_size = transactions.len();

        // resolve resource footprints, concurrently per transaction
        let extractor =
            ResourceExtractor::new(self.invoker.clone(), self.config.extraction_concurrency);
        let resources = extractor.get_resources(context, &transactions);

        // partition the batch into independent groups
        let mut grouping = Grouper::group(transactions, resources);
        if let Some(core_count) = self.config.parallelism {
            if !matches!(self.config.grouping_strategy, GroupingStrategy::None) {
                grouping.groups =
                    Grouper::rebalance(grouping.groups, core_count, self.config.grouping_strategy);
            }
        }
        debug!(
            "executing batch of {} transactions as {} groups ({} excluded by extraction errors)",
            batch_size,
            grouping.groups.len(),
            grouping.failed_transactions.len()
        );

        // run one sequential task per group, each against its own cache
        let sequential = SequentialExecutingService::new(self.invoker.clone());
        let group_results: Vec<Result<Vec<ExecutionReturnSet>, ExecutionError>> =
            std::thread::scope(|scope| {
                let handles: Vec<_> = grouping
                    .groups
                    .iter()
                    .map(|group| {
                        let baseline = baseline.clone();
                        let sequential = &sequential;
                        scope.spawn(move || {
                            let mut cache = TieredStateCache::new(baseline);
                            sequential.execute(context, group, &mut cache, cancellation)
                        })
                    })
                    .collect();
                handles
                    .into_iter()
                    .map(|handle| {
                        handle
                            .join()
                            .map_err(|_| {
                                ExecutionError::InvokerError(
                                    "group execution task panicked".to_string(),
                                )
                            })
                            .and_then(|result| result)
                    })
                    .collect()
            });

        // a hard fault in any group aborts the whole batch attempt
        let group_results: Vec<Vec<ExecutionReturnSet>> =
            group_results.into_iter().collect::<Result<_, _>>()?;

        // single-threaded merge pass after the parallel phase has fully joined
        let merged = merge_group_results(group_results);

        Ok(ParallelExecutionOutput {
            return_sets: merged.return_sets,
            conflicting: merged.conflicting,
            block_state_set: merged.block_state_set,
            failed_transactions: grouping.failed_transactions,
        })
    }
}
