// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module executes the transactions of one group strictly sequentially.
//!
//! Ordinary transaction failures (e.g. contract reverts) surface as `Failed`
//! return sets and never interrupt the group. A hard fault reaching this
//! layer is not converted into a return set: it propagates as a
//! service-level error and aborts the whole batch.
//!
//! The cancellation token is observed between transactions: cancelling stops
//! processing further transactions in the group without rolling back
//! already-applied in-group effects. Skipped transactions surface as
//! `Unexecutable` return sets with empty effects so that batch accounting
//! stays total.

use crate::tiered_state_cache::TieredStateCache;
use std::sync::Arc;
use tessera_execution_exports::{
    CancellationToken, ContractInvoker, ExecutionError, ExecutionReturnSet, TransactionContext,
};
use tessera_models::{ChainContext, Transaction};
use tracing::debug;

/// Strictly sequential, single-threaded transaction executor for one group
pub struct SequentialExecutingService {
    /// interface to the contract virtual machine
    invoker: Arc<dyn ContractInvoker>,
}

impl SequentialExecutingService {
    /// Creates a new sequential executor
    pub fn new(invoker: Arc<dyn ContractInvoker>) -> Self {
        SequentialExecutingService { invoker }
    }

    /// Executes a group of transactions in order against a group-local cache.
    ///
    /// # Arguments
    /// * `context`: baseline of the block-building attempt
    /// * `transactions`: the group, in original batch order
    /// * `cache`: group-local tiered cache seeded from the shared baseline
    /// * `cancellation`: observed between transactions
    ///
    /// # Returns
    /// One return set per transaction, in group order, or a fatal error
    pub fn execute(
        &self,
        context: &ChainContext,
        transactions: &[Transaction],
        cache: &mut TieredStateCache,
        cancellation: &CancellationToken,
    ) -> Result<Vec<ExecutionReturnSet>, ExecutionError> {
        let mut return_sets = Vec::with_capacity(transactions.len());
        let mut cancelled = false;
        for transaction in transactions {
            if cancelled || cancellation.is_cancelled() {
                cancelled = true;
                return_sets.push(ExecutionReturnSet::unexecutable(transaction.id));
                continue;
            }
            let transaction_context = TransactionContext {
                chain_context: context,
                transaction,
            };
            let trace = self.invoker.execute(&transaction_context, cache)?;
            if trace.successful {
                // apply the effects locally so that later transactions
                // of the same group observe them
                cache.update(&trace.state_set);
                return_sets.push(ExecutionReturnSet::mined(transaction.id, trace.state_set));
            } else {
                debug!(
                    "transaction {} failed: {}",
                    transaction.id,
                    trace.error.as_deref().unwrap_or("unknown reason")
                );
                return_sets.push(ExecutionReturnSet::failed(transaction.id));
            }
        }
        Ok(return_sets)
    }
}
