// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module resolves the resource footprint of each transaction in a
//! batch by invoking the target contract's resource declaration entry point.
//!
//! Extraction is per-transaction independent, so the declaration calls are
//! issued concurrently over a bounded pool of worker threads; contract
//! invocation may itself block on I/O. A transaction whose contract cannot
//! declare a footprint is conservatively downgraded to non-parallelizable:
//! misclassifying a conflicting transaction as independent would corrupt
//! state, while the converse only costs throughput.

use crossbeam_channel::{bounded, unbounded};
use std::collections::HashMap;
use std::sync::Arc;
use tessera_execution_exports::{
    ContractInvoker, ExecutionError, ResourceDeclaration, TransactionResourceInfo,
};
use tessera_models::{ChainContext, Transaction, TransactionId};
use tracing::debug;

/// Per-batch output of resource extraction
#[derive(Default)]
pub struct ResourceExtractionOutcome {
    /// resource footprint of each transaction, indexed by id
    pub infos: HashMap<TransactionId, TransactionResourceInfo>,
    /// transactions whose declaration call raised a hard error;
    /// they are excluded from grouping entirely
    pub failed_transactions: HashMap<TransactionId, ExecutionError>,
}

/// Resolves transaction resource footprints through the contract invoker
pub struct ResourceExtractor {
    /// interface to the contract virtual machine
    invoker: Arc<dyn ContractInvoker>,
    /// maximum number of concurrent declaration calls
    concurrency: usize,
}

impl ResourceExtractor {
    /// Creates a new extractor
    ///
    /// # Arguments
    /// * `invoker`: interface to the contract virtual machine
    /// * `concurrency`: maximum number of concurrent declaration calls
    pub fn new(invoker: Arc<dyn ContractInvoker>, concurrency: usize) -> Self {
        ResourceExtractor {
            invoker,
            concurrency: concurrency.max(1),
        }
    }

    /// Resolves the resource footprint of every transaction in the batch.
    /// Output order is irrelevant: consumers index the result by id.
    ///
    /// # Arguments
    /// * `context`: baseline of the block-building attempt
    /// * `transactions`: the batch, in block order
    pub fn get_resources(
        &self,
        context: &ChainContext,
        transactions: &[Transaction],
    ) -> ResourceExtractionOutcome {
        if transactions.is_empty() {
            return Default::default();
        }
        let worker_count = self.concurrency.min(transactions.len());
        let (job_tx, job_rx) = bounded::<&Transaction>(worker_count);
        let (result_tx, result_rx) =
            unbounded::<(TransactionId, Result<ResourceDeclaration, ExecutionError>)>();

        std::thread::scope(|scope| {
            for _ in 0..worker_count {
                let job_rx = job_rx.clone();
                let result_tx = result_tx.clone();
                let invoker = &self.invoker;
                scope.spawn(move || {
                    while let Ok(transaction) = job_rx.recv() {
                        let declaration =
                            invoker.get_transaction_resource_info(context, transaction);
                        // a send failure means the collector is gone; stop working
                        if result_tx.send((transaction.id, declaration)).is_err() {
                            return;
                        }
                    }
                });
            }
            drop(job_rx);
            drop(result_tx);

            for transaction in transactions {
                if job_tx.send(transaction).is_err() {
                    break;
                }
            }
            drop(job_tx);
        });

        let mut outcome = ResourceExtractionOutcome::default();
        while let Ok((transaction_id, declaration)) = result_rx.recv() {
            match declaration {
                Ok(ResourceDeclaration::Declared(resources)) => {
                    outcome.infos.insert(
                        transaction_id,
                        TransactionResourceInfo::parallelizable(transaction_id, resources),
                    );
                }
                Ok(ResourceDeclaration::Fallback) => {
                    debug!(
                        "transaction {} has no usable resource declaration, downgrading to non-parallelizable",
                        transaction_id
                    );
                    outcome.infos.insert(
                        transaction_id,
                        TransactionResourceInfo::non_parallelizable(transaction_id),
                    );
                }
                Err(err) => {
                    debug!(
                        "resource declaration for transaction {} raised a hard error: {}",
                        transaction_id, err
                    );
                    outcome.failed_transactions.insert(transaction_id, err);
                }
            }
        }
        outcome
    }
}
