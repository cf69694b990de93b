// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This file exports useful types used to interact with the execution worker

use crate::error::ExecutionError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tessera_models::{ChainContext, Transaction, TransactionId};

/// Identifier of a state partition a transaction may read or write.
/// Contracts declare resources either as plain indexes or as state paths.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ResourceId {
    /// numeric partition index
    Index(u64),
    /// state path
    Path(String),
}

/// Outcome of a resource declaration call on a contract.
///
/// Hard faults of the declaration call are not represented here:
/// they surface as `Err(ExecutionError)` from the contract invoker
/// and exclude the transaction from grouping entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceDeclaration {
    /// the contract declared the state partitions the transaction may touch
    Declared(BTreeSet<ResourceId>),
    /// the contract has no declaration capability or the call failed
    /// non-fatally: the transaction must be treated as non-parallelizable
    Fallback,
}

/// Resource footprint of one transaction within one batch.
/// Produced once per transaction per batch and never cached across batches,
/// since the declared footprint may depend on state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionResourceInfo {
    /// identity of the described transaction
    pub transaction_id: TransactionId,
    /// state partitions the transaction may touch
    pub resources: BTreeSet<ResourceId>,
    /// when true, no independence guarantee exists for this transaction
    /// and it must execute in the catch-all group
    pub non_parallelizable: bool,
}

impl TransactionResourceInfo {
    /// Describes a transaction with a declared resource footprint
    pub fn parallelizable(
        transaction_id: TransactionId,
        resources: BTreeSet<ResourceId>,
    ) -> Self {
        TransactionResourceInfo {
            transaction_id,
            resources,
            non_parallelizable: false,
        }
    }

    /// Describes a transaction that must be executed in the catch-all group
    pub fn non_parallelizable(transaction_id: TransactionId) -> Self {
        TransactionResourceInfo {
            transaction_id,
            resources: BTreeSet::new(),
            non_parallelizable: true,
        }
    }
}

/// Execution status of a single transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecutionStatus {
    /// executed successfully, effects eligible for the block state set
    Mined,
    /// ordinary execution failure (e.g. contract revert), effects discarded
    Failed,
    /// dropped by the merge step because its group overlapped an
    /// earlier-merged group
    Conflict,
    /// skipped without execution (e.g. batch cancellation)
    Unexecutable,
}

/// `SetOrDelete` defines whether a value is set to a new one or deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetOrDelete<T: Clone> {
    /// sets the value to a new one
    Set(T),
    /// deletes the value
    Delete,
}

/// Effect set produced by executing a single transaction:
/// state writes and state deletes keyed by opaque string paths.
/// A key is never present on both sides: the last operation on a key wins.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionExecutingStateSet {
    /// state writes
    pub writes: BTreeMap<String, Vec<u8>>,
    /// state deletes
    pub deletes: BTreeSet<String>,
}

impl TransactionExecutingStateSet {
    /// Records a write, overriding any earlier delete of the same key
    pub fn set(&mut self, key: String, value: Vec<u8>) {
        self.deletes.remove(&key);
        self.writes.insert(key, value);
    }

    /// Records a delete, overriding any earlier write of the same key
    pub fn delete(&mut self, key: String) {
        self.writes.remove(&key);
        self.deletes.insert(key);
    }

    /// Checks whether the set carries no effect at all
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty() && self.deletes.is_empty()
    }
}

/// Result of executing (or deciding not to execute) one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionReturnSet {
    /// identity of the executed transaction
    pub transaction_id: TransactionId,
    /// execution status
    pub status: ExecutionStatus,
    /// state writes caused by the transaction (empty unless `Mined`)
    pub state_changes: BTreeMap<String, Vec<u8>>,
    /// state deletes caused by the transaction (empty unless `Mined`)
    pub state_deletes: BTreeSet<String>,
}

impl ExecutionReturnSet {
    /// Return set of a successfully executed transaction
    pub fn mined(transaction_id: TransactionId, state_set: TransactionExecutingStateSet) -> Self {
        ExecutionReturnSet {
            transaction_id,
            status: ExecutionStatus::Mined,
            state_changes: state_set.writes,
            state_deletes: state_set.deletes,
        }
    }

    /// Return set of a transaction whose execution failed in an ordinary,
    /// recoverable way; its effects are discarded
    pub fn failed(transaction_id: TransactionId) -> Self {
        ExecutionReturnSet {
            transaction_id,
            status: ExecutionStatus::Failed,
            state_changes: BTreeMap::new(),
            state_deletes: BTreeSet::new(),
        }
    }

    /// Return set of a transaction that was skipped without execution
    pub fn unexecutable(transaction_id: TransactionId) -> Self {
        ExecutionReturnSet {
            transaction_id,
            status: ExecutionStatus::Unexecutable,
            state_changes: BTreeMap::new(),
            state_deletes: BTreeSet::new(),
        }
    }

    /// Iterates over every state key written or deleted by this return set
    pub fn written_keys(&self) -> impl Iterator<Item = &String> {
        self.state_changes.keys().chain(self.state_deletes.iter())
    }
}

/// Aggregated net effect of all merged transactions for the block being built.
///
/// Invariant: a key present in `deletes` is absent from `changes` and vice
/// versa. The last writer for a key wins and a delete always overrides an
/// earlier change for that key within the same merge pass.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStateSet {
    /// net state writes
    pub changes: BTreeMap<String, Vec<u8>>,
    /// net state deletes
    pub deletes: BTreeSet<String>,
}

impl BlockStateSet {
    /// Applies the effects of one return set, preserving the
    /// changes/deletes disjointness invariant
    pub fn apply(&mut self, return_set: &ExecutionReturnSet) {
        for (key, value) in &return_set.state_changes {
            self.deletes.remove(key);
            self.changes.insert(key.clone(), value.clone());
        }
        for key in &return_set.state_deletes {
            self.changes.remove(key);
            self.deletes.insert(key.clone());
        }
    }
}

/// Per-transaction context handed to the contract invoker for execution
#[derive(Debug, Clone, Copy)]
pub struct TransactionContext<'a> {
    /// baseline of the block-building attempt
    pub chain_context: &'a ChainContext,
    /// the transaction to execute
    pub transaction: &'a Transaction,
}

/// Trace produced by the contract invoker for one transaction execution.
/// Ordinary failures are carried here; the invoker only returns `Err`
/// for fatal service-level faults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionTrace {
    /// whether the transaction executed successfully
    pub successful: bool,
    /// failure reason when unsuccessful
    pub error: Option<String>,
    /// effects of the execution (discarded when unsuccessful)
    pub state_set: TransactionExecutingStateSet,
}

impl TransactionTrace {
    /// Trace of a successful execution with the given effects
    pub fn success(state_set: TransactionExecutingStateSet) -> Self {
        TransactionTrace {
            successful: true,
            error: None,
            state_set,
        }
    }

    /// Trace of an ordinary execution failure
    pub fn failure<S: Into<String>>(error: S) -> Self {
        TransactionTrace {
            successful: false,
            error: Some(error.into()),
            state_set: TransactionExecutingStateSet::default(),
        }
    }
}

/// Cloneable cancellation token observed between transactions inside a group.
/// Cancelling stops further transactions in each group but neither interrupts
/// in-progress contract calls nor reverts already-applied in-group effects.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    /// Creates a fresh, non-cancelled token
    pub fn new() -> Self {
        Default::default()
    }

    /// Requests cancellation of the batch
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Checks whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Full outcome of one parallel batch execution
#[derive(Debug)]
pub struct ParallelExecutionOutput {
    /// accepted return sets, in merge order
    pub return_sets: Vec<ExecutionReturnSet>,
    /// return sets of groups dropped by conflict detection, with their
    /// statuses rewritten to `Conflict`; the caller decides whether to
    /// re-submit them for sequential-only execution
    pub conflicting: Vec<ExecutionReturnSet>,
    /// aggregated block-level state delta of the accepted return sets
    pub block_state_set: BlockStateSet,
    /// transactions excluded from the batch because their resource lookup
    /// raised a hard error; to be re-queued or dropped by the caller
    pub failed_transactions: HashMap<TransactionId, ExecutionError>,
}
