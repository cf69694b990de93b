// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module exports generic traits representing interfaces for reaching
//! the execution core's external collaborators: the contract invoker and the
//! committed state store.

use crate::error::ExecutionError;
use crate::types::{ResourceDeclaration, TransactionContext, TransactionTrace};
use tessera_models::{ChainContext, Transaction};

/// Read surface over committed state, keyed by opaque string paths.
/// Implementations must never be mutated while a batch referencing them
/// is being executed: they are the shared read-only baseline of the batch.
pub trait StateReader: Send + Sync {
    /// Gets the committed value of a state key
    ///
    /// # Arguments
    /// * `key`: state path to read
    ///
    /// # Returns
    /// `Some(value)` if the key exists, `None` otherwise,
    /// or an error if the underlying storage is unavailable
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ExecutionError>;
}

/// Interface to the contract virtual machine.
/// The execution core never interprets bytecode itself: it only decides
/// which transactions run together and how their effects are combined.
pub trait ContractInvoker: Send + Sync {
    /// Invokes the target contract's resource declaration entry point for a
    /// transaction, as a read-only call issued by a synthetic system-level
    /// caller against the baseline state of the chain context.
    ///
    /// # Arguments
    /// * `context`: baseline of the block-building attempt
    /// * `transaction`: the transaction whose footprint is requested
    ///
    /// # Returns
    /// The declared resource footprint, `ResourceDeclaration::Fallback` when
    /// the contract cannot declare one, or an error on a hard fault of the
    /// declaration call itself
    fn get_transaction_resource_info(
        &self,
        context: &ChainContext,
        transaction: &Transaction,
    ) -> Result<ResourceDeclaration, ExecutionError>;

    /// Executes a transaction against the given state view.
    ///
    /// Ordinary transaction failures (e.g. contract reverts) must be carried
    /// in the returned trace; an `Err` from this method is a fatal
    /// service-level fault that aborts the whole batch.
    ///
    /// # Arguments
    /// * `context`: the transaction and its chain context
    /// * `state`: state view the contract reads through; writes and deletes
    ///   are recorded in the returned trace, never applied to `state`
    ///
    /// # Returns
    /// The execution trace, or a fatal error
    fn execute(
        &self,
        context: &TransactionContext,
        state: &dyn StateReader,
    ) -> Result<TransactionTrace, ExecutionError>;
}
