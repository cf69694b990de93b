// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This file defines utilities to mock the crate for testing purposes

use crate::{
    ContractInvoker, ExecutionError, ResourceDeclaration, StateReader, TransactionContext,
    TransactionTrace,
};
use parking_lot::RwLock;
use std::collections::HashMap;
use tessera_models::{ChainContext, Transaction, TransactionId};

/// Programmable mock of `ContractInvoker`.
///
/// Declarations and traces are scripted per transaction id before the mock is
/// handed to the execution core. Unscripted transactions fall back to
/// `ResourceDeclaration::Fallback` for declarations and to an empty
/// successful trace for execution.
#[derive(Default)]
pub struct MockContractInvoker {
    declarations: HashMap<TransactionId, Result<ResourceDeclaration, ExecutionError>>,
    traces: HashMap<TransactionId, Result<TransactionTrace, ExecutionError>>,
}

impl MockContractInvoker {
    /// Creates an empty mock
    pub fn new() -> Self {
        Default::default()
    }

    /// Scripts the resource declaration returned for a transaction
    pub fn script_declaration(&mut self, id: TransactionId, declaration: ResourceDeclaration) {
        self.declarations.insert(id, Ok(declaration));
    }

    /// Scripts a hard declaration fault for a transaction
    pub fn script_declaration_error(&mut self, id: TransactionId, error: ExecutionError) {
        self.declarations.insert(id, Err(error));
    }

    /// Scripts the trace returned when a transaction is executed
    pub fn script_trace(&mut self, id: TransactionId, trace: TransactionTrace) {
        self.traces.insert(id, Ok(trace));
    }

    /// Scripts a fatal service-level fault for a transaction execution
    pub fn script_execution_error(&mut self, id: TransactionId, error: ExecutionError) {
        self.traces.insert(id, Err(error));
    }
}

impl ContractInvoker for MockContractInvoker {
    fn get_transaction_resource_info(
        &self,
        _context: &ChainContext,
        transaction: &Transaction,
    ) -> Result<ResourceDeclaration, ExecutionError> {
        match self.declarations.get(&transaction.id) {
            Some(scripted) => scripted.clone(),
            None => Ok(ResourceDeclaration::Fallback),
        }
    }

    fn execute(
        &self,
        context: &TransactionContext,
        _state: &dyn StateReader,
    ) -> Result<TransactionTrace, ExecutionError> {
        match self.traces.get(&context.transaction.id) {
            Some(scripted) => scripted.clone(),
            None => Ok(TransactionTrace::success(Default::default())),
        }
    }
}

/// In-memory committed state used as the baseline layer in tests.
/// Interior mutability makes it possible to mutate the parent mid-session,
/// which tests use to verify the snapshot isolation of the tiered cache.
#[derive(Default)]
pub struct InMemoryStateReader {
    values: RwLock<HashMap<String, Vec<u8>>>,
}

impl InMemoryStateReader {
    /// Creates an empty in-memory state
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the committed value of a key
    pub fn set(&self, key: &str, value: Vec<u8>) {
        self.values.write().insert(key.to_string(), value);
    }

    /// Removes the committed value of a key
    pub fn remove(&self, key: &str) {
        self.values.write().remove(key);
    }
}

impl StateReader for InMemoryStateReader {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, ExecutionError> {
        Ok(self.values.read().get(key).cloned())
    }
}
