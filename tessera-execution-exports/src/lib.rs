// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! # Overview
//!
//! This crate provides all the facilities to interact with the parallel
//! execution core (tessera-execution-worker crate) that is in charge of
//! partitioning a batch of pending transactions into independent groups,
//! executing those groups concurrently and merging their effects into a
//! single conflict-free block state delta.
//!
//! The execution core is a pure in-process library: the contract virtual
//! machine, the committed state store and the chain context provider are
//! external collaborators reached through the traits defined here.
//!
//! # Architecture
//!
//! ## settings.rs
//! Contains configuration parameters for the execution system.
//!
//! ## controller_traits.rs
//! Defines the `ContractInvoker` and `StateReader` traits through which the
//! execution core reaches its external collaborators.
//!
//! ## error.rs
//! Defines error types for the crate.
//!
//! ## types.rs
//! Defines useful shared structures: resource declarations, per-transaction
//! effect sets, execution return sets and the aggregated block state set.
//!
//! ## Test exports
//!
//! When the crate feature `test-exports` is enabled, tooling useful for
//! testing purposes is exported. See test_exports/mod.rs for details.

mod controller_traits;
mod error;
mod settings;
mod types;

pub use controller_traits::{ContractInvoker, StateReader};
pub use error::ExecutionError;
pub use settings::{ExecutionConfig, GroupingStrategy};
pub use types::{
    BlockStateSet, CancellationToken, ExecutionReturnSet, ExecutionStatus,
    ParallelExecutionOutput, ResourceDeclaration, ResourceId, SetOrDelete, TransactionContext,
    TransactionExecutingStateSet, TransactionResourceInfo, TransactionTrace,
};

#[cfg(feature = "test-exports")]
pub mod test_exports;
