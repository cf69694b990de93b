// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! this file defines all possible execution error categories
//!
//! Only service-level faults are expressed as errors: ordinary transaction
//! failures, extraction fallbacks and merge conflicts are data
//! (see `ExecutionStatus` and `ParallelExecutionOutput`), not errors.

use displaydoc::Display;
use thiserror::Error;

/// Errors of the execution component.
#[non_exhaustive]
#[derive(Clone, Display, Error, Debug)]
pub enum ExecutionError {
    /// Contract invoker error: {0}
    InvokerError(String),

    /// Resource declaration error: {0}
    ResourceDeclarationError(String),

    /// State unavailable: {0}
    StateUnavailable(String),
}
