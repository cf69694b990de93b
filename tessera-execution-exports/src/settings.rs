// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module provides the structures used to provide configuration
//! parameters to the execution system

/// Strategy used to rebalance the naive grouping down to the available
/// execution cores. Both strategies only merge whole groups: they never move
/// a transaction across the boundaries computed by the union-find partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingStrategy {
    /// keep the naive grouping as-is
    None,
    /// repeatedly fill the largest remaining group with the smallest
    /// remaining groups up to the average per-core transaction count
    MaxAddMins,
    /// repeatedly merge the two smallest groups until the group count
    /// matches the core count
    MinsAddUp,
}

/// Execution module configuration
#[derive(Debug, Clone)]
pub struct ExecutionConfig {
    /// target number of concurrently executing groups; `None` disables
    /// rebalancing and runs one task per naive group
    pub parallelism: Option<usize>,
    /// maximum number of concurrent resource declaration calls,
    /// bounded to avoid oversubscribing the pool during extraction
    pub extraction_concurrency: usize,
    /// strategy applied when the naive grouping produces more groups
    /// than `parallelism`
    pub grouping_strategy: GroupingStrategy,
}
