// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! # Overview
//!
//! This crate implements the parallel transaction execution core of the
//! Tessera node. Given the ordered list of transactions destined for one
//! block, it determines which transactions can safely execute concurrently
//! because they touch disjoint pieces of state, executes them in parallel
//! groups and merges the resulting state changes into a single conflict-free
//! block state delta.
//!
//! Data flow: transactions -> (parallel) resource extraction -> grouping ->
//! (parallel) group execution against tiered caches -> merge and conflict
//! detection -> block state set.
//!
//! # Architecture
//!
//! ## resource_extractor.rs
//! Invokes each contract's resource declaration entry point, concurrently
//! and with a conservative non-parallelizable fallback.
//!
//! ## union_find.rs
//! Batch-scoped, arena-indexed disjoint-set forest used by the grouper.
//!
//! ## grouper.rs
//! Partitions a batch into independent groups plus one catch-all group, and
//! optionally rebalances the group count to the available execution cores.
//!
//! ## tiered_state_cache.rs
//! Layered key/value cache giving each group a consistent snapshot of
//! committed state plus a local overlay of speculative writes.
//!
//! ## sequential.rs
//! Strictly sequential executor for the transactions of one group.
//!
//! ## parallel.rs
//! Dispatches one task per group and joins their results.
//!
//! ## merge.rs
//! Combines per-group results into accepted/conflicting sets and derives the
//! final block-level state delta.

mod grouper;
mod merge;
mod parallel;
mod resource_extractor;
mod sequential;
mod tiered_state_cache;
mod union_find;

pub use grouper::{Grouper, Grouping};
pub use parallel::ParallelExecutingService;
pub use resource_extractor::{ResourceExtractionOutcome, ResourceExtractor};
pub use sequential::SequentialExecutingService;
pub use tiered_state_cache::TieredStateCache;

#[cfg(test)]
mod tests;
