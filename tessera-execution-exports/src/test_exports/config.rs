// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This file defines testing tools related to the configuration

use crate::{ExecutionConfig, GroupingStrategy};

impl Default for ExecutionConfig {
    /// default config used for testing
    fn default() -> Self {
        Self {
            parallelism: Some(4),
            extraction_concurrency: 4,
            grouping_strategy: GroupingStrategy::MinsAddUp,
        }
    }
}
