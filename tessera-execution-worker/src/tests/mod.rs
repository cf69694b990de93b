// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

mod mock;

mod tests_merge;
mod tests_tiered_cache;
mod tests_union_find;
