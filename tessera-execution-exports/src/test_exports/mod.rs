// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This module exposes useful tooling for testing.
//! It is only compiled and exported by the crate if the "test-exports"
//! feature is enabled.
//!
//! # Architecture
//!
//! ## config.rs
//! Provides a default execution configuration for testing.
//!
//! ## mock.rs
//! Provides a programmable mock of `ContractInvoker` and an in-memory
//! `StateReader` to simulate interactions with the contract virtual machine
//! and the committed state store within tests.

mod config;
mod mock;

pub use mock::*;
