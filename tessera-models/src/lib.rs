// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This crate defines the base model types shared by the Tessera node
//! components: addresses, transaction identities, transactions and the chain
//! context describing the execution baseline of a block-building attempt.

/// account and contract addresses
pub mod address;
/// block hashes and chain context
pub mod block;
/// models error
pub mod error;
/// transactions and transaction identities
pub mod transaction;

pub use address::Address;
pub use block::{BlockHash, ChainContext};
pub use error::ModelsError;
pub use transaction::{Transaction, TransactionId};
