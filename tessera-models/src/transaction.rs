// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This file defines transactions and their identities.

use crate::address::Address;
use crate::error::ModelsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Size in bytes of a serialized transaction id
pub const TRANSACTION_ID_SIZE_BYTES: usize = 32;

/// Opaque identity of a transaction
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionId([u8; TRANSACTION_ID_SIZE_BYTES]);

impl TransactionId {
    /// Creates a transaction id from raw bytes
    pub const fn new(bytes: [u8; TRANSACTION_ID_SIZE_BYTES]) -> Self {
        TransactionId(bytes)
    }

    /// Returns the underlying bytes
    pub fn to_bytes(&self) -> &[u8; TRANSACTION_ID_SIZE_BYTES] {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", bs58::encode(self.0).with_check().into_string())
    }
}

impl FromStr for TransactionId {
    type Err = ModelsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|err| ModelsError::InvalidIdFormat(format!("transaction id: {}", err)))?;
        let bytes: [u8; TRANSACTION_ID_SIZE_BYTES] = decoded
            .try_into()
            .map_err(|_| ModelsError::InvalidIdFormat("transaction id: invalid length".to_string()))?;
        Ok(TransactionId(bytes))
    }
}

/// A transaction destined for inclusion in a block.
/// Immutable once created: execution components never alter its content,
/// they only decide where and how it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// identity of the transaction
    pub id: TransactionId,
    /// sender address
    pub from: Address,
    /// target contract address
    pub to: Address,
    /// name of the contract method to invoke
    pub method_name: String,
    /// serialized call arguments
    pub params: Vec<u8>,
}
