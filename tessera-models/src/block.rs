// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This file defines block hashes and the chain context describing the state
//! baseline against which a batch of transactions is executed.

use crate::error::ModelsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Size in bytes of a serialized block hash
pub const BLOCK_HASH_SIZE_BYTES: usize = 32;

/// Hash identifying a block
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BlockHash([u8; BLOCK_HASH_SIZE_BYTES]);

impl BlockHash {
    /// Creates a block hash from raw bytes
    pub const fn new(bytes: [u8; BLOCK_HASH_SIZE_BYTES]) -> Self {
        BlockHash(bytes)
    }

    /// Returns the underlying bytes
    pub fn to_bytes(&self) -> &[u8; BLOCK_HASH_SIZE_BYTES] {
        &self.0
    }
}

impl std::fmt::Display for BlockHash {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", bs58::encode(self.0).with_check().into_string())
    }
}

impl FromStr for BlockHash {
    type Err = ModelsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|err| ModelsError::InvalidIdFormat(format!("block hash: {}", err)))?;
        let bytes: [u8; BLOCK_HASH_SIZE_BYTES] = decoded
            .try_into()
            .map_err(|_| ModelsError::InvalidIdFormat("block hash: invalid length".to_string()))?;
        Ok(BlockHash(bytes))
    }
}

/// Describes the current best block used as the execution baseline.
/// The committed state snapshot attached to it must never be mutated
/// while a batch referencing this context is being executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainContext {
    /// hash of the current best block
    pub best_block_hash: BlockHash,
    /// height of the current best block
    pub best_block_height: u64,
}

impl ChainContext {
    /// Creates a chain context from the current best block descriptor
    pub fn new(best_block_hash: BlockHash, best_block_height: u64) -> Self {
        ChainContext {
            best_block_hash,
            best_block_height,
        }
    }
}
