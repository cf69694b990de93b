// Copyright (c) 2025 TESSERA LABS <info@tessera.network>

//! This file defines the address type used for both account senders and
//! contract targets.

use crate::error::ModelsError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Size in bytes of a serialized address
pub const ADDRESS_SIZE_BYTES: usize = 32;

/// An account or contract address
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_SIZE_BYTES]);

impl Address {
    /// Creates an address from raw bytes
    pub const fn new(bytes: [u8; ADDRESS_SIZE_BYTES]) -> Self {
        Address(bytes)
    }

    /// Returns the underlying bytes
    pub fn to_bytes(&self) -> &[u8; ADDRESS_SIZE_BYTES] {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", bs58::encode(self.0).with_check().into_string())
    }
}

impl FromStr for Address {
    type Err = ModelsError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|err| ModelsError::InvalidIdFormat(format!("address: {}", err)))?;
        let bytes: [u8; ADDRESS_SIZE_BYTES] = decoded
            .try_into()
            .map_err(|_| ModelsError::InvalidIdFormat("address: invalid length".to_string()))?;
        Ok(Address(bytes))
    }
}
