//! Account entity
//!
//! An account records that an address has been observed as a resolved
//! target. Its existence is the fact being recorded; there is no other
//! state, and re-creating an existing account is a safe no-op overwrite.

use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::ids;

/// An address observed as a resolved target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Lowercase hex form of the address
    pub id: String,
}

impl Account {
    /// Create an account entity for the given address
    pub fn new(address: &Address) -> Self {
        Account {
            id: ids::hex_address(address),
        }
    }
}
