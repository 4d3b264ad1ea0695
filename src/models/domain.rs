//! Domain entity
//!
//! Domains are owned by a separate subsystem; the projection engine never
//! creates one. It reads the domain for a node and updates its resolved
//! address only when the domain currently designates the acting resolver
//! as authoritative.

use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

use crate::ids;

/// A named node record, owned externally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Lowercase hex form of the node hash
    pub id: String,

    /// Id of the domain's currently active resolver, if any
    pub resolver: Option<String>,

    /// Address the active resolver last resolved for this domain
    pub resolved_address: Option<Address>,
}

impl Domain {
    /// Create a domain entity for the given node with no resolver assigned
    pub fn new(node: &H256) -> Self {
        Domain {
            id: ids::hex_hash(node),
            resolver: None,
            resolved_address: None,
        }
    }
}
