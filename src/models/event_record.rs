//! Audit event record entity
//!
//! One immutable record per processed chain event, capturing the payload
//! and provenance. The trail records events observed, not state changes
//! caused: a record is written even when the event changed no entity field.

use ethers::types::H256;
use serde::{Deserialize, Serialize};

use crate::events::{EventMeta, EventPayload};

/// An immutable audit entry for one processed chain event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Deterministic id derived from the source transaction and log index
    pub id: String,

    /// Id of the resolver the event affected
    pub resolver: String,

    /// Number of the block containing the event
    pub block_number: u64,

    /// Hash of the transaction containing the event
    pub transaction_id: H256,

    /// Payload of the observed event
    pub payload: EventPayload,
}

impl EventRecord {
    /// Create an audit record for a chain event
    pub fn new(id: String, resolver: &str, meta: &EventMeta, payload: EventPayload) -> Self {
        EventRecord {
            id,
            resolver: resolver.to_string(),
            block_number: meta.block_number,
            transaction_id: meta.transaction_hash,
            payload,
        }
    }
}
