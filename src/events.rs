//! Typed chain-event input records
//!
//! This module defines the boundary with the event-delivery layer. The
//! delivery layer decodes raw chain logs into these typed records and
//! invokes the projection engine once per on-chain log entry, in canonical
//! block/transaction/log-index order. Payload values are passed through
//! as-is; chain data is assumed well-formed by the upstream decoder.

use ethers::types::{Address, Bytes, H256, U256};
use serde::{Deserialize, Serialize};

/// Provenance shared by every chain event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMeta {
    /// Contract address that emitted the event
    pub address: Address,

    /// Number of the block containing the event
    pub block_number: u64,

    /// Hash of the transaction containing the event
    pub transaction_hash: H256,

    /// Position of the log within the transaction
    pub log_index: u64,
}

/// A decoded resolver contract event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverEvent {
    /// Event provenance
    pub meta: EventMeta,

    /// Node the event applies to
    pub node: H256,

    /// Event-specific payload
    pub payload: EventPayload,
}

/// Payload of a resolver contract event, one variant per log signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventPayload {
    /// The resolver's primary resolved address changed
    AddrChanged {
        /// Newly resolved address
        addr: Address,
    },

    /// The ABI definition for a content type changed
    AbiChanged {
        /// Content type of the ABI definition
        content_type: U256,
    },

    /// The public key for the node changed
    PubkeyChanged {
        /// X coordinate of the public key
        x: H256,
        /// Y coordinate of the public key
        y: H256,
    },

    /// A text record was set
    TextChanged {
        /// Text record key
        key: String,
    },

    /// The content hash for the node changed
    ContenthashChanged {
        /// New content hash
        hash: Bytes,
    },

    /// The implementer for an interface changed
    InterfaceChanged {
        /// Four-byte interface identifier
        interface_id: [u8; 4],
        /// Address of the implementing contract
        implementer: Address,
    },

    /// A delegated authorisation was granted or revoked
    AuthorisationChanged {
        /// Owner granting or revoking the authorisation
        owner: Address,
        /// Target of the authorisation
        target: Address,
        /// Whether the target is now authorised
        is_authorised: bool,
    },

    /// A multicoin address changed
    AddressChanged {
        /// Coin type the address belongs to
        coin_type: U256,
        /// New address bytes for the coin type
        new_address: Bytes,
    },
}

impl EventPayload {
    /// Name of the source log signature, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            EventPayload::AddrChanged { .. } => "AddrChanged",
            EventPayload::AbiChanged { .. } => "AbiChanged",
            EventPayload::PubkeyChanged { .. } => "PubkeyChanged",
            EventPayload::TextChanged { .. } => "TextChanged",
            EventPayload::ContenthashChanged { .. } => "ContenthashChanged",
            EventPayload::InterfaceChanged { .. } => "InterfaceChanged",
            EventPayload::AuthorisationChanged { .. } => "AuthorisationChanged",
            EventPayload::AddressChanged { .. } => "AddressChanged",
        }
    }
}
