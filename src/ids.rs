//! Deterministic identity derivation for entities and audit records
//!
//! Entity and audit record keys are derived purely from event contents so
//! that reprocessing the same chain events always addresses the same
//! entities, independent of processing order or any host-assigned counter.

use ethers::types::{Address, H256};

/// Suffix appended to multicoin address-change record ids. AddrChanged and
/// AddressChanged logs can share a transaction hash and log index, so the
/// raw derivation alone would collide.
const MULTICOIN_SUFFIX: char = 'M';

/// Canonical lowercase 0x-prefixed hex form of an address
pub fn hex_address(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_bytes()))
}

/// Canonical lowercase 0x-prefixed hex form of a 32-byte hash
pub fn hex_hash(hash: &H256) -> String {
    format!("0x{}", hex::encode(hash.as_bytes()))
}

/// Derive the id of a resolver instance from its node and contract address
///
/// The id is `{address}-{node}`, address first. Both parts are fixed-width
/// hex, so the derivation is injective and order-stable.
pub fn resolver_id(node: &H256, address: &Address) -> String {
    format!("{}-{}", hex_address(address), hex_hash(node))
}

/// Derive the id of an audit record from its source chain event
///
/// Uniqueness follows from the delivery layer's ordering contract: one
/// invocation per on-chain log, identified by transaction hash and the
/// log's index within it.
pub fn event_id(transaction_hash: &H256, log_index: u64) -> String {
    format!("{}-{}", hex_hash(transaction_hash), log_index)
}

/// Derive the id of a multicoin address-change audit record
pub fn multicoin_event_id(transaction_hash: &H256, log_index: u64) -> String {
    let mut id = event_id(transaction_hash, log_index);
    id.push(MULTICOIN_SUFFIX);
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms_are_lowercase_and_prefixed() {
        let address = Address::repeat_byte(0xAB);
        let node = H256::repeat_byte(0xCD);

        assert_eq!(hex_address(&address), format!("0x{}", "ab".repeat(20)));
        assert_eq!(hex_hash(&node), format!("0x{}", "cd".repeat(32)));
    }

    #[test]
    fn test_resolver_id_format() {
        let node = H256::repeat_byte(0x12);
        let address = Address::repeat_byte(0x34);

        let id = resolver_id(&node, &address);
        assert_eq!(
            id,
            format!("0x{}-0x{}", "34".repeat(20), "12".repeat(32))
        );
    }

    #[test]
    fn test_resolver_id_is_deterministic() {
        let node = H256::repeat_byte(0x01);
        let address = Address::repeat_byte(0x02);

        assert_eq!(resolver_id(&node, &address), resolver_id(&node, &address));
    }

    #[test]
    fn test_resolver_id_distinct_inputs() {
        let address = Address::repeat_byte(0x02);

        // Different nodes for the same address must not collide
        assert_ne!(
            resolver_id(&H256::repeat_byte(0x01), &address),
            resolver_id(&H256::repeat_byte(0x03), &address)
        );

        // Different addresses for the same node must not collide
        let node = H256::repeat_byte(0x01);
        assert_ne!(
            resolver_id(&node, &Address::repeat_byte(0x02)),
            resolver_id(&node, &Address::repeat_byte(0x04))
        );
    }

    #[test]
    fn test_event_id_format() {
        let tx = H256::repeat_byte(0xEF);
        assert_eq!(event_id(&tx, 7), format!("0x{}-7", "ef".repeat(32)));
    }

    #[test]
    fn test_multicoin_event_id_does_not_collide() {
        let tx = H256::repeat_byte(0x55);

        let plain = event_id(&tx, 3);
        let multicoin = multicoin_event_id(&tx, 3);

        assert_ne!(plain, multicoin);
        assert_eq!(multicoin, format!("{}M", plain));
    }
}
