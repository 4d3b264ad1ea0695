//! Resolver entity
//!
//! A resolver entity is the binding of a resolver contract instance to a
//! specific node; the (address, node) pair is the unit of state the
//! projection maintains. Scalar fields are last-write-wins; the set-valued
//! fields only ever accrete.

use std::collections::BTreeSet;

use ethers::types::{Address, Bytes, H256, U256};
use serde::{Deserialize, Serialize};

use crate::ids;

/// A set-valued resolver field that begins life unset
///
/// The wrapper distinguishes "never observed" from "observed empty" and
/// exposes a single mutation entry point whose changed-flag drives the
/// caller's conditional persistence. Duplicates are rejected, so replaying
/// the identical chain event leaves the set untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccretingSet<T: Ord>(Option<BTreeSet<T>>);

impl<T: Ord> AccretingSet<T> {
    /// Create an unset field
    pub fn new() -> Self {
        AccretingSet(None)
    }

    /// Add a value, initializing the set on first use
    ///
    /// Returns true if the field changed: either the set was just
    /// initialized or the value was not yet a member.
    pub fn initialize_or_append(&mut self, value: T) -> bool {
        match self.0.as_mut() {
            None => {
                let mut set = BTreeSet::new();
                set.insert(value);
                self.0 = Some(set);
                true
            }
            Some(set) => set.insert(value),
        }
    }

    /// Whether the field has been initialized
    pub fn is_initialized(&self) -> bool {
        self.0.is_some()
    }

    /// Whether the set contains the given value
    pub fn contains(&self, value: &T) -> bool {
        self.0.as_ref().is_some_and(|set| set.contains(value))
    }

    /// Number of members; zero while unset
    pub fn len(&self) -> usize {
        self.0.as_ref().map_or(0, BTreeSet::len)
    }

    /// Whether the set is unset or has no members
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the members in deterministic order
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }
}

impl<T: Ord> Default for AccretingSet<T> {
    fn default() -> Self {
        AccretingSet::new()
    }
}

/// A resolver contract instance bound to a node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolver {
    /// Composite id, `{address}-{node}`
    pub id: String,

    /// Lowercase hex form of the node hash, referencing the domain
    pub domain: String,

    /// Address of the resolver contract
    pub address: Address,

    /// Last resolved primary address
    pub addr: Option<Address>,

    /// Last observed content hash
    pub content_hash: Option<Bytes>,

    /// Text record keys observed for this resolver
    pub texts: AccretingSet<String>,

    /// Multicoin types observed for this resolver
    pub coin_types: AccretingSet<U256>,
}

impl Resolver {
    /// Create a resolver entity for the given node and contract address
    ///
    /// All optional fields start unset; the caller decides when the new
    /// entity is persisted.
    pub fn new(node: &H256, address: &Address) -> Self {
        Resolver {
            id: ids::resolver_id(node, address),
            domain: ids::hex_hash(node),
            address: *address,
            addr: None,
            content_hash: None,
            texts: AccretingSet::new(),
            coin_types: AccretingSet::new(),
        }
    }
}
