//! Projection engine
//!
//! Per-event-type handlers that turn resolver contract events into entity
//! mutations plus an immutable audit record. Every handler follows the same
//! shape: resolve or create the resolver entity, apply its field mutation,
//! persist the resolver when its contract says so, then unconditionally
//! persist one audit record for the observed event.
//!
//! Handlers are idempotent under at-least-once redelivery of the identical
//! event sequence: entity ids are derived purely from event contents and
//! the set-valued fields reject duplicates.

use ethers::types::{Address, Bytes, H256, U256};
use log::debug;

use crate::error::Result;
use crate::events::{EventMeta, EventPayload, ResolverEvent};
use crate::ids;
use crate::models::{Account, EventRecord, Resolver};
use crate::store::EntityStore;

/// Projects resolver contract events onto the entity store
pub struct ProjectionEngine<S: EntityStore> {
    store: S,
}

impl<S: EntityStore> ProjectionEngine<S> {
    /// Create an engine over the given store
    pub fn new(store: S) -> Self {
        ProjectionEngine { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consume the engine, returning the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    /// Apply a decoded chain event to the entity graph
    pub fn apply(&mut self, event: &ResolverEvent) -> Result<()> {
        debug!(
            "applying {} for node {} at block {} (tx {}, log {})",
            event.payload.kind(),
            ids::hex_hash(&event.node),
            event.meta.block_number,
            ids::hex_hash(&event.meta.transaction_hash),
            event.meta.log_index
        );

        let meta = &event.meta;
        let node = &event.node;
        match &event.payload {
            EventPayload::AddrChanged { addr } => self.handle_addr_changed(meta, node, addr),
            EventPayload::AbiChanged { content_type } => {
                self.handle_abi_changed(meta, node, content_type)
            }
            EventPayload::PubkeyChanged { x, y } => self.handle_pubkey_changed(meta, node, x, y),
            EventPayload::TextChanged { key } => self.handle_text_changed(meta, node, key),
            EventPayload::ContenthashChanged { hash } => {
                self.handle_contenthash_changed(meta, node, hash)
            }
            EventPayload::InterfaceChanged {
                interface_id,
                implementer,
            } => self.handle_interface_changed(meta, node, *interface_id, implementer),
            EventPayload::AuthorisationChanged {
                owner,
                target,
                is_authorised,
            } => self.handle_authorisation_changed(meta, node, owner, target, *is_authorised),
            EventPayload::AddressChanged {
                coin_type,
                new_address,
            } => self.handle_address_changed(meta, node, coin_type, new_address),
        }
    }

    /// Handle a primary resolved-address change
    ///
    /// Upserts the account for the resolved address, updates the resolver's
    /// `addr` field, and updates the parent domain's resolved address only
    /// when the domain currently designates this resolver as authoritative.
    pub fn handle_addr_changed(
        &mut self,
        meta: &EventMeta,
        node: &H256,
        addr: &Address,
    ) -> Result<()> {
        self.store.put_account(&Account::new(addr))?;

        let (mut resolver, _) = self.load_or_new(node, &meta.address)?;
        resolver.addr = Some(*addr);
        self.store.put_resolver(&resolver)?;

        if let Some(mut domain) = self.store.get_domain(&resolver.domain)? {
            if domain.resolver.as_deref() == Some(resolver.id.as_str()) {
                domain.resolved_address = Some(*addr);
                self.store.put_domain(&domain)?;
            }
        }

        self.record(
            meta,
            &resolver,
            ids::event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::AddrChanged { addr: *addr },
        )
    }

    /// Handle an ABI definition change; audit-only on the resolver
    pub fn handle_abi_changed(
        &mut self,
        meta: &EventMeta,
        node: &H256,
        content_type: &U256,
    ) -> Result<()> {
        let (resolver, created) = self.load_or_new(node, &meta.address)?;
        if created {
            self.store.put_resolver(&resolver)?;
        }

        self.record(
            meta,
            &resolver,
            ids::event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::AbiChanged {
                content_type: *content_type,
            },
        )
    }

    /// Handle a public key change; audit-only on the resolver
    pub fn handle_pubkey_changed(
        &mut self,
        meta: &EventMeta,
        node: &H256,
        x: &H256,
        y: &H256,
    ) -> Result<()> {
        let (resolver, created) = self.load_or_new(node, &meta.address)?;
        if created {
            self.store.put_resolver(&resolver)?;
        }

        self.record(
            meta,
            &resolver,
            ids::event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::PubkeyChanged { x: *x, y: *y },
        )
    }

    /// Handle a text record change
    ///
    /// Appends the key to the resolver's text set. The resolver is saved
    /// only if the set changed or was just initialized; a replayed key
    /// causes no additional write.
    pub fn handle_text_changed(&mut self, meta: &EventMeta, node: &H256, key: &str) -> Result<()> {
        let (mut resolver, _) = self.load_or_new(node, &meta.address)?;
        if resolver.texts.initialize_or_append(key.to_string()) {
            self.store.put_resolver(&resolver)?;
        }

        self.record(
            meta,
            &resolver,
            ids::event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::TextChanged {
                key: key.to_string(),
            },
        )
    }

    /// Handle a content hash change; the hash is overwritten unconditionally
    pub fn handle_contenthash_changed(
        &mut self,
        meta: &EventMeta,
        node: &H256,
        hash: &Bytes,
    ) -> Result<()> {
        let (mut resolver, _) = self.load_or_new(node, &meta.address)?;
        resolver.content_hash = Some(hash.clone());
        self.store.put_resolver(&resolver)?;

        self.record(
            meta,
            &resolver,
            ids::event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::ContenthashChanged { hash: hash.clone() },
        )
    }

    /// Handle an interface implementer change; audit-only on the resolver
    pub fn handle_interface_changed(
        &mut self,
        meta: &EventMeta,
        node: &H256,
        interface_id: [u8; 4],
        implementer: &Address,
    ) -> Result<()> {
        let (resolver, created) = self.load_or_new(node, &meta.address)?;
        if created {
            self.store.put_resolver(&resolver)?;
        }

        self.record(
            meta,
            &resolver,
            ids::event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::InterfaceChanged {
                interface_id,
                implementer: *implementer,
            },
        )
    }

    /// Handle an authorisation change; audit-only on the resolver
    pub fn handle_authorisation_changed(
        &mut self,
        meta: &EventMeta,
        node: &H256,
        owner: &Address,
        target: &Address,
        is_authorised: bool,
    ) -> Result<()> {
        let (resolver, created) = self.load_or_new(node, &meta.address)?;
        if created {
            self.store.put_resolver(&resolver)?;
        }

        self.record(
            meta,
            &resolver,
            ids::event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::AuthorisationChanged {
                owner: *owner,
                target: *target,
                is_authorised,
            },
        )
    }

    /// Handle a multicoin address change
    ///
    /// Appends the coin type to the resolver's coin type set under the same
    /// save-iff-changed contract as text records. The audit record id
    /// carries a disambiguation suffix because these logs can share a
    /// transaction hash and log index with AddrChanged logs.
    pub fn handle_address_changed(
        &mut self,
        meta: &EventMeta,
        node: &H256,
        coin_type: &U256,
        new_address: &Bytes,
    ) -> Result<()> {
        let (mut resolver, _) = self.load_or_new(node, &meta.address)?;
        if resolver.coin_types.initialize_or_append(*coin_type) {
            self.store.put_resolver(&resolver)?;
        }

        self.record(
            meta,
            &resolver,
            ids::multicoin_event_id(&meta.transaction_hash, meta.log_index),
            EventPayload::AddressChanged {
                coin_type: *coin_type,
                new_address: new_address.clone(),
            },
        )
    }

    /// Load the resolver for the (node, address) pair, or construct a fresh
    /// unsaved one
    ///
    /// Returns the resolver and whether it was just constructed. Absence of
    /// a prior resolver is a normal case, not a failure; the caller decides
    /// whether and when the new entity is persisted.
    fn load_or_new(&self, node: &H256, address: &Address) -> Result<(Resolver, bool)> {
        let id = ids::resolver_id(node, address);
        match self.store.get_resolver(&id)? {
            Some(resolver) => Ok((resolver, false)),
            None => Ok((Resolver::new(node, address), true)),
        }
    }

    /// Persist the audit record for an observed event
    fn record(
        &mut self,
        meta: &EventMeta,
        resolver: &Resolver,
        id: String,
        payload: EventPayload,
    ) -> Result<()> {
        self.store
            .put_event(&EventRecord::new(id, &resolver.id, meta, payload))
    }
}
