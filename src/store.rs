//! Entity store boundary
//!
//! The projection engine accesses the persistent store through the
//! [`EntityStore`] capability trait injected at construction. All access is
//! point lookup or idempotent full-overwrite upsert by key; the engine
//! never deletes entities and never issues range queries. A failed store
//! operation is terminal for the event being processed and propagates to
//! the host loop.

use std::collections::HashMap;

use crate::error::Result;
use crate::models::{Account, Domain, EventRecord, Resolver};

/// Capability trait for the entity store used by the projection engine
pub trait EntityStore {
    /// Load a resolver by id, or None if absent
    fn get_resolver(&self, id: &str) -> Result<Option<Resolver>>;

    /// Upsert a resolver, overwriting its full field set
    fn put_resolver(&mut self, resolver: &Resolver) -> Result<()>;

    /// Upsert an account
    fn put_account(&mut self, account: &Account) -> Result<()>;

    /// Load a domain by node id, or None if absent
    fn get_domain(&self, id: &str) -> Result<Option<Domain>>;

    /// Upsert a domain
    fn put_domain(&mut self, domain: &Domain) -> Result<()>;

    /// Append an audit event record
    fn put_event(&mut self, record: &EventRecord) -> Result<()>;
}

/// In-memory entity store
///
/// Backs tests and lightweight embedders. Resolver upserts are counted so
/// the engine's conditional-persistence contracts are observable through
/// the save-call count.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    resolvers: HashMap<String, Resolver>,
    accounts: HashMap<String, Account>,
    domains: HashMap<String, Domain>,
    events: HashMap<String, EventRecord>,
    resolver_saves: u64,
}

impl InMemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        InMemoryStore::default()
    }

    /// Number of resolver upserts performed so far
    pub fn resolver_save_count(&self) -> u64 {
        self.resolver_saves
    }

    /// Number of audit records stored
    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Look up a stored resolver without going through the trait
    pub fn resolver(&self, id: &str) -> Option<&Resolver> {
        self.resolvers.get(id)
    }

    /// Look up a stored account
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Look up a stored domain
    pub fn domain(&self, id: &str) -> Option<&Domain> {
        self.domains.get(id)
    }

    /// Look up a stored audit record
    pub fn event(&self, id: &str) -> Option<&EventRecord> {
        self.events.get(id)
    }
}

impl EntityStore for InMemoryStore {
    fn get_resolver(&self, id: &str) -> Result<Option<Resolver>> {
        Ok(self.resolvers.get(id).cloned())
    }

    fn put_resolver(&mut self, resolver: &Resolver) -> Result<()> {
        self.resolver_saves += 1;
        self.resolvers.insert(resolver.id.clone(), resolver.clone());
        Ok(())
    }

    fn put_account(&mut self, account: &Account) -> Result<()> {
        self.accounts.insert(account.id.clone(), account.clone());
        Ok(())
    }

    fn get_domain(&self, id: &str) -> Result<Option<Domain>> {
        Ok(self.domains.get(id).cloned())
    }

    fn put_domain(&mut self, domain: &Domain) -> Result<()> {
        self.domains.insert(domain.id.clone(), domain.clone());
        Ok(())
    }

    fn put_event(&mut self, record: &EventRecord) -> Result<()> {
        self.events.insert(record.id.clone(), record.clone());
        Ok(())
    }
}
