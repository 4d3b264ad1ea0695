//! Entity models for the resolver projection
//!
//! This module provides the entity graph the projection maintains:
//! accounts, resolvers, domains, and the immutable audit event records.

mod account;
mod domain;
mod event_record;
mod resolver;

pub use account::Account;
pub use domain::Domain;
pub use event_record::EventRecord;
pub use resolver::{AccretingSet, Resolver};
