//! # Resolver Event Projection Engine
//!
//! Projects the log events of a name-resolution contract into a queryable
//! entity graph: mutable current-state entities (accounts, resolver
//! instances, domain linkage) plus an immutable audit record per observed
//! event. Entity identity is derived purely from event contents, so
//! replaying the identical event sequence is safe by construction.
//!
//! The persistent store is an external collaborator reached through the
//! [`store::EntityStore`] trait; the crate ships an in-memory adapter for
//! tests and lightweight embedders.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod error;
pub mod events;
pub mod ids;
pub mod models;
pub mod processor;
pub mod projection;
pub mod store;

/// Re-export common types for ease of use
pub use config::{IndexerConfig, SourceConfig};
pub use error::{IndexerError, Result};
pub use events::{EventMeta, EventPayload, ResolverEvent};
pub use models::{Account, AccretingSet, Domain, EventRecord, Resolver};
pub use processor::{EventProcessor, IngestStats};
pub use projection::ProjectionEngine;
pub use store::{EntityStore, InMemoryStore};

/// Version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
