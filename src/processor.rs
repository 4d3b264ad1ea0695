//! Ordered batch driver
//!
//! Consumes decoded chain events in delivery order and applies them through
//! the projection engine. Events below the configured start block are
//! skipped; the first handler error stops the run and propagates, so a
//! failed store write is never silently passed over.

use log::{debug, info};

use crate::config::IndexerConfig;
use crate::error::Result;
use crate::events::ResolverEvent;
use crate::projection::ProjectionEngine;
use crate::store::EntityStore;

/// Counters for one ingestion run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestStats {
    /// Events applied to the entity graph
    pub processed: u64,

    /// Events skipped because they precede the start block
    pub skipped: u64,
}

/// Drives the projection engine over an ordered event stream
pub struct EventProcessor<S: EntityStore> {
    engine: ProjectionEngine<S>,
    config: IndexerConfig,
    stats: IngestStats,
}

impl<S: EntityStore> EventProcessor<S> {
    /// Create a processor over the given store and configuration
    pub fn new(store: S, config: IndexerConfig) -> Self {
        EventProcessor {
            engine: ProjectionEngine::new(store),
            config,
            stats: IngestStats::default(),
        }
    }

    /// Borrow the projection engine
    pub fn engine(&self) -> &ProjectionEngine<S> {
        &self.engine
    }

    /// Counters accumulated so far
    pub fn stats(&self) -> IngestStats {
        self.stats
    }

    /// Consume the processor, returning the underlying store
    pub fn into_store(self) -> S {
        self.engine.into_store()
    }

    /// Apply a batch of events in delivery order
    ///
    /// Returns the accumulated counters. Stops at the first handler error;
    /// the caller owns any retry or restart policy.
    pub fn process<I>(&mut self, events: I) -> Result<IngestStats>
    where
        I: IntoIterator<Item = ResolverEvent>,
    {
        for event in events {
            if event.meta.block_number < self.config.source.start_block {
                debug!(
                    "skipping {} at block {} below start block {}",
                    event.payload.kind(),
                    event.meta.block_number,
                    self.config.source.start_block
                );
                self.stats.skipped += 1;
                continue;
            }

            self.engine.apply(&event)?;
            self.stats.processed += 1;

            let interval = self.config.progress_log_interval;
            if interval > 0 && self.stats.processed % interval == 0 {
                info!(
                    "processed {} events on {} (at block {})",
                    self.stats.processed, self.config.source.network, event.meta.block_number
                );
            }
        }

        Ok(self.stats)
    }
}
