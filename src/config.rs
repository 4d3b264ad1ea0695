//! Configuration for the resolver indexer
//!
//! This module provides configuration for the ingestion run: which data
//! source the events come from and how the batch driver reports progress.

use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Data source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Name of the network the events come from
    pub network: String,

    /// Address of the resolver contract being indexed
    pub address: Address,

    /// First block the projection should consider; events below it are
    /// skipped by the batch driver
    pub start_block: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            network: "mainnet".to_string(),
            address: Address::zero(),
            start_block: 0,
        }
    }
}

/// Indexer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexerConfig {
    /// Data source configuration
    pub source: SourceConfig,

    /// Emit a progress log line every this many processed events; zero
    /// disables progress logging
    pub progress_log_interval: u64,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        IndexerConfig {
            source: SourceConfig::default(),
            progress_log_interval: 1_000,
        }
    }
}
