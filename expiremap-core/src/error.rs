//! Error types for map construction.

use thiserror::Error;

/// Errors reported when a [`MapConfig`](crate::MapConfig) cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The map needs at least one shard
    #[error("shard amount must be greater than zero")]
    ZeroShards,

    /// The shard count is used as a hash mask
    #[error("shard amount must be a power of two greater than one, got {0}")]
    ShardsNotPowerOfTwo(usize),
}
