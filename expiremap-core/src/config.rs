use crate::error::ConfigError;

/// Sizing options for the underlying concurrent map
///
/// # Example
///
/// ```rust
/// use expiremap_core::MapConfig;
///
/// let config = MapConfig::default()
///     .with_initial_capacity(1024)
///     .with_shard_amount(16);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapConfig {
    /// Number of entries to pre-allocate room for (default: 0)
    pub initial_capacity: usize,
    /// Number of lock shards (default: `None`, chosen from the CPU count)
    pub shard_amount: Option<usize>,
}

impl MapConfig {
    /// Creates a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of entries to pre-allocate room for
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the number of lock shards
    ///
    /// More shards means less contention between writers touching different
    /// keys. The value must be a power of two greater than one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use expiremap_core::{ConfigError, MapConfig};
    ///
    /// let config = MapConfig::default().with_shard_amount(12);
    /// assert_eq!(config.validate(), Err(ConfigError::ShardsNotPowerOfTwo(12)));
    /// ```
    pub fn with_shard_amount(mut self, shards: usize) -> Self {
        self.shard_amount = Some(shards);
        self
    }

    /// Checks that the configuration can be used to build a map
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.shard_amount {
            None => Ok(()),
            Some(0) => Err(ConfigError::ZeroShards),
            Some(n) if n < 2 || !n.is_power_of_two() => Err(ConfigError::ShardsNotPowerOfTwo(n)),
            Some(_) => Ok(()),
        }
    }
}
