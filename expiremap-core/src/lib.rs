//! # Expiremap Core
//!
//! An in-process string key-value map where each entry may carry an
//! absolute expiration time.
//!
//! ## Features
//!
//! - Thread-safe storage using `DashMap` (sharded reader/writer locks)
//! - Lazy expiration: deadlines are checked on read, never in the background
//! - Whole-second deadline comparison against the wall clock
//! - Explicit `Option<SystemTime>` deadlines, `None` meaning "never expires"
//! - All data stored as strings
//!
//! ## Example
//!
//! ```rust
//! use expiremap_core::ExpiringMap;
//! use std::time::{Duration, SystemTime};
//!
//! let map = ExpiringMap::new();
//!
//! // Never expires
//! map.put("user:123", "John Doe");
//!
//! // Expires at an absolute point in time
//! map.put_till("session:abc", "token", SystemTime::now() + Duration::from_secs(300));
//!
//! if let Some(value) = map.get("user:123") {
//!     println!("User: {}", value);
//! }
//!
//! for key in map.keys() {
//!     println!("live key: {}", key);
//! }
//!
//! // Expired entries keep their slot until purged or overwritten
//! let removed = map.purge_expired();
//! assert_eq!(removed, 0);
//! ```

mod clock;
mod config;
mod entry;
mod error;
mod map;

pub use config::MapConfig;
pub use entry::Entry;
pub use error::ConfigError;
pub use map::ExpiringMap;
