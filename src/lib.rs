//! # Probemap: Instrumented Open-Addressing Hash Tables
//!
//! This crate provides a generic open-addressing hash table whose collision
//! resolution and hashing are pluggable policies, instrumented so that every
//! slot visit is counted and observable.
//!
//! ## Key Features
//!
//! - **Open Addressing**: all entries live in one backing array; collisions
//!   probe alternate slots instead of chaining externally
//! - **Pluggable Probing**: linear probing and double hashing out of the
//!   box, both upholding the full-cycle guarantee; custom strategies plug
//!   in through a trait
//! - **Pluggable Hashing**: any deterministic key hash works; the default
//!   is AHash with fixed, documented seeds for reproducible measurements
//! - **Probe Instrumentation**: a cumulative, resettable counter of slots
//!   visited across inserts, lookups, removals, and rehashes
//! - **Tombstone Deletion**: removals leave markers that keep probe chains
//!   intact and are reclaimed by later inserts
//! - **Safe Growth**: load-factor-driven resizing that re-aligns capacity
//!   to the active strategy's discipline (primes for double hashing)
//!
//! ## Quick Start
//!
//! ```rust
//! use probemap::{DoubleHashing, OpenHashMap};
//!
//! // Linear probing with the default deterministic hash
//! let mut map: OpenHashMap<&str, u32> = OpenHashMap::new();
//! map.insert("hello", 1).unwrap();
//! map.insert("world", 2).unwrap();
//! assert_eq!(map.get(&"hello"), Some(&1));
//!
//! // Double hashing, with probe counts for measurement
//! let mut table: OpenHashMap<&str, u32, DoubleHashing> =
//!     OpenHashMap::with_probing(DoubleHashing::new());
//! table.insert("alpha", 10).unwrap();
//! table.clear_total_probes();
//! assert_eq!(table.get(&"alpha"), Some(&10));
//! assert!(table.total_probes() >= 1);
//! ```
//!
//! ## Concurrency
//!
//! Tables are single-threaded by design: no operation blocks, yields, or
//! performs I/O, and no internal locking exists. The probe counter uses
//! interior mutability, so a table is not `Sync`; callers that need shared
//! access must wrap it in their own synchronization.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod error;
pub mod hash_map;

// Re-export core types
pub use error::{ProbeMapError, Result};
pub use hash_map::{
    DoubleHashing, HashFunction, LinearProbing, OpenHashMap, OpenHashMapConfig, ProbeStats,
    ProbingStrategy, SeededHash,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing probemap v{}", VERSION);
}
