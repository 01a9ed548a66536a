//! Open-addressing hash tables with pluggable probing strategies
//!
//! This module provides the instrumented hash table and its policy pieces:
//! - [`OpenHashMap`]: the table engine, generic over probing strategy and
//!   hash function
//! - [`LinearProbing`] and [`DoubleHashing`]: the built-in probing
//!   strategies, both with the full-cycle guarantee
//! - [`SeededHash`]: deterministic default hash function backed by AHash
//! - [`Slot`] / [`SlotStore`]: the tri-state backing array

mod hash_functions;
mod open_hash_map;
mod probing;
mod slot;

pub use hash_functions::{HashFunction, SeededHash};
pub use open_hash_map::{Iter, OpenHashMap, OpenHashMapConfig, ProbeStats};
pub use probing::{DoubleHashing, LinearProbing, ProbingStrategy, MIN_CAPACITY};
pub use slot::{Entry, Slot, SlotStore};
