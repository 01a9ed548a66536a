//! Hash functions for open-addressing tables
//!
//! A table needs nothing from its hash function beyond determinism: for a
//! given key value the same code must come back every time, because the
//! probe sequence is re-derived from it on every lookup. Distribution
//! quality only affects probe counts, never correctness.
//!
//! The default implementation wraps [`ahash`] with fixed seeds so that
//! probe measurements are reproducible across runs. Double hashing uses a
//! second instance with its own seeds (see [`SeededHash::secondary`]).

use std::hash::{BuildHasher, Hash, Hasher};

/// Maps a key to a 64-bit hash code.
///
/// Implementations must be pure: equal keys hash equally, and repeated
/// calls on the same key return the same code for the lifetime of the
/// value. A table captures its hash function at construction and treats it
/// as immutable configuration from then on.
pub trait HashFunction<K: ?Sized> {
    /// Compute the hash code for `key`.
    fn hash(&self, key: &K) -> u64;
}

// Fixed seed material: fractional bits of pi for the primary instance and
// of e for the secondary, so the two are documented and independent.
const PRIMARY_SEEDS: [u64; 4] = [
    0x243f_6a88_85a3_08d3,
    0x1319_8a2e_0370_7344,
    0xa409_3822_299f_31d0,
    0x082e_fa98_ec4e_6c89,
];
const SECONDARY_SEEDS: [u64; 4] = [
    0xb7e1_5162_8aed_2a6a,
    0xbf71_5880_9cf4_f3c7,
    0x6295_35a0_8a51_407d,
    0xa18c_2e1c_e0b4_2efc,
];

/// Deterministic [`ahash`]-backed hash function.
///
/// Unlike `ahash::RandomState::new()`, which picks per-process random keys,
/// this wrapper always starts from the same documented seeds, so hash codes
/// (and therefore probe counts) are stable between runs. Use
/// [`SeededHash::with_seeds`] to pick different seed material.
#[derive(Debug, Clone)]
pub struct SeededHash {
    state: ahash::RandomState,
}

impl SeededHash {
    /// Create the primary hash function with the default seeds.
    pub fn new() -> Self {
        let [k0, k1, k2, k3] = PRIMARY_SEEDS;
        Self::with_seeds(k0, k1, k2, k3)
    }

    /// Create the companion hash function used as the step source for
    /// double hashing; seeded independently from [`SeededHash::new`].
    pub fn secondary() -> Self {
        let [k0, k1, k2, k3] = SECONDARY_SEEDS;
        Self::with_seeds(k0, k1, k2, k3)
    }

    /// Create a hash function from explicit seed material.
    pub fn with_seeds(k0: u64, k1: u64, k2: u64, k3: u64) -> Self {
        Self {
            state: ahash::RandomState::with_seeds(k0, k1, k2, k3),
        }
    }
}

impl Default for SeededHash {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + ?Sized> HashFunction<K> for SeededHash {
    fn hash(&self, key: &K) -> u64 {
        let mut hasher = self.state.build_hasher();
        key.hash(&mut hasher);
        hasher.finish()
    }
}
