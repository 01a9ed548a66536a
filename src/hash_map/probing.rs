//! Probing strategies for collision resolution
//!
//! A probing strategy turns (key, hash code, attempt) into a candidate slot
//! index. The contract every implementation must uphold is the full-cycle
//! guarantee: for a fixed key and capacity, attempts `0..capacity` visit a
//! permutation of `0..capacity`, so a free slot is always reachable while
//! one exists.
//!
//! Strategies also own their capacity discipline through
//! [`ProbingStrategy::align_capacity`]. Linear probing cycles at any
//! capacity; double hashing only cycles when the step is coprime with the
//! capacity, which this implementation guarantees by aligning capacities to
//! primes and clamping the step into `[1, capacity - 1]`.

use crate::hash_map::hash_functions::{HashFunction, SeededHash};

/// Smallest backing-array capacity any table will allocate.
pub const MIN_CAPACITY: usize = 4;

/// Prime numbers used for capacity alignment under double hashing
const PRIMES: &[usize] = &[
    5, 11, 23, 47, 97, 199, 409, 823, 1741, 3469, 6949, 14033, 28411, 57557, 116731, 236897,
    480881, 976369, 1982627, 4026031, 8175383, 16601593, 33712729, 68460391, 139022417, 282312799,
    573292817, 1164186217,
];

/// Get the next prime greater than or equal to `n`.
///
/// Capacities past the precomputed table are found by trial division; a
/// power-of-two fallback is not acceptable here because an even capacity
/// breaks the coprimality requirement for even steps.
fn next_prime(n: usize) -> usize {
    for &prime in PRIMES {
        if prime >= n {
            return prime;
        }
    }
    let mut candidate = n | 1;
    while !is_prime(candidate) {
        candidate += 2;
    }
    candidate
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Enumerates the candidate slots for a key.
///
/// `probe` must be deterministic in all arguments, and for
/// `attempt = 0..capacity` must enumerate every index in `0..capacity`
/// exactly once. Implementations advertise which capacities preserve that
/// property via `align_capacity`; tables route every requested capacity,
/// initial and resized, through it.
pub trait ProbingStrategy<K: ?Sized> {
    /// Candidate slot for the given attempt. `attempt` ranges over
    /// `0..capacity`.
    fn probe(&self, key: &K, hash: u64, attempt: usize, capacity: usize) -> usize;

    /// Round a requested capacity up to the nearest one this strategy can
    /// fully cycle over.
    fn align_capacity(&self, requested: usize) -> usize;
}

/// Linear probing: slot `(hash + attempt) mod capacity`.
///
/// Trivially full-cycle at every capacity. Runs of occupied slots grow
/// probe lengths disproportionately under load (primary clustering), which
/// is exactly the effect the probe counter makes visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProbing;

impl<K: ?Sized> ProbingStrategy<K> for LinearProbing {
    fn probe(&self, _key: &K, hash: u64, attempt: usize, capacity: usize) -> usize {
        ((hash % capacity as u64) as usize + attempt) % capacity
    }

    fn align_capacity(&self, requested: usize) -> usize {
        requested.max(MIN_CAPACITY)
    }
}

/// Double hashing: slot `(hash + attempt * step) mod capacity`, with the
/// step derived from an independent secondary hash of the key.
///
/// The step is forced into `[1, capacity - 1]` and `align_capacity` keeps
/// every capacity prime, so step and capacity are always coprime and the
/// probe sequence covers the whole table. Distinct keys that collide on
/// their primary hash still diverge on the very next attempt, which avoids
/// the clustering behavior of linear probing.
#[derive(Debug, Clone)]
pub struct DoubleHashing<F = SeededHash> {
    secondary: F,
}

impl DoubleHashing<SeededHash> {
    /// Double hashing with the default, independently seeded step hash.
    pub fn new() -> Self {
        Self {
            secondary: SeededHash::secondary(),
        }
    }
}

impl<F> DoubleHashing<F> {
    /// Double hashing with a caller-provided step hash.
    ///
    /// The raw secondary hash may take any value, zero included; the step
    /// derivation keeps the actual stride nonzero.
    pub fn with_secondary(secondary: F) -> Self {
        Self { secondary }
    }
}

impl Default for DoubleHashing<SeededHash> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: ?Sized, F: HashFunction<K>> ProbingStrategy<K> for DoubleHashing<F> {
    fn probe(&self, key: &K, hash: u64, attempt: usize, capacity: usize) -> usize {
        let step = 1 + self.secondary.hash(key) % (capacity as u64 - 1);
        // Widen before multiplying: attempt * step can overflow u64 near
        // the capacity limit.
        ((hash as u128 + attempt as u128 * step as u128) % capacity as u128) as usize
    }

    fn align_capacity(&self, requested: usize) -> usize {
        next_prime(requested.max(MIN_CAPACITY))
    }
}
