//! OpenHashMap - instrumented open-addressing hash table
//!
//! A key→value table where every entry lives directly in the backing
//! array and collisions are resolved by probing, featuring:
//! - Pluggable probing strategies (linear, double hashing) and hash
//!   functions, fixed at construction
//! - Tombstone-aware removal with slot reuse on later inserts
//! - A cumulative probe counter covering every slot visit, readable and
//!   resettable at any point for external measurement
//! - Load-factor-driven growth, with capacities kept aligned to the active
//!   strategy's full-cycle discipline
//!
//! # Examples
//!
//! ```rust
//! use probemap::hash_map::OpenHashMap;
//!
//! let mut map: OpenHashMap<&str, i32> = OpenHashMap::new();
//! map.insert("hello", 42).unwrap();
//! assert_eq!(map.get(&"hello"), Some(&42));
//! assert!(map.total_probes() >= 2);
//! ```

use crate::error::{ProbeMapError, Result};
use crate::hash_map::hash_functions::{HashFunction, SeededHash};
use crate::hash_map::probing::{LinearProbing, ProbingStrategy, MIN_CAPACITY};
use crate::hash_map::slot::{Entry, Slot, SlotStore};
use log::debug;
use std::cell::Cell;

/// Configuration for [`OpenHashMap`]
#[derive(Debug, Clone)]
pub struct OpenHashMapConfig {
    /// Requested slot count; rounded up through the probing strategy's
    /// capacity alignment
    pub initial_capacity: usize,
    /// Fill ratio that triggers growth; must lie strictly between 0 and 1
    pub load_factor: f32,
}

impl Default for OpenHashMapConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            load_factor: 0.7,
        }
    }
}

impl OpenHashMapConfig {
    /// Reject invalid parameters before any slot is allocated.
    ///
    /// A threshold at or above 1.0 would let the table fill completely and
    /// turn probe-cycle exhaustion into a runtime failure; it is refused
    /// here instead of being discovered later as a missing-key bug.
    pub fn validate(&self) -> Result<()> {
        if !self.load_factor.is_finite() || self.load_factor <= 0.0 || self.load_factor >= 1.0 {
            return Err(ProbeMapError::configuration(format!(
                "load_factor must be in (0, 1), got {}",
                self.load_factor
            )));
        }
        Ok(())
    }
}

/// Cumulative probe measurements, readable via
/// [`OpenHashMap::probe_stats`]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ProbeStats {
    /// Slots visited across all operations since the last reset
    pub total_probes: u64,
    /// Longest single probe walk observed since the last reset
    pub longest_probe: u64,
}

/// Open-addressing hash table with probe instrumentation.
///
/// Generic over the key and value types, the probing strategy `P`, and the
/// hash function `F`; both policy objects default to [`LinearProbing`] with
/// a deterministic [`SeededHash`]. Keys only need `Eq` plus whatever the
/// chosen hash function requires.
///
/// Every operation that walks a probe sequence adds the number of slots it
/// visited to a cumulative counter. The counter is measurement-only: it
/// never influences table behavior, and lookups update it through a `Cell`
/// so they stay available on shared references. That interior counter also
/// makes the table deliberately not `Sync`: it performs no locking, and
/// concurrent use requires external mutual exclusion.
///
/// # Examples
///
/// ```rust
/// use probemap::hash_map::{DoubleHashing, OpenHashMap};
///
/// let mut table: OpenHashMap<String, usize, DoubleHashing> =
///     OpenHashMap::with_probing(DoubleHashing::new());
/// table.insert("alpha".to_string(), 1).unwrap();
/// table.insert("beta".to_string(), 2).unwrap();
///
/// table.clear_total_probes();
/// assert_eq!(table.get(&"alpha".to_string()), Some(&1));
/// assert!(table.total_probes() >= 1);
/// ```
pub struct OpenHashMap<K, V, P = LinearProbing, F = SeededHash> {
    store: SlotStore<K, V>,
    probing: P,
    hash_fn: F,
    len: usize,
    max_load: usize,
    config: OpenHashMapConfig,
    probes: Cell<u64>,
    longest_probe: Cell<u64>,
}

impl<K, V, P, F> OpenHashMap<K, V, P, F>
where
    K: Eq,
    P: ProbingStrategy<K>,
    F: HashFunction<K>,
{
    /// Create a table with default configuration and policy objects.
    pub fn new() -> Self
    where
        P: Default,
        F: Default,
    {
        Self::from_parts(P::default(), F::default(), OpenHashMapConfig::default())
    }

    /// Create a table sized for roughly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Result<Self>
    where
        P: Default,
        F: Default,
    {
        Self::with_config(OpenHashMapConfig {
            initial_capacity: capacity,
            ..OpenHashMapConfig::default()
        })
    }

    /// Create a table from a configuration, rejecting invalid parameters.
    pub fn with_config(config: OpenHashMapConfig) -> Result<Self>
    where
        P: Default,
        F: Default,
    {
        Self::with_probing_and_hasher(P::default(), F::default(), config)
    }

    /// Create a table with an explicit probing strategy and the default
    /// hash function and configuration.
    pub fn with_probing(probing: P) -> Self
    where
        F: Default,
    {
        Self::from_parts(probing, F::default(), OpenHashMapConfig::default())
    }

    /// Create a table with full control over strategy, hash function, and
    /// configuration.
    pub fn with_probing_and_hasher(probing: P, hash_fn: F, config: OpenHashMapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(probing, hash_fn, config))
    }

    fn from_parts(probing: P, hash_fn: F, config: OpenHashMapConfig) -> Self {
        let capacity = probing.align_capacity(config.initial_capacity.max(MIN_CAPACITY));
        let max_load = Self::max_load_for(capacity, config.load_factor);
        Self {
            store: SlotStore::with_capacity(capacity),
            probing,
            hash_fn,
            len: 0,
            max_load,
            config,
            probes: Cell::new(0),
            longest_probe: Cell::new(0),
        }
    }

    fn max_load_for(capacity: usize, load_factor: f32) -> usize {
        (capacity as f64 * load_factor as f64) as usize
    }

    /// Insert a key/value pair, returning the previous value if the key
    /// was already present (last write wins).
    ///
    /// The walk continues through tombstones (only an `Empty` slot proves
    /// the key absent) and a fresh entry lands in the earliest reusable
    /// slot seen, so vacated positions are reclaimed. Slots visited are
    /// added to the probe counter, including any spent migrating entries
    /// when this insert pushes the table over its load-factor threshold.
    ///
    /// An `Err` means the full probe cycle found no free slot. The growth
    /// policy keeps free slots available, so this is an invariant failure,
    /// not a condition callers should try to recover from.
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>> {
        let hash = self.hash_fn.hash(&key);
        let capacity = self.store.capacity();
        let mut visited = 0u64;
        let mut existing: Option<usize> = None;
        let mut reusable: Option<usize> = None;
        let mut open: Option<usize> = None;

        for attempt in 0..capacity {
            let index = self.probing.probe(&key, hash, attempt, capacity);
            visited += 1;
            match self.store.slot(index) {
                Slot::Occupied(entry) if entry.key == key => {
                    existing = Some(index);
                    break;
                }
                Slot::Occupied(_) => {}
                Slot::Tombstone => {
                    if reusable.is_none() {
                        reusable = Some(index);
                    }
                }
                Slot::Empty => {
                    open = Some(index);
                    break;
                }
            }
        }
        self.record_probes(visited);

        if let Some(index) = existing {
            return Ok(self.store.replace_value(index, value));
        }

        // Key confirmed absent: the walk hit an empty slot or exhausted
        // the cycle. Prefer the earliest tombstone so later walks for this
        // key stay short.
        let target = reusable
            .or(open)
            .ok_or_else(|| ProbeMapError::capacity_exhausted(capacity))?;
        self.store.occupy(target, Entry { key, value });
        self.len += 1;
        while self.len > self.max_load {
            self.grow()?;
        }
        Ok(None)
    }

    /// Look up a key, returning a reference to its value.
    ///
    /// Counts one probe per slot visited; this is the only state a lookup
    /// touches.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.locate(key)?;
        self.store.value(index)
    }

    /// Look up a key, returning a mutable reference to its value.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.locate(key)?;
        self.store.value_mut(index)
    }

    /// Whether the table currently holds `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.locate(key).is_some()
    }

    /// Remove a key, returning its value.
    ///
    /// The vacated slot becomes a tombstone so probe chains running
    /// through it stay intact; the table never shrinks.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.locate(key)?;
        let entry = self.store.vacate(index)?;
        self.len -= 1;
        Some(entry.value)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no live entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current slot count of the backing array.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Current fill ratio, live entries over capacity.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.store.capacity() as f64
    }

    /// Cumulative slots visited since construction or the last
    /// [`clear_total_probes`](Self::clear_total_probes).
    pub fn total_probes(&self) -> u64 {
        self.probes.get()
    }

    /// Reset the probe measurements to zero.
    ///
    /// Purely a measurement hook: table contents and behavior are
    /// unaffected, so harnesses can reset between timed phases.
    pub fn clear_total_probes(&self) {
        self.probes.set(0);
        self.longest_probe.set(0);
    }

    /// Snapshot of the probe measurements.
    pub fn probe_stats(&self) -> ProbeStats {
        ProbeStats {
            total_probes: self.probes.get(),
            longest_probe: self.longest_probe.get(),
        }
    }

    /// Iterate over the live entries in unspecified order.
    ///
    /// Iteration reads the backing array directly and counts no probes.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            slots: self.store.as_slice().iter(),
        }
    }

    /// Walk the probe sequence for `key`, counting visited slots.
    /// Tombstones never end the walk; the first empty slot does.
    fn locate(&self, key: &K) -> Option<usize> {
        let hash = self.hash_fn.hash(key);
        let capacity = self.store.capacity();
        let mut visited = 0u64;
        let mut found = None;

        for attempt in 0..capacity {
            let index = self.probing.probe(key, hash, attempt, capacity);
            visited += 1;
            match self.store.slot(index) {
                Slot::Occupied(entry) if entry.key == *key => {
                    found = Some(index);
                    break;
                }
                Slot::Occupied(_) | Slot::Tombstone => {}
                Slot::Empty => break,
            }
        }
        self.record_probes(visited);
        found
    }

    fn record_probes(&self, visited: u64) {
        self.probes.set(self.probes.get() + visited);
        if visited > self.longest_probe.get() {
            self.longest_probe.set(visited);
        }
    }

    fn grow(&mut self) -> Result<()> {
        let new_capacity = self
            .probing
            .align_capacity(self.store.capacity().saturating_mul(2));
        self.rehash(new_capacity)
    }

    /// Replace the backing array and migrate every live entry into it.
    ///
    /// The old store is consumed entry by entry; tombstones are dropped.
    /// Migration probes land in the cumulative counter, charged to the
    /// insert that triggered the growth.
    fn rehash(&mut self, new_capacity: usize) -> Result<()> {
        debug!(
            "growing probe table: capacity {} -> {} ({} live entries)",
            self.store.capacity(),
            new_capacity,
            self.len
        );
        let old = std::mem::replace(&mut self.store, SlotStore::with_capacity(new_capacity));
        self.max_load = Self::max_load_for(new_capacity, self.config.load_factor);
        self.len = 0;
        for entry in old.drain_entries() {
            self.reinsert(entry)?;
        }
        Ok(())
    }

    /// Migration insert: the fresh store has no tombstones and the keys
    /// are already known distinct, so the first empty slot is the target.
    fn reinsert(&mut self, entry: Entry<K, V>) -> Result<()> {
        let hash = self.hash_fn.hash(&entry.key);
        let capacity = self.store.capacity();
        let mut visited = 0u64;

        for attempt in 0..capacity {
            let index = self.probing.probe(&entry.key, hash, attempt, capacity);
            visited += 1;
            if self.store.slot(index).is_empty() {
                self.record_probes(visited);
                self.store.occupy(index, entry);
                self.len += 1;
                return Ok(());
            }
        }
        self.record_probes(visited);
        Err(ProbeMapError::capacity_exhausted(capacity))
    }
}

impl<K, V, P, F> Default for OpenHashMap<K, V, P, F>
where
    K: Eq,
    P: ProbingStrategy<K> + Default,
    F: HashFunction<K> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the live entries of an [`OpenHashMap`]
pub struct Iter<'a, K, V> {
    slots: std::slice::Iter<'a, Slot<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Slot::Occupied(entry) = slot {
                return Some((&entry.key, &entry.value));
            }
        }
        None
    }
}
