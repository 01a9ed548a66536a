//! Integration tests for the open-addressing hash tables
//!
//! Exercises the tables the way a measurement harness does: bulk inserts
//! over word-like keys, full lookup sweeps, probe-counter phases, and
//! removal churn, for both probing strategies.

use probemap::{
    DoubleHashing, HashFunction, LinearProbing, OpenHashMap, OpenHashMapConfig, ProbingStrategy,
};

fn words(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("word_{:06}", i)).collect()
}

fn fill<P: ProbingStrategy<String>>(table: &mut OpenHashMap<String, usize, P>, words: &[String]) {
    for (i, word) in words.iter().enumerate() {
        table.insert(word.clone(), i).unwrap();
    }
}

// =============================================================================
// ROUND-TRIP AND RESIZE BEHAVIOR
// =============================================================================

#[test]
fn test_round_trip_linear() {
    let dictionary = words(5_000);
    let mut table: OpenHashMap<String, usize> = OpenHashMap::new();
    fill(&mut table, &dictionary);

    assert_eq!(table.len(), dictionary.len());
    for (i, word) in dictionary.iter().enumerate() {
        assert_eq!(table.get(word), Some(&i), "missing key: {}", word);
    }
}

#[test]
fn test_round_trip_double_hashing() {
    let dictionary = words(5_000);
    let mut table = OpenHashMap::with_probing(DoubleHashing::new());
    fill(&mut table, &dictionary);

    assert_eq!(table.len(), dictionary.len());
    for (i, word) in dictionary.iter().enumerate() {
        assert_eq!(table.get(word), Some(&i), "missing key: {}", word);
    }
}

#[test]
fn test_resize_preserves_membership_and_counts_finds() {
    let dictionary = words(1_000);
    let mut table: OpenHashMap<String, usize> = OpenHashMap::with_capacity(16).unwrap();
    fill(&mut table, &dictionary);

    // Many growth rounds happened between capacity 16 and 1000 entries.
    assert!(table.capacity() > 1_000);

    table.clear_total_probes();
    for word in &dictionary {
        assert!(table.contains_key(word));
    }
    // Each find visits at least one slot.
    assert!(table.total_probes() >= dictionary.len() as u64);
}

#[test]
fn test_load_factor_stays_below_threshold() {
    let config = OpenHashMapConfig {
        initial_capacity: 8,
        load_factor: 0.6,
    };
    let mut table: OpenHashMap<String, usize> = OpenHashMap::with_config(config).unwrap();
    for (i, word) in words(2_000).iter().enumerate() {
        table.insert(word.clone(), i).unwrap();
        assert!(
            table.load_factor() <= 0.6 + f64::EPSILON,
            "load factor {} above threshold after {} inserts",
            table.load_factor(),
            i + 1
        );
    }
}

// =============================================================================
// PROBE MEASUREMENT PHASES
// =============================================================================

#[test]
fn test_probe_phases_mirror_harness_usage() {
    let dictionary = words(10_000);

    let mut table = OpenHashMap::with_probing(DoubleHashing::new());
    table.clear_total_probes();
    fill(&mut table, &dictionary);

    let insert_probes = table.total_probes();
    assert!(insert_probes >= dictionary.len() as u64);
    let insert_avg = insert_probes as f64 / dictionary.len() as f64;

    table.clear_total_probes();
    for word in &dictionary {
        assert!(table.get(word).is_some());
    }
    let find_probes = table.total_probes();
    let find_avg = find_probes as f64 / dictionary.len() as f64;

    // Averages include collision walks but stay small at a 0.7 threshold;
    // the insert average additionally carries rehash migration cost.
    assert!(find_avg >= 1.0);
    assert!(find_avg < 8.0, "find average {} suspiciously high", find_avg);
    assert!(insert_avg >= 1.0);

    let stats = table.probe_stats();
    assert_eq!(stats.total_probes, find_probes);
    assert!(stats.longest_probe >= 1);
}

// =============================================================================
// REMOVAL AND TOMBSTONE BEHAVIOR
// =============================================================================

/// Scripted hash codes, to stage collisions deterministically.
struct ModHash(u64);

impl HashFunction<u64> for ModHash {
    fn hash(&self, key: &u64) -> u64 {
        key % self.0
    }
}

#[test]
fn test_tombstones_keep_collision_chains_searchable() {
    let config = OpenHashMapConfig {
        initial_capacity: 16,
        load_factor: 0.7,
    };
    let mut table =
        OpenHashMap::with_probing_and_hasher(LinearProbing, ModHash(8), config).unwrap();

    // Keys 3, 11, 19 all hash to 3 and form one chain.
    table.insert(3u64, 30).unwrap();
    table.insert(11u64, 110).unwrap();
    table.insert(19u64, 190).unwrap();

    // Removing the head of the chain must not orphan the rest.
    assert_eq!(table.remove(&3), Some(30));
    assert_eq!(table.get(&11), Some(&110));
    assert_eq!(table.get(&19), Some(&190));
    assert_eq!(table.get(&3), None);

    // A new colliding key reclaims the vacated slot and stays findable.
    table.insert(27u64, 270).unwrap();
    assert_eq!(table.get(&27), Some(&270));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_churn_never_duplicates_keys() {
    let mut table: OpenHashMap<u32, u32> = OpenHashMap::new();

    // Insert, remove half, re-insert with new values, several rounds.
    for round in 0..4u32 {
        for key in 0..500u32 {
            table.insert(key, key + round * 1_000).unwrap();
        }
        for key in (0..500u32).step_by(2) {
            table.remove(&key);
        }
    }

    let mut keys: Vec<u32> = table.iter().map(|(k, _)| *k).collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total, "duplicate live keys after churn");
    assert_eq!(table.len(), total);

    // Survivors carry the value from the final round.
    for key in (1..500u32).step_by(2) {
        assert_eq!(table.get(&key), Some(&(key + 3_000)));
    }
}

#[test]
fn test_removed_keys_stay_absent_across_growth() {
    let mut table: OpenHashMap<u32, u32> = OpenHashMap::with_capacity(8).unwrap();
    for key in 0..100u32 {
        table.insert(key, key).unwrap();
        if key % 3 == 0 {
            table.remove(&key);
        }
    }
    for key in 0..100u32 {
        if key % 3 == 0 {
            assert_eq!(table.get(&key), None);
        } else {
            assert_eq!(table.get(&key), Some(&key));
        }
    }
}

// =============================================================================
// STRATEGY PARITY
// =============================================================================

#[test]
fn test_both_strategies_agree_on_contents() {
    let dictionary = words(2_000);

    let mut linear: OpenHashMap<String, usize> = OpenHashMap::new();
    let mut double = OpenHashMap::with_probing(DoubleHashing::new());
    fill(&mut linear, &dictionary);
    fill(&mut double, &dictionary);

    for (i, word) in dictionary.iter().enumerate() {
        if i % 5 == 0 {
            assert_eq!(linear.remove(word).is_some(), double.remove(word).is_some());
        }
    }

    assert_eq!(linear.len(), double.len());
    for (word, value) in linear.iter() {
        assert_eq!(double.get(word), Some(value));
    }
}
