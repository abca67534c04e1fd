//! Counts of items bridging each unordered pair of components.

use std::collections::HashMap;
use std::fmt::Formatter;

use derivative::Derivative;

use crate::arena::Idx;

/// choose(x, 2), zero for x < 2.
pub fn choose2(x: i64) -> i64 {
    if x <= 1 {
        0
    } else {
        x * (x - 1) / 2
    }
}

fn sorted_fmt(counts: &HashMap<(Idx, Idx), u32>, f: &mut Formatter) -> std::fmt::Result {
    let mut entries: Vec<_> = counts.iter().collect();
    entries.sort_unstable();
    f.debug_map().entries(entries).finish()
}

/// Sparse map from an unordered pair of distinct component roots to the number
/// of items with one marker in each. Zero counts are never stored.
#[derive(Derivative, Clone, Default)]
#[derivative(Debug)]
pub struct BridgeLedger {
    #[derivative(Debug(format_with = "sorted_fmt"))]
    counts: HashMap<(Idx, Idx), u32>,
}

fn key(c1: Idx, c2: Idx) -> (Idx, Idx) {
    assert_ne!(c1, c2, "bridge between a component and itself");
    (c1.min(c2), c1.max(c2))
}

impl BridgeLedger {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            counts: HashMap::with_capacity(capacity),
        }
    }

    /// Adds delta to the count of {c1, c2}. Returns the change in choose(count, 2).
    /// Panics if c1 == c2 or the count would go negative.
    pub fn adjust(&mut self, c1: Idx, c2: Idx, delta: i64) -> i64 {
        let k = key(c1, c2);
        let old = self.counts.get(&k).copied().unwrap_or(0) as i64;
        let new = old + delta;
        assert!(new >= 0, "bridge {k:?} count would drop to {new}");
        log::trace!("bridge {k:?}: {old} -> {new}");
        if new == 0 {
            self.counts.remove(&k);
        } else {
            self.counts.insert(k, new as u32);
        }
        choose2(new) - choose2(old)
    }

    /// Count for {c1, c2}, 0 when absent.
    pub fn get(&self, c1: Idx, c2: Idx) -> u32 {
        self.counts.get(&key(c1, c2)).copied().unwrap_or(0)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of bridged items.
    pub fn total(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    /// Σ choose(count, 2) over all entries.
    pub fn doubles(&self) -> i64 {
        self.counts.values().map(|&c| choose2(c as i64)).sum()
    }

    /// Entries as ((smaller root, larger root), count), in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((Idx, Idx), u32)> + '_ {
        self.counts.iter().map(|(&k, &c)| (k, c))
    }
}
