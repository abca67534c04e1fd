use crate::ledger::choose2;

/// Running totals combined by inclusion-exclusion into the number of co-resident pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Σ choose(item set size, 2) over live components.
    pub sum_binom: i64,
    /// Σ choose(bridge count, 2) over bridge entries. Pairs sharing two components.
    pub sum_doubles: i64,
}

impl Aggregates {
    /// Two components with the given item set sizes became one with `merged` items.
    pub fn merge_sets(&mut self, small: usize, large: usize, merged: usize) {
        self.sum_binom +=
            choose2(merged as i64) - choose2(small as i64) - choose2(large as i64);
    }

    /// Applies a delta returned by [`crate::ledger::BridgeLedger::adjust`].
    pub fn bridge_delta(&mut self, delta: i64) {
        self.sum_doubles += delta;
    }

    pub fn statistic(&self) -> u64 {
        let s = self.sum_binom - self.sum_doubles;
        debug_assert!(s >= 0, "negative statistic {self:?}");
        s as u64
    }
}
