use std::fmt::{Debug, Formatter};

use debug_tree::TreeBuilder;

use crate::{
    aggregate::Aggregates,
    arena::{Idx, Item, Marker, NodeArena, Union},
    error::{Error, Result},
    ledger::{choose2, BridgeLedger},
    registry::ItemRegistry,
};

pub trait PairCounter: Sized {
    /// New counter over `items` items with every marker in its own component.
    fn new(items: usize) -> Result<Self>;
    /// Joins the component of h's primary marker with the component of d's
    /// secondary marker. Items are 1-based. Returns the statistic afterwards.
    fn connect(&mut self, h: usize, d: usize) -> Result<u64>;
    /// Number of unordered pairs of distinct items sharing at least one component.
    fn statistic(&self) -> u64;
    fn items(&self) -> usize;
}

/// Feeds all operations to the counter, collecting the statistic after each one.
/// Stops at the first rejected operation.
pub fn replay<C: PairCounter>(
    counter: &mut C,
    ops: impl IntoIterator<Item = (usize, usize)>,
) -> Result<Vec<u64>> {
    ops.into_iter().map(|(h, d)| counter.connect(h, d)).collect()
}

/// Snapshot of one live component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentView {
    pub id: Idx,
    pub hubs: usize,
    /// Distinct items with at least one marker here.
    pub items: usize,
}

/// Incremental co-resident pair counter. Every operation is amortized O(log n).
pub struct Engine {
    arena: NodeArena,
    registry: ItemRegistry,
    ledger: BridgeLedger,
    /// Distinct items with a marker in the component. Only meaningful for roots.
    item_sets: Vec<usize>,
    agg: Aggregates,
}

impl Engine {
    fn check_item(&self, x: usize) -> Result<Item> {
        if x == 0 || x > self.items() {
            Err(Error::InvalidArgument(format!(
                "item {x} is outside 1..={}",
                self.items()
            )))
        } else {
            Ok(x - 1)
        }
    }

    /// Merges the components of nodes u and v. Returns false if they were already one.
    fn merge(&mut self, u: Idx, v: Idx) -> bool {
        let (a, b) = (self.arena.find(u), self.arena.find(v));
        if a == b {
            log::trace!("{u} and {v} already share component {a}");
            return false;
        }
        let (small, large) = self.arena.by_size(a, b);

        // Retire the bridges of `small` while the partition is still unmerged.
        let mut inter = 0;
        for m in self.registry.markers(small) {
            let other = self.arena.find_marker(m.twin());
            if other == small {
                continue;
            }
            if other == large {
                inter += 1;
            }
            let delta = self.ledger.adjust(small, other, -1);
            self.agg.bridge_delta(delta);
        }

        let (s1, s2) = (self.item_sets[small], self.item_sets[large]);
        let merged = s1 + s2 - inter;
        self.agg.merge_sets(s1, s2, merged);

        let union = self.arena.union(small, large);
        assert_eq!(
            union,
            Union::Merged {
                survivor: large,
                absorbed: small
            }
        );
        self.item_sets[large] = merged;

        // Re-insert them under the surviving root. Twins inside `large` are no longer bridges.
        for m in self.registry.markers(small) {
            let other = self.arena.find_marker(m.twin());
            if other == large {
                continue;
            }
            let delta = self.ledger.adjust(large, other, 1);
            self.agg.bridge_delta(delta);
        }

        self.registry.migrate(small, large);
        log::debug!(
            "merged {small} into {large}: {merged} items ({inter} shared), {} bridges, {:?}",
            self.ledger.len(),
            self.agg
        );
        true
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn registry(&self) -> &ItemRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &BridgeLedger {
        &self.ledger
    }

    pub fn aggregates(&self) -> Aggregates {
        self.agg
    }

    /// Root of the component containing node u.
    pub fn component_of(&self, u: Idx) -> Idx {
        self.arena.root(u)
    }

    pub fn same_component(&self, u: Idx, v: Idx) -> bool {
        self.arena.root(u) == self.arena.root(v)
    }

    pub fn hub_count(&self, u: Idx) -> usize {
        self.arena.hubs(u)
    }

    pub fn item_set_size(&self, u: Idx) -> usize {
        self.item_sets[self.arena.root(u)]
    }

    pub fn components(&self) -> impl Iterator<Item = ComponentView> + '_ {
        self.arena.roots().map(|id| ComponentView {
            id,
            hubs: self.arena.hubs(id),
            items: self.item_sets[id],
        })
    }

    /// Recomputes all derived state from the raw partition and panics on any mismatch. O(n).
    pub fn check_invariants(&self) {
        let arena = &self.arena;
        let mut sets = vec![0; arena.len()];
        let mut bridges = BridgeLedger::default();
        for item in 0..self.items() {
            let p = arena.root(arena.node_of(Marker::primary(item)));
            let s = arena.root(arena.node_of(Marker::secondary(item)));
            sets[p] += 1;
            if p != s {
                sets[s] += 1;
                bridges.adjust(p, s, 1);
            }
        }
        let mut sum_binom = 0;
        for u in 0..arena.len() {
            if !arena.is_root(u) {
                assert!(
                    self.registry.markers(u).next().is_none(),
                    "absorbed node {u} still owns registry entries"
                );
                continue;
            }
            assert_eq!(self.item_sets[u], sets[u], "item set size of {u}");
            let mut resident = 0;
            for m in self.registry.markers(u) {
                assert_eq!(arena.root(arena.node_of(m)), u, "{m:?} listed under {u}");
                resident += 1;
            }
            assert_eq!(resident, arena.hubs(u), "registry of {u} vs hub count");
            sum_binom += choose2(sets[u] as i64);
        }
        assert_eq!(self.ledger.len(), bridges.len(), "live bridge entries");
        for ((c1, c2), count) in bridges.iter() {
            assert_eq!(self.ledger.get(c1, c2), count, "bridge {{{c1}, {c2}}}");
        }
        assert_eq!(self.agg.sum_binom, sum_binom, "sum of binomials");
        assert_eq!(self.agg.sum_doubles, bridges.doubles(), "sum of doubles");
    }
}

impl PairCounter for Engine {
    fn new(items: usize) -> Result<Self> {
        if items == 0 {
            return Err(Error::InvalidArgument(
                "item count must be positive".to_owned(),
            ));
        }
        let arena = NodeArena::new(items);
        let registry = ItemRegistry::new(&arena);
        // Both markers of every item start apart, each item bridging its own two singletons.
        let mut ledger = BridgeLedger::with_capacity(items);
        for item in 0..items {
            let p = arena.node_of(Marker::primary(item));
            let s = arena.node_of(Marker::secondary(item));
            ledger.adjust(p, s, 1);
        }
        log::debug!("engine over {items} items, {} nodes", arena.len());
        Ok(Self {
            item_sets: vec![1; arena.len()],
            arena,
            registry,
            ledger,
            agg: Aggregates::default(),
        })
    }

    fn connect(&mut self, h: usize, d: usize) -> Result<u64> {
        let (h, d) = (self.check_item(h)?, self.check_item(d)?);
        let u = self.arena.node_of(Marker::primary(h));
        let v = self.arena.node_of(Marker::secondary(d));
        self.merge(u, v);
        Ok(self.statistic())
    }

    fn statistic(&self) -> u64 {
        self.agg.statistic()
    }

    fn items(&self) -> usize {
        self.arena.items()
    }
}

impl Debug for Engine {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        let builder = TreeBuilder::new();
        let _b = builder.add_branch(&format!(
            "Engine: {} items, statistic {}",
            self.items(),
            self.statistic()
        ));
        for c in self.components() {
            let _c = builder.add_branch(&format!(
                "[{}] {} hubs, {} items",
                c.id, c.hubs, c.items
            ));
            for m in self.registry.markers(c.id) {
                builder.add_leaf(&format!("{:?} {}", m.side, m.item + 1));
            }
        }
        builder.add_leaf(&format!("bridges {:?}", self.ledger));
        writeln!(f, "{}", builder.string())
    }
}
