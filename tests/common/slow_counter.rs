use std::collections::BTreeSet;

use pair_partition::{Error, PairCounter, Result};

/// Recomputes everything from the raw node graph on every query.
#[derive(Debug, Clone)]
pub struct SlowCounter {
    items: usize,
    adj: Vec<BTreeSet<usize>>,
}

impl SlowCounter {
    /// Component label of every node, numbered from 1 in order of discovery.
    pub fn groups(&self) -> Vec<usize> {
        let mut groups = vec![0; self.adj.len()];
        let mut group_id = 0;
        for u in 0..self.adj.len() {
            if groups[u] == 0 {
                group_id += 1;
                groups[u] = group_id;
                let mut stack = vec![u];
                while let Some(u) = stack.pop() {
                    for &v in &self.adj[u] {
                        if groups[v] == 0 {
                            groups[v] = group_id;
                            stack.push(v);
                        }
                    }
                }
            }
        }
        groups
    }

    /// Nodes of item x (1-based) as (primary, secondary).
    pub fn nodes(&self, x: usize) -> (usize, usize) {
        (x - 1, self.items + x - 1)
    }

    pub fn co_resident(&self, groups: &[usize], x: usize, y: usize) -> bool {
        let (xp, xs) = self.nodes(x);
        let (yp, ys) = self.nodes(y);
        [xp, xs]
            .iter()
            .any(|&a| [yp, ys].iter().any(|&b| groups[a] == groups[b]))
    }
}

impl PairCounter for SlowCounter {
    fn new(items: usize) -> Result<Self> {
        if items == 0 {
            return Err(Error::InvalidArgument("no items".to_owned()));
        }
        Ok(Self {
            items,
            adj: vec![BTreeSet::new(); 2 * items],
        })
    }

    fn connect(&mut self, h: usize, d: usize) -> Result<u64> {
        for x in [h, d] {
            if x == 0 || x > self.items {
                return Err(Error::InvalidArgument(format!("item {x}")));
            }
        }
        let (u, _) = self.nodes(h);
        let (_, v) = self.nodes(d);
        self.adj[u].insert(v);
        self.adj[v].insert(u);
        Ok(self.statistic())
    }

    fn statistic(&self) -> u64 {
        let groups = self.groups();
        let mut count = 0;
        for x in 1..=self.items {
            for y in x + 1..=self.items {
                if self.co_resident(&groups, x, y) {
                    count += 1;
                }
            }
        }
        count
    }

    fn items(&self) -> usize {
        self.items
    }
}
