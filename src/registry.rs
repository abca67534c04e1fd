//! Which items have a marker resident in each component.

use crate::arena::{Idx, Item, Marker, NodeArena, Side};

/// Per-node lists of items, split by the side of the resident marker.
/// Only the lists of current roots are meaningful; absorbed roots are emptied.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    primary: Vec<Vec<Item>>,
    secondary: Vec<Vec<Item>>,
}

impl ItemRegistry {
    /// Each node starts holding the single marker bound to it.
    pub fn new(arena: &NodeArena) -> Self {
        let n = arena.len();
        let (mut primary, mut secondary) = (vec![vec![]; n], vec![vec![]; n]);
        for u in 0..n {
            let Marker { item, side } = arena.marker_at(u);
            match side {
                Side::Primary => primary[u].push(item),
                Side::Secondary => secondary[u].push(item),
            }
        }
        Self { primary, secondary }
    }

    pub fn items(&self, c: Idx, side: Side) -> &[Item] {
        match side {
            Side::Primary => &self.primary[c],
            Side::Secondary => &self.secondary[c],
        }
    }

    pub fn primary_items(&self, c: Idx) -> &[Item] {
        self.items(c, Side::Primary)
    }

    pub fn secondary_items(&self, c: Idx) -> &[Item] {
        self.items(c, Side::Secondary)
    }

    /// Markers resident in c, primary side first.
    pub fn markers(&self, c: Idx) -> impl Iterator<Item = Marker> + '_ {
        Side::BOTH.into_iter().flat_map(move |side| {
            self.items(c, side)
                .iter()
                .map(move |&item| Marker { item, side })
        })
    }

    /// Moves every list entry of `from` into `to`, leaving `from` empty.
    /// Costs O(min(|from|, |to|)) per side.
    pub fn migrate(&mut self, from: Idx, to: Idx) {
        assert_ne!(from, to, "migrating a component into itself");
        for lists in [&mut self.primary, &mut self.secondary] {
            let mut moved = std::mem::take(&mut lists[from]);
            let dst = &mut lists[to];
            if moved.len() > dst.len() {
                std::mem::swap(&mut moved, dst);
            }
            dst.append(&mut moved);
        }
    }
}
