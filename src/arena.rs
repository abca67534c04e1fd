//! Union-find over the 2n marker nodes, with path compression and union by size.

use std::fmt::Formatter;

use derivative::Derivative;

pub type Idx = usize;
/// Item index, 0-based internally.
pub type Item = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Primary,
    Secondary,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Primary, Side::Secondary];

    pub fn opposite(self) -> Self {
        match self {
            Side::Primary => Side::Secondary,
            Side::Secondary => Side::Primary,
        }
    }
}

/// One endpoint of an item. Bound to a fixed node for the lifetime of the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    pub item: Item,
    pub side: Side,
}

impl Marker {
    pub fn primary(item: Item) -> Self {
        Self {
            item,
            side: Side::Primary,
        }
    }
    pub fn secondary(item: Item) -> Self {
        Self {
            item,
            side: Side::Secondary,
        }
    }
    /// The same item's marker on the other side.
    pub fn twin(self) -> Self {
        Self {
            item: self.item,
            side: self.side.opposite(),
        }
    }
}

/// Result of [`NodeArena::union`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Union {
    /// Both nodes were already in this component.
    Same(Idx),
    Merged { survivor: Idx, absorbed: Idx },
}

impl Union {
    pub fn root(self) -> Idx {
        match self {
            Union::Same(r) => r,
            Union::Merged { survivor, .. } => survivor,
        }
    }
}

fn roots_fmt(parent: &Vec<Idx>, f: &mut Formatter) -> std::fmt::Result {
    let roots: Vec<_> = (0..parent.len()).filter(|&u| parent[u] == u).collect();
    write!(f, "{roots:?}")
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
pub struct NodeArena {
    items: usize,
    /// Only roots are printed, the rest is path compression noise.
    #[derivative(Debug(format_with = "roots_fmt"))]
    parent: Vec<Idx>,
    /// Number of nodes in the component. Only meaningful for roots.
    #[derivative(Debug = "ignore")]
    hubs: Vec<usize>,
}

impl NodeArena {
    /// Arena with 2 * items singleton nodes. Item i has its primary marker on node i
    /// and its secondary marker on node items + i.
    pub fn new(items: usize) -> Self {
        let n = 2 * items;
        Self {
            items,
            parent: (0..n).collect(),
            hubs: vec![1; n],
        }
    }

    pub fn items(&self) -> usize {
        self.items
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn node_of(&self, m: Marker) -> Idx {
        match m.side {
            Side::Primary => m.item,
            Side::Secondary => self.items + m.item,
        }
    }

    pub fn marker_at(&self, u: Idx) -> Marker {
        if u < self.items {
            Marker::primary(u)
        } else {
            Marker::secondary(u - self.items)
        }
    }

    /// Representative of the component containing u. Halves the path on the way up.
    pub fn find(&mut self, mut u: Idx) -> Idx {
        while self.parent[u] != u {
            self.parent[u] = self.parent[self.parent[u]];
            u = self.parent[u];
        }
        u
    }

    pub fn find_marker(&mut self, m: Marker) -> Idx {
        let u = self.node_of(m);
        self.find(u)
    }

    /// Same as [`Self::find`], but leaves the links untouched.
    pub fn root(&self, mut u: Idx) -> Idx {
        while self.parent[u] != u {
            u = self.parent[u];
        }
        u
    }

    pub fn is_root(&self, u: Idx) -> bool {
        self.parent[u] == u
    }

    /// Number of nodes in the component containing u.
    pub fn hubs(&self, u: Idx) -> usize {
        self.hubs[self.root(u)]
    }

    /// Orders two roots as (small, large) by node count. On ties the first one is small.
    pub fn by_size(&self, a: Idx, b: Idx) -> (Idx, Idx) {
        if self.hubs[a] > self.hubs[b] {
            (b, a)
        } else {
            (a, b)
        }
    }

    /// Merges the components of a and b, absorbing the smaller one as chosen by
    /// [`Self::by_size`].
    pub fn union(&mut self, a: Idx, b: Idx) -> Union {
        let (a, b) = (self.find(a), self.find(b));
        if a == b {
            return Union::Same(a);
        }
        let (small, large) = self.by_size(a, b);
        self.parent[small] = large;
        self.hubs[large] += self.hubs[small];
        log::trace!(
            "union: {small} absorbed into {large}, now {} hubs",
            self.hubs[large]
        );
        Union::Merged {
            survivor: large,
            absorbed: small,
        }
    }

    /// Current roots, in increasing order.
    pub fn roots(&self) -> impl Iterator<Item = Idx> + '_ {
        (0..self.parent.len()).filter(|&u| self.is_root(u))
    }
}

