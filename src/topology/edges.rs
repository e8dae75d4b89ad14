//! Undirected edge registry.
//!
//! [`EdgeGraph`] hands out dense, stable `u32` edge ids for unordered vertex
//! pairs. Ids are minted in first-insertion order, so building the same
//! corner array twice yields the same numbering.

use hashbrown::HashMap;

/// Registry of undirected edges over `0..num_vertices`.
#[derive(Clone, Debug, Default)]
pub struct EdgeGraph {
    num_vertices: usize,
    /// `(min, max)` vertex pair → edge id.
    index_of: HashMap<(u32, u32), u32>,
    /// Edge id → `(min, max)` vertex pair.
    endpoints: Vec<(u32, u32)>,
}

#[inline]
fn ordered(u: u32, v: u32) -> (u32, u32) {
    if u <= v { (u, v) } else { (v, u) }
}

impl EdgeGraph {
    /// An edgeless graph over `num_vertices` vertices.
    pub fn new(num_vertices: usize) -> Self {
        Self {
            num_vertices,
            ..Self::default()
        }
    }

    /// Pre-size the registry for roughly `edges` insertions.
    pub fn with_capacity(num_vertices: usize, edges: usize) -> Self {
        Self {
            num_vertices,
            index_of: HashMap::with_capacity(edges),
            endpoints: Vec::with_capacity(edges),
        }
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.endpoints.len()
    }

    /// Insert the unordered pair `{u, v}` and return its id.
    ///
    /// Idempotent: inserting `{v, u}` after `{u, v}` returns the same id.
    pub fn insert_edge(&mut self, u: u32, v: u32) -> u32 {
        let key = ordered(u, v);
        let next = self.endpoints.len() as u32;
        let id = *self.index_of.entry(key).or_insert(next);
        if id == next {
            self.endpoints.push(key);
        }
        id
    }

    /// Id of the unordered pair `{u, v}` if it was inserted.
    #[inline]
    pub fn edge_id(&self, u: u32, v: u32) -> Option<u32> {
        self.index_of.get(&ordered(u, v)).copied()
    }

    /// Endpoints of edge `e`, smaller vertex first.
    #[inline]
    pub fn endpoints(&self, e: u32) -> Option<(u32, u32)> {
        self.endpoints.get(e as usize).copied()
    }

    /// Iterate `(edge id, (v0, v1))` in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, (u32, u32))> + '_ {
        self.endpoints
            .iter()
            .enumerate()
            .map(|(e, &pair)| (e as u32, pair))
    }
}
