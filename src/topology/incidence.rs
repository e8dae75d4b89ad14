//! Compressed edge → half-edge incidence.
//!
//! Every edge owns the ordered list of corners whose half-edge runs along it.
//! The lists are packed CSR-style: `offsets[e]..offsets[e + 1]` indexes into
//! one flat `corners` array. Within a list corners keep discovery order, which
//! is ascending corner order.

/// Immutable CSR incidence lists, one per edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeIncidence {
    /// `num_edges + 1` prefix offsets into `corners`.
    offsets: Vec<u32>,
    corners: Vec<u32>,
}

impl Default for EdgeIncidence {
    fn default() -> Self {
        Self {
            offsets: vec![0],
            corners: Vec::new(),
        }
    }
}

impl EdgeIncidence {
    /// Build from a per-corner edge table (`None` for separators).
    pub fn from_corner_edges(num_edges: usize, corner_edge: &[Option<u32>]) -> Self {
        // 1) degree counts
        let mut degree = vec![0u32; num_edges];
        for e in corner_edge.iter().flatten() {
            degree[*e as usize] += 1;
        }

        // 2) prefix sums
        let mut offsets = vec![0u32; num_edges + 1];
        for e in 0..num_edges {
            offsets[e + 1] = offsets[e] + degree[e];
        }

        // 3) populate in corner order
        let mut corners = vec![0u32; offsets[num_edges] as usize];
        let mut write = offsets.clone();
        for (c, e) in corner_edge.iter().enumerate() {
            if let Some(e) = *e {
                let pos = write[e as usize] as usize;
                corners[pos] = c as u32;
                write[e as usize] += 1;
            }
        }

        Self { offsets, corners }
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of incidences over all edges.
    #[inline]
    pub fn total(&self) -> usize {
        self.corners.len()
    }

    /// Corners incident to `e`, or `None` if `e` is out of range.
    #[inline]
    pub fn corners(&self, e: usize) -> Option<&[u32]> {
        if e >= self.num_edges() {
            return None;
        }
        let lo = self.offsets[e] as usize;
        let hi = self.offsets[e + 1] as usize;
        Some(&self.corners[lo..hi])
    }

    #[inline]
    pub fn degree(&self, e: usize) -> Option<usize> {
        self.corners(e).map(<[u32]>::len)
    }

    #[inline]
    pub fn get(&self, e: usize, j: usize) -> Option<u32> {
        self.corners(e).and_then(|cs| cs.get(j)).copied()
    }
}
