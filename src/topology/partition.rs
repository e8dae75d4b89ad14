//! Arena-indexed disjoint-set partition.
//!
//! [`Partition`] groups the integers `0..len` into equivalence classes with
//! union by size and path compression. It knows nothing about meshes; the
//! classifier uses it over corner ids to discover face fans.

/// Union-find over `0..len`.
#[derive(Clone, Debug, Default)]
pub struct Partition {
    parent: Vec<u32>,
    size: Vec<u32>,
    parts: usize,
}

impl Partition {
    /// `len` singleton parts.
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            size: vec![1; len],
            parts: len,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Current number of disjoint parts.
    #[inline]
    pub fn part_count(&self) -> usize {
        self.parts
    }

    /// Representative of the part holding `a`, compressing the path walked.
    pub fn find(&mut self, a: usize) -> Option<usize> {
        if a >= self.parent.len() {
            return None;
        }
        let mut root = a;
        while self.parent[root] as usize != root {
            root = self.parent[root] as usize;
        }
        let mut cur = a;
        while cur != root {
            let next = self.parent[cur] as usize;
            self.parent[cur] = root as u32;
            cur = next;
        }
        Some(root)
    }

    /// Merge the parts holding `a` and `b`.
    ///
    /// Returns `true` when two distinct parts were merged. Out-of-range ids
    /// leave the partition untouched.
    pub fn join(&mut self, a: usize, b: usize) -> bool {
        let (Some(ra), Some(rb)) = (self.find(a), self.find(b)) else {
            return false;
        };
        if ra == rb {
            return false;
        }
        let (big, small) = if self.size[ra] >= self.size[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        self.parent[small] = big as u32;
        self.size[big] += self.size[small];
        self.parts -= 1;
        true
    }

    /// True iff `a` and `b` are valid and share a part.
    pub fn same_part(&mut self, a: usize, b: usize) -> bool {
        matches!((self.find(a), self.find(b)), (Some(ra), Some(rb)) if ra == rb)
    }
}
