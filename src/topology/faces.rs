//! Face index over a flattened corner array.
//!
//! [`Faces`] validates the raw `i32` corner array, converts every slot into a
//! [`Corner`], and records where each face starts. Faces are numbered in the
//! order their terminating `-1` is encountered; a `-1` directly following
//! another `-1` (or at position 0) produces an empty face.

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Corner, NO_ID, checked_index, to_id};

/// Validated corner array plus per-face offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faces {
    num_vertices: usize,
    corners: Vec<Corner>,
    /// `first_corner[f]` is the first corner of face `f`; the separator of `f`
    /// sits at `first_corner[f + 1] - 1`. Holds `num_faces + 1` entries.
    first_corner: Vec<u32>,
}

impl Faces {
    /// Validate `coord_index` against `num_vertices` and index its faces.
    ///
    /// Every entry must satisfy `-1 <= value < num_vertices`, and the array
    /// must end with a `-1`.
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Result<Self, MeshTopoError> {
        if coord_index.len() > i32::MAX as usize {
            return Err(MeshTopoError::CornerOverflow {
                len: coord_index.len(),
            });
        }

        let mut corners = Vec::with_capacity(coord_index.len());
        let mut first_corner = vec![0u32];
        let mut face = 0u32;
        let mut face_start = 0usize;

        for (corner, &value) in coord_index.iter().enumerate() {
            if value == NO_ID {
                corners.push(Corner::Separator {
                    face,
                    corner_count: (corner - face_start) as u32,
                });
                face += 1;
                face_start = corner + 1;
                first_corner.push(face_start as u32);
            } else if checked_index(value, num_vertices).is_some() {
                corners.push(Corner::Vertex {
                    vertex: value as u32,
                    face,
                });
            } else {
                return Err(MeshTopoError::InvalidTopology {
                    corner,
                    value,
                    num_vertices,
                });
            }
        }

        if face_start < coord_index.len() {
            return Err(MeshTopoError::UnterminatedFace {
                first_corner: face_start,
            });
        }

        let faces = Self {
            num_vertices,
            corners,
            first_corner,
        };
        crate::debug_invariants!(faces.validate_invariants(), "Faces::new");
        Ok(faces)
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.first_corner.len() - 1
    }

    /// Number of slots, separators included.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.corners.len()
    }

    /// Number of vertex corners (equivalently, half-edges).
    #[inline]
    pub fn num_vertex_corners(&self) -> usize {
        self.corners.len() - self.num_faces()
    }

    #[inline]
    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    #[inline]
    pub fn corner(&self, c: i32) -> Option<Corner> {
        checked_index(c, self.corners.len()).map(|i| self.corners[i])
    }

    /// True iff `c` is in range and holds a vertex.
    #[inline]
    pub fn is_vertex_corner(&self, c: i32) -> bool {
        self.corner(c).is_some_and(Corner::is_vertex)
    }

    /// The raw `-1`-terminated encoding this index was built from.
    pub fn coord_index(&self) -> Vec<i32> {
        self.corners.iter().map(|c| c.raw()).collect()
    }

    /// Vertex id stored at `c`, or `-1` for separators and invalid ids.
    #[inline]
    pub fn corner_vertex(&self, c: i32) -> i32 {
        self.corner(c)
            .and_then(Corner::vertex)
            .map_or(NO_ID, |v| v as i32)
    }

    /// Face of vertex corner `c`; `-1` for separators and invalid ids.
    #[inline]
    pub fn corner_face(&self, c: i32) -> i32 {
        match self.corner(c) {
            Some(Corner::Vertex { face, .. }) => face as i32,
            _ => NO_ID,
        }
    }

    /// Number of vertex corners of face `f`, or `-1`.
    pub fn face_size(&self, f: i32) -> i32 {
        checked_index(f, self.num_faces()).map_or(NO_ID, |f| {
            (self.first_corner[f + 1] - self.first_corner[f] - 1) as i32
        })
    }

    /// First corner of face `f`, or `-1`.
    ///
    /// For an empty face this is the face's own separator.
    pub fn face_first_corner(&self, f: i32) -> i32 {
        checked_index(f, self.num_faces()).map_or(NO_ID, |f| self.first_corner[f] as i32)
    }

    /// The `j`-th vertex of face `f` in input order, or `-1`.
    pub fn face_vertex(&self, f: i32, j: i32) -> i32 {
        let size = self.face_size(f);
        if size < 0 || j < 0 || j >= size {
            return NO_ID;
        }
        self.corner_vertex(self.face_first_corner(f) + j)
    }

    /// Vertex corners of face `f`; empty for invalid `f`.
    pub fn face_corners(&self, f: i32) -> impl Iterator<Item = i32> + '_ {
        let range = match checked_index(f, self.num_faces()) {
            Some(f) => self.first_corner[f]..self.first_corner[f + 1] - 1,
            None => 0..0,
        };
        range.map(|c| c as i32)
    }

    /// Successor of `c` within its face, wrapping at the separator in O(1).
    pub fn next_corner(&self, c: i32) -> i32 {
        let Some(i) = checked_index(c, self.corners.len()) else {
            return NO_ID;
        };
        if !self.corners[i].is_vertex() {
            return NO_ID;
        }
        // A vertex corner is always followed by a slot: the last face is terminated.
        match self.corners[i + 1] {
            Corner::Separator { corner_count, .. } => to_id(i + 1 - corner_count as usize),
            Corner::Vertex { .. } => to_id(i + 1),
        }
    }

    /// Predecessor of `c` within its face.
    ///
    /// When `c` opens its face no backward offset is stored, so this scans
    /// forward to the separator: O(face size) in that case, O(1) otherwise.
    pub fn prev_corner(&self, c: i32) -> i32 {
        let Some(i) = checked_index(c, self.corners.len()) else {
            return NO_ID;
        };
        if !self.corners[i].is_vertex() {
            return NO_ID;
        }
        if i > 0 && self.corners[i - 1].is_vertex() {
            return to_id(i - 1);
        }
        let mut last = i;
        while self.corners[last + 1].is_vertex() {
            last += 1;
        }
        to_id(last)
    }
}

impl DebugInvariants for Faces {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "Faces");
    }

    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        ensure(
            self.first_corner.first() == Some(&0),
            || "face offsets must start at corner 0".into(),
        )?;
        ensure(
            *self.first_corner.last().unwrap_or(&0) as usize == self.corners.len(),
            || "face offsets must end at the corner count".into(),
        )?;
        for f in 0..self.num_faces() {
            let (lo, hi) = (self.first_corner[f] as usize, self.first_corner[f + 1] as usize);
            ensure(lo < hi, || format!("face {f} has no separator"))?;
            for c in lo..hi - 1 {
                ensure(
                    self.corners[c] == Corner::Vertex {
                        vertex: self.corners[c].raw() as u32,
                        face: f as u32,
                    },
                    || format!("corner {c} is not a vertex corner of face {f}"),
                )?;
                ensure(
                    (self.corners[c].raw() as usize) < self.num_vertices,
                    || format!("corner {c} references an out-of-range vertex"),
                )?;
            }
            ensure(
                self.corners[hi - 1]
                    == Corner::Separator {
                        face: f as u32,
                        corner_count: (hi - 1 - lo) as u32,
                    },
                || format!("corner {} does not terminate face {f}", hi - 1),
            )?;
        }
        Ok(())
    }
}
