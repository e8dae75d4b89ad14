//! Boundary, regular and singular classification on top of [`HalfEdges`].
//!
//! Edges are classified by their number of incident half-edges: one is a
//! boundary edge, two a regular (manifold) edge, more than two a singular
//! edge. Vertices touching a boundary edge are boundary vertices.
//!
//! Singular vertices are found by partitioning corners into fans. Across
//! every regular edge the two corners that sit on the same endpoint are
//! joined; singular and boundary edges join nothing. Each resulting part is
//! one umbrella of faces around one vertex, and a vertex covered by more than
//! one part is singular (e.g. the apex of a bowtie).

use static_assertions::assert_impl_all;

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{NO_ID, checked_index, to_id};
use crate::topology::half_edges::HalfEdges;
use crate::topology::partition::Partition;

/// A polygon mesh with classified edges and vertices.
#[derive(Clone, Debug)]
pub struct PolygonMesh {
    half_edges: HalfEdges,
    is_boundary_vertex: Vec<bool>,
    /// Number of disjoint corner fans per vertex; 0 for unreferenced vertices.
    parts_per_vertex: Vec<u32>,
}

assert_impl_all!(PolygonMesh: Send, Sync);

impl PolygonMesh {
    /// Build half-edges for `coord_index` and classify the result.
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Result<Self, MeshTopoError> {
        HalfEdges::new(num_vertices, coord_index).map(Self::from_half_edges)
    }

    /// Classify an already built half-edge structure.
    pub fn from_half_edges(half_edges: HalfEdges) -> Self {
        let num_vertices = half_edges.num_vertices();
        let num_edges = to_id(half_edges.num_edges());

        // 1) boundary vertices
        let mut is_boundary_vertex = vec![false; num_vertices];
        for e in 0..num_edges {
            if half_edges.edge_half_edge_count(e) == 1 {
                is_boundary_vertex[half_edges.edge_vertex0(e) as usize] = true;
                is_boundary_vertex[half_edges.edge_vertex1(e) as usize] = true;
            }
        }

        // 2) join corners across regular edges
        let mut partition = Partition::new(half_edges.num_corners());
        for e in 0..num_edges {
            if half_edges.edge_half_edge_count(e) != 2 {
                continue;
            }
            let h1 = half_edges.edge_half_edge(e, 0);
            let h2 = half_edges.edge_half_edge(e, 1);
            let (n1, n2) = (half_edges.next(h1), half_edges.next(h2));
            if half_edges.src(h1) == half_edges.dst(h2) {
                // opposite directions: h1 departs where h2 arrives
                partition.join(h1 as usize, n2 as usize);
                partition.join(h2 as usize, n1 as usize);
            } else {
                // same direction: the faces disagree on winding
                partition.join(h1 as usize, h2 as usize);
                partition.join(n1 as usize, n2 as usize);
            }
        }

        // 3) count distinct parts per vertex
        let mut parts_per_vertex = vec![0u32; num_vertices];
        let mut seen = vec![false; half_edges.num_corners()];
        for c in half_edges.half_edge_ids() {
            let Some(rep) = partition.find(c as usize) else {
                continue;
            };
            if !seen[rep] {
                seen[rep] = true;
                parts_per_vertex[half_edges.src(c) as usize] += 1;
            }
        }
        drop(partition);

        let mesh = Self {
            half_edges,
            is_boundary_vertex,
            parts_per_vertex,
        };
        log::debug!(
            "classified mesh: {} boundary edges, {} singular edges, {} boundary vertices, {} singular vertices",
            mesh.edge_ids().filter(|&e| mesh.is_boundary_edge(e)).count(),
            mesh.edge_ids().filter(|&e| mesh.is_singular_edge(e)).count(),
            mesh.is_boundary_vertex.iter().filter(|&&b| b).count(),
            mesh.parts_per_vertex.iter().filter(|&&p| p > 1).count(),
        );
        crate::debug_invariants!(mesh.validate_invariants(), "PolygonMesh::from_half_edges");
        mesh
    }

    #[inline]
    pub fn half_edges(&self) -> &HalfEdges {
        &self.half_edges
    }

    /// Give back the half-edge structure, discarding the classification.
    pub fn into_half_edges(self) -> HalfEdges {
        self.half_edges
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.half_edges.num_vertices()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.half_edges.num_faces()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.half_edges.num_edges()
    }

    #[inline]
    pub fn num_corners(&self) -> usize {
        self.half_edges.num_corners()
    }

    pub fn edge_ids(&self) -> std::ops::Range<i32> {
        0..to_id(self.num_edges())
    }

    pub fn vertex_ids(&self) -> std::ops::Range<i32> {
        0..to_id(self.num_vertices())
    }

    // --- edge / face incidence ---------------------------------------------------

    /// Number of faces incident to edge `e`, or `-1`.
    ///
    /// Counts one face per incident half-edge, so a face that runs along `e`
    /// twice counts twice.
    #[inline]
    pub fn num_edge_faces(&self, e: i32) -> i32 {
        self.half_edges.edge_half_edge_count(e)
    }

    /// Face of the `j`-th half-edge incident to `e`, or `-1`.
    #[inline]
    pub fn edge_face(&self, e: i32, j: i32) -> i32 {
        self.half_edges.face(self.half_edges.edge_half_edge(e, j))
    }

    /// True iff `f` is a valid face among the faces incident to `e`.
    pub fn is_edge_face(&self, e: i32, f: i32) -> bool {
        checked_index(f, self.num_faces()).is_some()
            && self
                .half_edges
                .edge_half_edges(e)
                .any(|c| self.half_edges.face(c) == f)
    }

    // --- edge classification -----------------------------------------------------

    #[inline]
    pub fn is_boundary_edge(&self, e: i32) -> bool {
        self.half_edges.edge_half_edge_count(e) == 1
    }

    #[inline]
    pub fn is_regular_edge(&self, e: i32) -> bool {
        self.half_edges.edge_half_edge_count(e) == 2
    }

    #[inline]
    pub fn is_singular_edge(&self, e: i32) -> bool {
        self.half_edges.edge_half_edge_count(e) > 2
    }

    // --- vertex classification ---------------------------------------------------

    #[inline]
    pub fn is_boundary_vertex(&self, v: i32) -> bool {
        checked_index(v, self.num_vertices()).is_some_and(|v| self.is_boundary_vertex[v])
    }

    #[inline]
    pub fn is_singular_vertex(&self, v: i32) -> bool {
        checked_index(v, self.num_vertices()).is_some_and(|v| self.parts_per_vertex[v] > 1)
    }

    /// Number of disjoint corner fans around `v` (0 if unreferenced), or `-1`.
    #[inline]
    pub fn vertex_part_count(&self, v: i32) -> i32 {
        checked_index(v, self.num_vertices()).map_or(NO_ID, |v| self.parts_per_vertex[v] as i32)
    }

    /// Corners referencing vertex `v`, in corner order.
    ///
    /// Linear in the number of corners; no vertex → corner table is stored.
    pub fn vertex_corners(&self, v: i32) -> impl Iterator<Item = i32> + '_ {
        let valid = checked_index(v, self.num_vertices()).is_some();
        self.half_edges
            .half_edge_ids()
            .filter(move |&c| valid && self.half_edges.src(c) == v)
    }

    // --- whole mesh --------------------------------------------------------------

    /// True iff every edge is regular and no vertex is boundary or singular.
    pub fn is_regular(&self) -> bool {
        self.edge_ids().all(|e| self.is_regular_edge(e))
            && !self.is_boundary_vertex.iter().any(|&b| b)
            && self.parts_per_vertex.iter().all(|&p| p <= 1)
    }

    /// True iff at least one edge is a boundary edge.
    pub fn has_boundary(&self) -> bool {
        self.edge_ids().any(|e| self.is_boundary_edge(e))
    }
}

impl DebugInvariants for PolygonMesh {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "PolygonMesh");
    }

    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        self.half_edges.validate_invariants()?;
        let n = self.num_vertices();
        ensure(
            self.is_boundary_vertex.len() == n && self.parts_per_vertex.len() == n,
            || "per-vertex arrays must match the vertex count".into(),
        )?;
        let mut referenced = vec![false; n];
        for c in self.half_edges.half_edge_ids() {
            referenced[self.half_edges.src(c) as usize] = true;
        }
        for (v, &r) in referenced.iter().enumerate() {
            ensure(r == (self.parts_per_vertex[v] >= 1), || {
                format!(
                    "vertex {v} has {} parts but is {}referenced",
                    self.parts_per_vertex[v],
                    if r { "" } else { "not " }
                )
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_has_boundary() {
        let mesh = PolygonMesh::new(3, &[0, 1, 2, -1]).unwrap();
        assert!(mesh.has_boundary());
        assert!(!mesh.is_regular());
        for v in 0..3 {
            assert!(mesh.is_boundary_vertex(v));
            assert!(!mesh.is_singular_vertex(v));
            assert_eq!(mesh.vertex_part_count(v), 1);
        }
    }

    #[test]
    fn tetrahedron_is_regular() {
        let mesh =
            PolygonMesh::new(4, &[0, 2, 1, -1, 0, 1, 3, -1, 1, 2, 3, -1, 2, 0, 3, -1]).unwrap();
        assert_eq!(mesh.num_edges(), 6);
        assert!(mesh.is_regular());
        assert!(!mesh.has_boundary());
    }

    #[test]
    fn inconsistent_winding_still_merges_fans() {
        // both triangles run along edge 2 -> 0 in the same direction
        let mesh = PolygonMesh::new(4, &[0, 1, 2, -1, 2, 0, 3, -1]).unwrap();
        let e = mesh.half_edges().edge_id(0, 2);
        assert!(mesh.is_regular_edge(e));
        assert_eq!(mesh.vertex_part_count(0), 1);
        assert_eq!(mesh.vertex_part_count(2), 1);
    }

    #[test]
    fn out_of_range_predicates_are_false() {
        let mesh = PolygonMesh::new(3, &[0, 1, 2, -1]).unwrap();
        assert!(!mesh.is_boundary_edge(-1));
        assert!(!mesh.is_regular_edge(3));
        assert!(!mesh.is_singular_edge(i32::MAX));
        assert!(!mesh.is_boundary_vertex(3));
        assert!(!mesh.is_singular_vertex(-1));
        assert_eq!(mesh.vertex_part_count(-1), NO_ID);
        assert!(!mesh.is_edge_face(0, 1));
        assert!(!mesh.is_edge_face(-1, 0));
        assert_eq!(mesh.edge_face(0, 1), NO_ID);
        assert_eq!(mesh.vertex_corners(7).count(), 0);
    }
}
