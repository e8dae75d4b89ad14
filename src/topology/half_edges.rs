//! Half-edge connectivity over a flattened corner array.
//!
//! Every vertex corner `c` *is* a half-edge: it runs from the vertex stored at
//! `c` to the vertex stored at the next corner of the same face. [`HalfEdges`]
//! adds to the face index
//! - a stable edge id per undirected vertex pair (via [`EdgeGraph`]),
//! - a twin corner per half-edge, and
//! - a CSR list of incident half-edges per edge ([`EdgeIncidence`]).
//!
//! Non-manifold input is accepted. Only the first two half-edges discovered on
//! an edge become twins; any further half-edge on a singular edge keeps
//! `twin == -1` and is reachable only through [`HalfEdges::edge_half_edge`].
//!
//! All queries are total: invalid ids yield [`NO_ID`] instead of panicking.

use static_assertions::assert_impl_all;

use crate::debug_invariants::{DebugInvariants, ensure};
use crate::mesh_error::MeshTopoError;
use crate::topology::corner::{Corner, NO_ID, checked_index, to_id};
use crate::topology::edges::EdgeGraph;
use crate::topology::faces::Faces;
use crate::topology::incidence::EdgeIncidence;

/// Per-edge state while pairing twins.
#[derive(Clone, Copy)]
enum TwinSlot {
    Empty,
    Pending(u32),
    Closed,
}

/// Half-edge structure built once from a `-1`-terminated corner array.
#[derive(Clone, Debug)]
pub struct HalfEdges {
    faces: Faces,
    edges: EdgeGraph,
    /// Edge id per corner; `NO_ID` at separators.
    corner_edge: Vec<i32>,
    /// Twin corner per corner; `NO_ID` at separators, boundary half-edges and
    /// half-edges past the first pair of a singular edge.
    twin: Vec<i32>,
    incidence: EdgeIncidence,
}

assert_impl_all!(HalfEdges: Send, Sync);

impl HalfEdges {
    /// Build the half-edge structure.
    ///
    /// Fails with [`MeshTopoError::InvalidTopology`] if any entry lies outside
    /// `[-1, num_vertices)`; nothing is built in that case.
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Result<Self, MeshTopoError> {
        let faces = Faces::new(num_vertices, coord_index)?;
        let num_corners = faces.num_corners();

        // 1) register one edge per half-edge
        let mut edges = EdgeGraph::with_capacity(num_vertices, faces.num_vertex_corners() / 2);
        let mut corner_edge_opt: Vec<Option<u32>> = Vec::with_capacity(num_corners);
        for (c, corner) in faces.corners().iter().enumerate() {
            let edge = corner.vertex().map(|src| {
                let dst = faces.corner_vertex(faces.next_corner(to_id(c))) as u32;
                edges.insert_edge(src, dst)
            });
            corner_edge_opt.push(edge);
        }
        let num_edges = edges.edge_count();

        // 2) pair the first two half-edges of every edge
        let mut twin = vec![NO_ID; num_corners];
        let mut slots = vec![TwinSlot::Empty; num_edges];
        for (c, edge) in corner_edge_opt.iter().enumerate() {
            let Some(e) = *edge else { continue };
            let slot = &mut slots[e as usize];
            match *slot {
                TwinSlot::Empty => *slot = TwinSlot::Pending(c as u32),
                TwinSlot::Pending(first) => {
                    twin[c] = first as i32;
                    twin[first as usize] = to_id(c);
                    *slot = TwinSlot::Closed;
                }
                TwinSlot::Closed => {}
            }
        }

        // 3) edge → half-edge lists
        let incidence = EdgeIncidence::from_corner_edges(num_edges, &corner_edge_opt);
        let corner_edge = corner_edge_opt
            .iter()
            .map(|e| e.map_or(NO_ID, |e| e as i32))
            .collect();

        log::debug!(
            "built half-edges: {} vertices, {} faces, {} corners, {} edges",
            num_vertices,
            faces.num_faces(),
            num_corners,
            num_edges
        );

        let half_edges = Self {
            faces,
            edges,
            corner_edge,
            twin,
            incidence,
        };
        crate::debug_invariants!(half_edges.validate_invariants(), "HalfEdges::new");
        Ok(half_edges)
    }

    // --- sizes -------------------------------------------------------------------

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.faces.num_vertices()
    }

    /// Number of slots in the corner array, separators included.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.faces.num_corners()
    }

    #[inline]
    pub fn num_faces(&self) -> usize {
        self.faces.num_faces()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.edge_count()
    }

    // --- component access --------------------------------------------------------

    #[inline]
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    #[inline]
    pub fn edges(&self) -> &EdgeGraph {
        &self.edges
    }

    #[inline]
    pub fn incidence(&self) -> &EdgeIncidence {
        &self.incidence
    }

    #[inline]
    pub fn corner(&self, c: i32) -> Option<Corner> {
        self.faces.corner(c)
    }

    // --- validity ----------------------------------------------------------------

    /// True iff `c` is a vertex corner, i.e. a half-edge.
    #[inline]
    pub fn is_valid_corner(&self, c: i32) -> bool {
        self.faces.is_vertex_corner(c)
    }

    #[inline]
    pub fn is_valid_edge(&self, e: i32) -> bool {
        checked_index(e, self.num_edges()).is_some()
    }

    // --- half-edge queries -------------------------------------------------------

    /// Face of half-edge `c`, or `-1`.
    #[inline]
    pub fn face(&self, c: i32) -> i32 {
        self.faces.corner_face(c)
    }

    /// Source vertex of half-edge `c`, or `-1`.
    #[inline]
    pub fn src(&self, c: i32) -> i32 {
        self.faces.corner_vertex(c)
    }

    /// Destination vertex of half-edge `c`, or `-1`.
    #[inline]
    pub fn dst(&self, c: i32) -> i32 {
        self.faces.corner_vertex(self.faces.next_corner(c))
    }

    /// Next half-edge around the face of `c` (wraps), or `-1`.
    #[inline]
    pub fn next(&self, c: i32) -> i32 {
        self.faces.next_corner(c)
    }

    /// Previous half-edge around the face of `c` (wraps), or `-1`.
    ///
    /// O(face size) when `c` is the first corner of its face.
    #[inline]
    pub fn prev(&self, c: i32) -> i32 {
        self.faces.prev_corner(c)
    }

    /// Twin of half-edge `c`, or `-1` on boundary and unresolved singular edges.
    #[inline]
    pub fn twin(&self, c: i32) -> i32 {
        checked_index(c, self.twin.len()).map_or(NO_ID, |i| self.twin[i])
    }

    /// Edge id of half-edge `c`, or `-1`.
    #[inline]
    pub fn edge(&self, c: i32) -> i32 {
        checked_index(c, self.corner_edge.len()).map_or(NO_ID, |i| self.corner_edge[i])
    }

    // --- edge queries ------------------------------------------------------------

    /// Id of the edge joining `u` and `v`, or `-1`.
    pub fn edge_id(&self, u: i32, v: i32) -> i32 {
        if u < 0 || v < 0 {
            return NO_ID;
        }
        self.edges
            .edge_id(u as u32, v as u32)
            .map_or(NO_ID, |e| e as i32)
    }

    /// Smaller endpoint of edge `e`, or `-1`.
    pub fn edge_vertex0(&self, e: i32) -> i32 {
        self.endpoints(e).map_or(NO_ID, |(v0, _)| v0 as i32)
    }

    /// Larger endpoint of edge `e`, or `-1`.
    pub fn edge_vertex1(&self, e: i32) -> i32 {
        self.endpoints(e).map_or(NO_ID, |(_, v1)| v1 as i32)
    }

    fn endpoints(&self, e: i32) -> Option<(u32, u32)> {
        checked_index(e, self.num_edges()).and_then(|e| self.edges.endpoints(e as u32))
    }

    /// Number of half-edges incident to edge `e`, or `-1`.
    #[inline]
    pub fn edge_half_edge_count(&self, e: i32) -> i32 {
        checked_index(e, self.num_edges())
            .and_then(|e| self.incidence.degree(e))
            .map_or(NO_ID, to_id)
    }

    /// The `j`-th half-edge incident to edge `e` in discovery order, or `-1`.
    #[inline]
    pub fn edge_half_edge(&self, e: i32, j: i32) -> i32 {
        match (checked_index(e, self.num_edges()), usize::try_from(j)) {
            (Some(e), Ok(j)) => self.incidence.get(e, j).map_or(NO_ID, |c| c as i32),
            _ => NO_ID,
        }
    }

    /// All half-edges incident to edge `e`; empty for invalid `e`.
    pub fn edge_half_edges(&self, e: i32) -> impl Iterator<Item = i32> + '_ {
        checked_index(e, self.num_edges())
            .and_then(|e| self.incidence.corners(e))
            .unwrap_or(&[])
            .iter()
            .map(|&c| c as i32)
    }

    // --- face queries ------------------------------------------------------------

    #[inline]
    pub fn face_size(&self, f: i32) -> i32 {
        self.faces.face_size(f)
    }

    #[inline]
    pub fn face_first_corner(&self, f: i32) -> i32 {
        self.faces.face_first_corner(f)
    }

    #[inline]
    pub fn face_vertex(&self, f: i32, j: i32) -> i32 {
        self.faces.face_vertex(f, j)
    }

    /// Half-edges of face `f` in input order.
    #[inline]
    pub fn face_corners(&self, f: i32) -> impl Iterator<Item = i32> + '_ {
        self.faces.face_corners(f)
    }

    /// All half-edges (vertex corners) in corner order.
    pub fn half_edge_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.faces
            .corners()
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_vertex())
            .map(|(i, _)| to_id(i))
    }
}

impl DebugInvariants for HalfEdges {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "HalfEdges");
    }

    fn validate_invariants(&self) -> Result<(), MeshTopoError> {
        self.faces.validate_invariants()?;
        let n = self.num_corners();
        ensure(self.twin.len() == n && self.corner_edge.len() == n, || {
            "per-corner arrays must match the corner count".into()
        })?;
        ensure(
            self.incidence.num_edges() == self.num_edges(),
            || "incidence lists must cover every edge".into(),
        )?;
        ensure(
            self.incidence.total() == self.faces.num_vertex_corners(),
            || {
                format!(
                    "incidence total {} != vertex corners {}",
                    self.incidence.total(),
                    self.faces.num_vertex_corners()
                )
            },
        )?;

        for c in 0..n {
            let id = to_id(c);
            let vertex = self.is_valid_corner(id);
            ensure(vertex == (self.corner_edge[c] >= 0), || {
                format!("corner {c} has an inconsistent edge id")
            })?;
            let t = self.twin[c];
            if t == NO_ID {
                continue;
            }
            ensure(vertex && self.is_valid_corner(t), || {
                format!("corner {c} has an invalid twin {t}")
            })?;
            ensure(self.twin(t) == id, || format!("twin({t}) != {c}"))?;
            ensure(self.edge(t) == self.corner_edge[c], || {
                format!("twins {c} and {t} lie on different edges")
            })?;
        }

        for e in 0..self.num_edges() {
            for c in self.edge_half_edges(to_id(e)) {
                ensure(self.edge(c) == to_id(e), || {
                    format!("corner {c} listed under edge {e} belongs elsewhere")
                })?;
            }
        }
        Ok(())
    }
}
