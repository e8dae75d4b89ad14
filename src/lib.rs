//! # polymesh-topology
//!
//! Half-edge connectivity and manifold classification for polygon soups.
//!
//! A mesh arrives as a vertex count plus one flat `i32` array holding every
//! face as a run of vertex ids terminated by `-1`. From it this crate builds,
//! once and immutably:
//! - a face index with O(1) wrap-around navigation inside faces,
//! - half-edges (one per face corner) with twins and stable edge ids,
//! - a CSR list of incident half-edges per edge, and
//! - boundary / regular / singular classification of edges and vertices,
//!   including non-manifold "bowtie" vertices.
//!
//! Non-manifold input is accepted and reported, never rejected. The only
//! construction failure is a vertex id outside `[-1, num_vertices)`.
//!
//! All queries are total: they take `i32` ids and answer `-1` ([`NO_ID`]) or
//! `false` for anything out of range, so traversal code can rely on sentinel
//! checks. Built structures are `Send + Sync` and never mutate.
//!
//! ## Usage
//!
//! ```rust
//! use polymesh_topology::prelude::*;
//!
//! // two triangles sharing edge (0, 2)
//! let mesh = PolygonMesh::new(4, &[0, 1, 2, -1, 0, 2, 3, -1])?;
//! let he = mesh.half_edges();
//!
//! let shared = he.edge_id(0, 2);
//! assert!(mesh.is_regular_edge(shared));
//! assert_eq!(he.twin(2), 4);
//! assert!(mesh.has_boundary());
//! assert!(!mesh.is_singular_vertex(0));
//! # Ok::<(), MeshTopoError>(())
//! ```
//!
//! ## Invariant checks
//!
//! Debug builds validate every built structure through [`DebugInvariants`].
//! Enable the `check-invariants` feature to keep those checks in release
//! builds.

pub mod algs;
pub mod debug_invariants;
pub mod mesh_error;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use topology::corner::NO_ID;

/// A convenient prelude to import the most-used types:
pub mod prelude {
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::mesh_error::MeshTopoError;
    pub use crate::topology::corner::{Corner, NO_ID};
    pub use crate::topology::edges::EdgeGraph;
    pub use crate::topology::faces::Faces;
    pub use crate::topology::half_edges::HalfEdges;
    pub use crate::topology::incidence::EdgeIncidence;
    pub use crate::topology::partition::Partition;
    pub use crate::topology::polygon_mesh::PolygonMesh;
}
