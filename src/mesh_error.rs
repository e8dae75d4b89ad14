//! MeshTopoError: unified error type for polymesh-topology public APIs.
//!
//! Construction is the only fallible stage: once a [`HalfEdges`] or
//! [`PolygonMesh`] exists every query is total and reports invalid ids with
//! sentinels instead of errors.
//!
//! [`HalfEdges`]: crate::topology::half_edges::HalfEdges
//! [`PolygonMesh`]: crate::topology::polygon_mesh::PolygonMesh

use thiserror::Error;

/// Unified error type for mesh topology operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshTopoError {
    /// A corner holds a value outside `[-1, num_vertices)`.
    #[error(
        "Invalid topology: corner {corner} holds vertex index {value}, expected -1 <= index < {num_vertices}"
    )]
    InvalidTopology {
        corner: usize,
        value: i32,
        num_vertices: usize,
    },
    /// The corner array ends with vertex corners that no `-1` terminates.
    #[error("Invalid topology: face starting at corner {first_corner} has no terminating -1")]
    UnterminatedFace { first_corner: usize },
    /// The corner array is too long to be addressed with `i32` corner ids.
    #[error("Corner array of length {len} exceeds the addressable range of i32 ids")]
    CornerOverflow { len: usize },
    /// An edge is shared by more than two half-edges.
    #[error("Non-manifold edge {edge} ({v0}, {v1}) has {half_edges} incident half-edges")]
    NonManifoldEdge {
        edge: u32,
        v0: u32,
        v1: u32,
        half_edges: usize,
    },
    /// A vertex is referenced by more than one disjoint corner fan.
    #[error("Non-manifold vertex {vertex} is shared by {parts} disjoint face fans")]
    NonManifoldVertex { vertex: u32, parts: u32 },
    /// A structural invariant of a built structure does not hold.
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}
