//! Whole-mesh algorithms built on a classified [`PolygonMesh`].
//!
//! [`PolygonMesh`]: crate::topology::polygon_mesh::PolygonMesh

pub mod boundary;
pub mod manifold;
pub mod report;

pub use boundary::{BoundaryClassification, boundary_half_edges, classify_boundary};
pub use manifold::{ManifoldCheck, ManifoldCheckOptions, NonManifoldHandling, check_manifold};
pub use report::TopologyReport;
