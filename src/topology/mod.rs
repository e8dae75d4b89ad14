//! Top-level module for mesh topology.
//!
//! Leaves first:
//! - [`corner`]: the tagged corner slot and the `-1` sentinel
//! - [`faces`]: validated face index over the corner array
//! - [`edges`]: undirected edge registry
//! - [`partition`]: union-find used to discover face fans
//! - [`incidence`]: CSR edge → half-edge lists
//! - [`half_edges`]: twins, navigation and edge queries
//! - [`polygon_mesh`]: boundary / regular / singular classification
//!
//! Most users only need [`PolygonMesh`] and the [`HalfEdges`] it exposes.

pub mod corner;
pub mod edges;
pub mod faces;
pub mod half_edges;
pub mod incidence;
pub mod partition;
pub mod polygon_mesh;

pub use corner::{Corner, NO_ID};
pub use half_edges::HalfEdges;
pub use polygon_mesh::PolygonMesh;

#[cfg(test)]
mod tests;
