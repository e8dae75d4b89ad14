//! Serializable topology summary.

use serde::{Deserialize, Serialize};

use crate::topology::polygon_mesh::PolygonMesh;

/// Entity counts and whole-mesh flags of a classified mesh.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyReport {
    pub vertices: usize,
    pub corners: usize,
    pub faces: usize,
    pub edges: usize,
    pub boundary_edges: usize,
    pub regular_edges: usize,
    pub singular_edges: usize,
    pub boundary_vertices: usize,
    pub singular_vertices: usize,
    /// Vertices referenced by no corner.
    pub isolated_vertices: usize,
    pub is_regular: bool,
    pub has_boundary: bool,
}

impl TopologyReport {
    pub fn from_mesh(mesh: &PolygonMesh) -> Self {
        let count_edges = |pred: fn(&PolygonMesh, i32) -> bool| {
            mesh.edge_ids().filter(|&e| pred(mesh, e)).count()
        };
        let count_vertices = |pred: fn(&PolygonMesh, i32) -> bool| {
            mesh.vertex_ids().filter(|&v| pred(mesh, v)).count()
        };
        Self {
            vertices: mesh.num_vertices(),
            corners: mesh.num_corners(),
            faces: mesh.num_faces(),
            edges: mesh.num_edges(),
            boundary_edges: count_edges(PolygonMesh::is_boundary_edge),
            regular_edges: count_edges(PolygonMesh::is_regular_edge),
            singular_edges: count_edges(PolygonMesh::is_singular_edge),
            boundary_vertices: count_vertices(PolygonMesh::is_boundary_vertex),
            singular_vertices: count_vertices(PolygonMesh::is_singular_vertex),
            isolated_vertices: count_vertices(|m, v| m.vertex_part_count(v) == 0),
            is_regular: mesh.is_regular(),
            has_boundary: mesh.has_boundary(),
        }
    }
}

impl From<&PolygonMesh> for TopologyReport {
    fn from(mesh: &PolygonMesh) -> Self {
        Self::from_mesh(mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_single_triangle() {
        let mesh = PolygonMesh::new(4, &[0, 1, 2, -1]).unwrap();
        let report = TopologyReport::from(&mesh);
        assert_eq!(report.faces, 1);
        assert_eq!(report.corners, 4);
        assert_eq!(report.edges, 3);
        assert_eq!(report.boundary_edges, 3);
        assert_eq!(report.regular_edges, 0);
        assert_eq!(report.boundary_vertices, 3);
        assert_eq!(report.isolated_vertices, 1);
        assert!(report.has_boundary);
        assert!(!report.is_regular);
    }
}
