//! Boundary classification utilities.
//!
//! Collects the boundary edges of a [`PolygonMesh`] and splits its referenced
//! vertices into boundary and interior sets.

use itertools::Itertools;

use crate::topology::polygon_mesh::PolygonMesh;

/// Classified boundary/interior entity sets, each sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoundaryClassification {
    /// Edges with exactly one incident half-edge.
    pub boundary_edges: Vec<i32>,
    /// Vertices touching at least one boundary edge.
    pub boundary_vertices: Vec<i32>,
    /// Referenced vertices touching no boundary edge.
    pub interior_vertices: Vec<i32>,
}

/// Classify the edges and vertices of `mesh`.
///
/// Vertices that no face references are in neither vertex set.
pub fn classify_boundary(mesh: &PolygonMesh) -> BoundaryClassification {
    let boundary_edges = mesh
        .edge_ids()
        .filter(|&e| mesh.is_boundary_edge(e))
        .collect_vec();

    let (boundary_vertices, interior_vertices): (Vec<i32>, Vec<i32>) = mesh
        .vertex_ids()
        .filter(|&v| mesh.vertex_part_count(v) > 0)
        .partition(|&v| mesh.is_boundary_vertex(v));

    BoundaryClassification {
        boundary_edges,
        boundary_vertices,
        interior_vertices,
    }
}

/// Half-edges lying on boundary edges, in corner order.
pub fn boundary_half_edges(mesh: &PolygonMesh) -> Vec<i32> {
    let he = mesh.half_edges();
    he.half_edge_ids()
        .filter(|&c| mesh.is_boundary_edge(he.edge(c)))
        .collect_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_split_into_two_triangles() {
        let mesh = PolygonMesh::new(4, &[0, 1, 2, -1, 0, 2, 3, -1]).unwrap();
        let cls = classify_boundary(&mesh);
        assert_eq!(cls.boundary_edges.len(), 4);
        assert_eq!(cls.boundary_vertices, vec![0, 1, 2, 3]);
        assert!(cls.interior_vertices.is_empty());
        assert_eq!(boundary_half_edges(&mesh), vec![0, 1, 5, 6]);
    }

    #[test]
    fn unreferenced_vertices_are_skipped() {
        let mesh = PolygonMesh::new(4, &[0, 2, 1, -1, 0, 1, 3, -1, 1, 2, 3, -1, 2, 0, 3, -1])
            .unwrap();
        let cls = classify_boundary(&mesh);
        assert!(cls.boundary_edges.is_empty());
        assert_eq!(cls.interior_vertices, vec![0, 1, 2, 3]);

        let lonely = PolygonMesh::new(5, &[0, 1, 2, -1]).unwrap();
        let cls = classify_boundary(&lonely);
        assert_eq!(cls.boundary_vertices, vec![0, 1, 2]);
        assert!(cls.interior_vertices.is_empty());
    }
}
