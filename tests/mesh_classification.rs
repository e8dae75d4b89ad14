use polymesh_topology::algs::{TopologyReport, classify_boundary};
use polymesh_topology::prelude::*;

#[test]
fn single_triangle() {
    let mesh = PolygonMesh::new(3, &[0, 1, 2, -1]).unwrap();
    let he = mesh.half_edges();
    assert_eq!(mesh.num_faces(), 1);
    for (u, v) in [(0, 1), (1, 2), (0, 2)] {
        let e = he.edge_id(u, v);
        assert_ne!(e, NO_ID);
        assert_eq!(he.edge_half_edge_count(e), 1);
        assert!(mesh.is_boundary_edge(e));
    }
    assert!(mesh.has_boundary());
    assert!(!mesh.is_regular());
}

#[test]
fn two_triangles_sharing_an_edge() {
    let mesh = PolygonMesh::new(4, &[0, 1, 2, -1, 0, 2, 3, -1]).unwrap();
    let he = mesh.half_edges();

    let shared = he.edge_id(0, 2);
    assert!(mesh.is_regular_edge(shared));
    assert_eq!(he.edge_half_edge_count(shared), 2);
    assert_eq!(mesh.num_edge_faces(shared), 2);
    assert!(mesh.is_edge_face(shared, 0));
    assert!(mesh.is_edge_face(shared, 1));
    assert_eq!(mesh.edge_face(shared, 1), 1);

    for (u, v) in [(0, 1), (1, 2), (2, 3), (0, 3)] {
        assert!(mesh.is_boundary_edge(he.edge_id(u, v)));
    }
    let outer = he.edge_id(0, 1);
    assert!(!mesh.is_edge_face(outer, 1));

    for v in [0, 2] {
        assert!(mesh.is_boundary_vertex(v));
        assert!(!mesh.is_singular_vertex(v));
        assert_eq!(mesh.vertex_part_count(v), 1);
    }
}

#[test]
fn bowtie_apex_is_singular() {
    let mesh = PolygonMesh::new(5, &[0, 1, 2, -1, 0, 3, 4, -1]).unwrap();
    assert!(mesh.is_singular_vertex(0));
    assert_eq!(mesh.vertex_part_count(0), 2);
    assert_eq!(mesh.vertex_corners(0).collect::<Vec<_>>(), vec![0, 4]);
    for v in 1..5 {
        assert!(!mesh.is_singular_vertex(v));
    }
    for e in mesh.edge_ids() {
        assert!(mesh.is_boundary_edge(e));
    }
}

#[test]
fn closed_bowtie_of_two_tetrahedra() {
    // two tetrahedra glued at vertex 0 only
    let coord = [
        0, 2, 1, -1, 0, 1, 3, -1, 1, 2, 3, -1, 2, 0, 3, -1, //
        0, 5, 4, -1, 0, 4, 6, -1, 4, 5, 6, -1, 5, 0, 6, -1,
    ];
    let mesh = PolygonMesh::new(7, &coord).unwrap();
    assert!(!mesh.has_boundary());
    assert!(mesh.edge_ids().all(|e| mesh.is_regular_edge(e)));
    assert!(mesh.is_singular_vertex(0));
    assert!(!mesh.is_regular());
}

#[test]
fn singular_edge_splits_fans() {
    // three triangles hinged on edge (0, 1)
    let mesh = PolygonMesh::new(5, &[0, 1, 2, -1, 1, 0, 3, -1, 0, 1, 4, -1]).unwrap();
    let he = mesh.half_edges();
    let hinge = he.edge_id(0, 1);
    assert!(mesh.is_singular_edge(hinge));
    assert!(!mesh.is_regular_edge(hinge));
    assert!(!mesh.is_boundary_edge(hinge));
    assert_eq!(he.twin(8), NO_ID);
    // nothing is joined across the hinge
    assert_eq!(mesh.vertex_part_count(0), 3);
    assert_eq!(mesh.vertex_part_count(1), 3);
    assert_eq!(mesh.vertex_part_count(2), 1);
}

#[test]
fn report_and_boundary_agree() {
    let mesh = PolygonMesh::new(5, &[0, 1, 2, -1, 0, 2, 3, -1]).unwrap();
    let report = TopologyReport::from_mesh(&mesh);
    let cls = classify_boundary(&mesh);
    assert_eq!(report.boundary_edges, cls.boundary_edges.len());
    assert_eq!(report.boundary_vertices, cls.boundary_vertices.len());
    assert_eq!(report.regular_edges, 1);
    assert_eq!(report.isolated_vertices, 1);
}

#[test]
fn classification_survives_into_half_edges() {
    let mesh = PolygonMesh::new(3, &[0, 1, 2, -1]).unwrap();
    let he = mesh.clone().into_half_edges();
    assert_eq!(he.num_edges(), mesh.num_edges());
    let rebuilt = PolygonMesh::from_half_edges(he);
    assert_eq!(rebuilt.is_boundary_vertex(1), mesh.is_boundary_vertex(1));
}
