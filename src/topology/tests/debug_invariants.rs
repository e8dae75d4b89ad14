use crate::debug_invariants::DebugInvariants;
use crate::topology::faces::Faces;
use crate::topology::half_edges::HalfEdges;
use crate::topology::polygon_mesh::PolygonMesh;

const CUBE: [i32; 30] = [
    0, 3, 2, 1, -1, 4, 5, 6, 7, -1, 0, 1, 5, 4, -1, 1, 2, 6, 5, -1, 2, 3, 7, 6, -1, 3, 0, 4, 7,
    -1,
];

#[test]
fn cube_passes_all_invariants() {
    let faces = Faces::new(8, &CUBE).unwrap();
    faces.validate_invariants().unwrap();
    let he = HalfEdges::new(8, &CUBE).unwrap();
    he.validate_invariants().unwrap();
    let mesh = PolygonMesh::from_half_edges(he);
    mesh.validate_invariants().unwrap();
    mesh.debug_assert_invariants();
    assert_eq!(mesh.num_edges(), 12);
    assert!(mesh.is_regular());
}

#[test]
fn every_cube_half_edge_has_a_twin() {
    let he = HalfEdges::new(8, &CUBE).unwrap();
    for c in he.half_edge_ids() {
        let t = he.twin(c);
        assert_ne!(t, crate::NO_ID);
        assert_eq!(he.src(t), he.dst(c));
        assert_eq!(he.dst(t), he.src(c));
    }
}
