//! Property tests over random polygon soups.

use polymesh_topology::DebugInvariants;
use polymesh_topology::prelude::*;
use proptest::prelude::*;

/// Random soup: up to 12 faces of 1..=6 corners over `n` vertices.
fn soup() -> impl Strategy<Value = (usize, Vec<i32>)> {
    (1usize..10).prop_flat_map(|n| {
        let face = prop::collection::vec(0..n as i32, 1..=6);
        prop::collection::vec(face, 0..12).prop_map(move |faces| {
            let mut coord = Vec::new();
            for f in faces {
                coord.extend(f);
                coord.push(-1);
            }
            (n, coord)
        })
    })
}

proptest! {
    #[test]
    fn twins_are_symmetric((n, coord) in soup()) {
        let he = HalfEdges::new(n, &coord).unwrap();
        for c in 0..coord.len() as i32 {
            let t = he.twin(c);
            if t != NO_ID {
                prop_assert_eq!(he.twin(t), c);
                prop_assert_eq!(he.edge(t), he.edge(c));
            }
        }
    }

    #[test]
    fn next_and_prev_are_inverse((n, coord) in soup()) {
        let he = HalfEdges::new(n, &coord).unwrap();
        for c in he.half_edge_ids() {
            prop_assert_eq!(he.next(he.prev(c)), c);
            prop_assert_eq!(he.prev(he.next(c)), c);
            prop_assert_eq!(he.face(he.next(c)), he.face(c));
        }
    }

    #[test]
    fn edge_classes_partition_edges((n, coord) in soup()) {
        let mesh = PolygonMesh::new(n, &coord).unwrap();
        for e in mesh.edge_ids() {
            let classes = [
                mesh.is_boundary_edge(e),
                mesh.is_regular_edge(e),
                mesh.is_singular_edge(e),
            ];
            prop_assert_eq!(classes.iter().filter(|&&b| b).count(), 1);
        }
    }

    #[test]
    fn incidence_covers_every_half_edge((n, coord) in soup()) {
        let he = HalfEdges::new(n, &coord).unwrap();
        let total: usize = (0..he.num_edges() as i32)
            .map(|e| he.edge_half_edge_count(e) as usize)
            .sum();
        prop_assert_eq!(total, he.half_edge_ids().count());
    }

    #[test]
    fn face_vertices_match_input((n, coord) in soup()) {
        let he = HalfEdges::new(n, &coord).unwrap();
        let expected: Vec<Vec<i32>> = coord
            .split(|&v| v == -1)
            .take(he.num_faces())
            .map(<[i32]>::to_vec)
            .collect();
        for (f, face) in expected.iter().enumerate() {
            let f = f as i32;
            let got: Vec<i32> = (0..he.face_size(f)).map(|j| he.face_vertex(f, j)).collect();
            prop_assert_eq!(&got, face);
        }
    }

    #[test]
    fn referenced_vertices_have_a_fan((n, coord) in soup()) {
        let mesh = PolygonMesh::new(n, &coord).unwrap();
        mesh.validate_invariants().unwrap();
        for &v in coord.iter().filter(|&&v| v >= 0) {
            prop_assert!(mesh.vertex_part_count(v) >= 1);
        }
    }

    #[test]
    fn out_of_range_vertex_is_rejected(n in 1usize..10, bad in 10i32..100) {
        let coord = [0, bad, 0, -1];
        let rejected = matches!(
            HalfEdges::new(n, &coord),
            Err(MeshTopoError::InvalidTopology { corner: 1, .. })
        );
        prop_assert!(rejected);
    }
}
