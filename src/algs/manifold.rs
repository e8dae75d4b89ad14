//! Configurable non-manifold checks.
//!
//! Singular edges and vertices are valid states of a [`PolygonMesh`]; this
//! module lets callers that need a manifold decide how to react to them.

use crate::mesh_error::MeshTopoError;
use crate::topology::polygon_mesh::PolygonMesh;

/// Behavior for non-manifold detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonManifoldHandling {
    /// Skip the check.
    Ignore,
    /// Log a warning per non-manifold entity.
    #[default]
    Warn,
    /// Return an error on the first non-manifold entity.
    Error,
}

/// Toggles for [`check_manifold`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ManifoldCheckOptions {
    /// How to treat edges with more than two incident half-edges.
    pub singular_edges: NonManifoldHandling,
    /// How to treat vertices shared by disjoint face fans.
    pub singular_vertices: NonManifoldHandling,
}

impl ManifoldCheckOptions {
    /// Reject any non-manifold entity.
    pub fn all() -> Self {
        Self {
            singular_edges: NonManifoldHandling::Error,
            singular_vertices: NonManifoldHandling::Error,
        }
    }

    /// Accept everything silently.
    pub fn permissive() -> Self {
        Self {
            singular_edges: NonManifoldHandling::Ignore,
            singular_vertices: NonManifoldHandling::Ignore,
        }
    }
}

/// Summary of the non-manifold entities found by [`check_manifold`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifoldCheck {
    pub singular_edges: Vec<i32>,
    pub singular_vertices: Vec<i32>,
}

impl ManifoldCheck {
    pub fn is_manifold(&self) -> bool {
        self.singular_edges.is_empty() && self.singular_vertices.is_empty()
    }
}

/// Scan `mesh` for singular edges and vertices.
///
/// Entities whose handling is `Ignore` are not scanned and never appear in
/// the returned summary.
pub fn check_manifold(
    mesh: &PolygonMesh,
    options: ManifoldCheckOptions,
) -> Result<ManifoldCheck, MeshTopoError> {
    let mut found = ManifoldCheck::default();
    let he = mesh.half_edges();

    if options.singular_edges != NonManifoldHandling::Ignore {
        for e in mesh.edge_ids().filter(|&e| mesh.is_singular_edge(e)) {
            let (v0, v1) = (he.edge_vertex0(e), he.edge_vertex1(e));
            let half_edges = he.edge_half_edge_count(e) as usize;
            match options.singular_edges {
                NonManifoldHandling::Warn => {
                    log::warn!(
                        "Non-manifold edge detected: edge={e} vertices=({v0}, {v1}) half_edges={half_edges}"
                    );
                }
                NonManifoldHandling::Error => {
                    return Err(MeshTopoError::NonManifoldEdge {
                        edge: e as u32,
                        v0: v0 as u32,
                        v1: v1 as u32,
                        half_edges,
                    });
                }
                NonManifoldHandling::Ignore => {}
            }
            found.singular_edges.push(e);
        }
    }

    if options.singular_vertices != NonManifoldHandling::Ignore {
        for v in mesh.vertex_ids().filter(|&v| mesh.is_singular_vertex(v)) {
            let parts = mesh.vertex_part_count(v) as u32;
            match options.singular_vertices {
                NonManifoldHandling::Warn => {
                    log::warn!("Non-manifold vertex detected: vertex={v} fans={parts}");
                }
                NonManifoldHandling::Error => {
                    return Err(MeshTopoError::NonManifoldVertex {
                        vertex: v as u32,
                        parts,
                    });
                }
                NonManifoldHandling::Ignore => {}
            }
            found.singular_vertices.push(v);
        }
    }

    Ok(found)
}
