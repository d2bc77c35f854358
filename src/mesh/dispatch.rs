//! Compile-time dispatch of generic mesh algorithms over the closed set of element types.
//!
//! An algorithm that works on any element type implements [`MeshFunctor`]:
//! its `call` method is generic over [`ElementType`] and gets monomorphized
//! once for every element type the dispatcher can name. [`dispatch_3d`] then
//! resolves the concrete type of a `dyn Mesh` and invokes the matching
//! instantiation.

use crate::mesh::{ElementType, Mesh, MeshType, TypedMesh, UnstructuredMesh};

/// Error indicating that a mesh algorithm has no instantiation for a mesh's element type.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("no dispatch exists for meshes of type {mesh_type:?}")]
pub struct UnsupportedMesh {
    /// The element type of the rejected mesh.
    pub mesh_type: MeshType,
}

/// A generic algorithm invoked on a fully-typed mesh.
pub trait MeshFunctor {
    /// The result of the algorithm.
    type Output;

    /// Runs the algorithm on `mesh`.
    fn call<E: ElementType>(&mut self, mesh: &UnstructuredMesh<E>) -> Self::Output;
}

/// Invokes `functor` on `mesh` if it is made of volumetric (3D) elements.
///
/// Surface meshes and custom meshes are rejected with [`UnsupportedMesh`].
pub fn dispatch_3d<F: MeshFunctor>(
    mesh: &dyn Mesh,
    functor: &mut F,
) -> Result<F::Output, UnsupportedMesh> {
    log::trace!(
        "dispatching on mesh `{}` of type {:?}",
        mesh.name(),
        mesh.mesh_type()
    );

    match mesh.as_typed_mesh() {
        TypedMesh::HexP1(mesh) => Ok(functor.call(mesh)),
        TypedMesh::HexP2(mesh) => Ok(functor.call(mesh)),
        TypedMesh::HexPn(mesh) => Ok(functor.call(mesh)),
        TypedMesh::TetP1(mesh) => Ok(functor.call(mesh)),
        TypedMesh::TetP2(mesh) => Ok(functor.call(mesh)),
        TypedMesh::TetPn(mesh) => Ok(functor.call(mesh)),
        TypedMesh::QuadPn(_) | TypedMesh::TriPn(_) | TypedMesh::Custom(_) => Err(UnsupportedMesh {
            mesh_type: mesh.mesh_type(),
        }),
    }
}
