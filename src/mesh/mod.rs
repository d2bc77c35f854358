//! High-order unstructured meshes and the scalar fields defined on them.

pub use self::dispatch::{dispatch_3d, MeshFunctor, UnsupportedMesh};
pub use self::element::{
    ElementShape, ElementType, HexP1, HexP2, HexPn, QuadPn, TetP1, TetP2, TetPn, TriPn,
};
pub use self::field::{Field, UnstructuredField};
pub use self::grid_function::GridFunction;
pub use self::mesh::{Mesh, MeshBuilderError, MeshType, TypedMesh, UnstructuredMesh};

pub mod builders;
mod dispatch;
mod element;
mod field;
mod grid_function;
mod mesh;
