//! Element type descriptors.
//!
//! Every mesh and field in this crate is parametrized by an [`ElementType`]: a
//! zero-sized marker fixing the topological dimension, the element shape and
//! the polynomial-order policy at compile time. The set of element types is
//! closed: it is enumerated by [`crate::mesh::MeshType`].

use crate::mesh::{MeshType, TypedMesh, UnstructuredMesh};
use arrayvec::ArrayVec;
use std::fmt::Debug;

/// The reference shape of an element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ElementShape {
    /// Quadrilaterals and hexahedra: tensor products of 1D Bernstein bases.
    Tensor,
    /// Triangles and tetrahedra.
    Simplex,
}

/// Compile-time description of an element type.
///
/// # Local dof ordering
///
/// * Tensor elements of order `p` store their `(p + 1)^DIM` control points
///   lexicographically, `x` varying fastest: the local index of the control
///   point `(i, j, k)` is `i + (p + 1) * (j + (p + 1) * k)`.
/// * Simplex elements of order `p` store the control points `(i, j, k)` with
///   `i + j + k <= p`, `i` varying fastest and `k` slowest.
pub trait ElementType: 'static + Copy + Clone + Debug + Default + Send + Sync {
    /// The topological dimension of the element.
    const DIM: usize;
    /// The reference shape of the element.
    const SHAPE: ElementShape;
    /// The polynomial order if it is fixed at compile time, or `None` if any order is accepted.
    const FIXED_ORDER: Option<u32>;
    /// A short human-readable name for logs and debug dumps.
    const NAME: &'static str;
    /// The runtime tag of meshes made of this element type.
    const MESH_TYPE: MeshType;

    /// Wraps a mesh of this element type into the matching [`TypedMesh`] variant.
    fn as_typed_mesh(mesh: &UnstructuredMesh<Self>) -> TypedMesh<'_>;

    /// Does this element type accept elements of the given order?
    fn supports_order(order: u32) -> bool {
        match Self::FIXED_ORDER {
            Some(fixed) => fixed == order,
            None => order >= 1,
        }
    }

    /// The number of control points of a single element of the given order.
    fn dofs_per_element(order: u32) -> usize {
        let p = order as usize;
        match (Self::SHAPE, Self::DIM) {
            (ElementShape::Tensor, dim) => (p + 1).pow(dim as u32),
            (ElementShape::Simplex, 2) => (p + 1) * (p + 2) / 2,
            (ElementShape::Simplex, _) => (p + 1) * (p + 2) * (p + 3) / 6,
        }
    }

    /// The local indices of the geometric corners of an element of the given order.
    ///
    /// Hexahedron corners follow the same numbering as [`crate::bounding_volume::Aabb::vertices`].
    /// Tetrahedron corners are the vertices `(0,0,0)`, `(p,0,0)`, `(0,p,0)` and `(0,0,p)`
    /// of the reference simplex, in that order.
    fn corner_dofs(order: u32) -> ArrayVec<usize, 8> {
        let p = order as usize;
        let mut corners = ArrayVec::new();

        match (Self::SHAPE, Self::DIM) {
            (ElementShape::Tensor, 2) => {
                let n = p + 1;
                for (i, j) in [(0, 0), (p, 0), (p, p), (0, p)] {
                    corners.push(i + n * j);
                }
            }
            (ElementShape::Tensor, _) => {
                let n = p + 1;
                for (i, j, k) in [
                    (0, 0, 0),
                    (p, 0, 0),
                    (p, p, 0),
                    (0, p, 0),
                    (0, 0, p),
                    (p, 0, p),
                    (p, p, p),
                    (0, p, p),
                ] {
                    corners.push(i + n * (j + n * k));
                }
            }
            (ElementShape::Simplex, 2) => {
                for (i, j) in [(0, 0), (p, 0), (0, p)] {
                    corners.push(simplex_local_index(p, i, j, 0, 2));
                }
            }
            (ElementShape::Simplex, _) => {
                for (i, j, k) in [(0, 0, 0), (p, 0, 0), (0, p, 0), (0, 0, p)] {
                    corners.push(simplex_local_index(p, i, j, k, 3));
                }
            }
        }

        corners
    }
}

/// Local index of the simplex control point `(i, j, k)` for an element of order `p`.
fn simplex_local_index(p: usize, i: usize, j: usize, k: usize, dim: usize) -> usize {
    // Number of points in the 2D layers strictly below `k`.
    let below = |k: usize| -> usize {
        (0..k)
            .map(|kk| {
                let q = p - kk;
                (q + 1) * (q + 2) / 2
            })
            .sum()
    };
    let q = if dim == 2 { p } else { p - k };
    // Number of points in the rows strictly below `j` within the layer.
    let rows: usize = (0..j).map(|jj| q - jj + 1).sum();

    if dim == 2 {
        rows + i
    } else {
        below(k) + rows + i
    }
}

macro_rules! element_types(
    ($($(#[$meta: meta])* $name: ident => ($dim: expr, $shape: expr, $order: expr, $label: expr);)*) => {$(
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl ElementType for $name {
            const DIM: usize = $dim;
            const SHAPE: ElementShape = $shape;
            const FIXED_ORDER: Option<u32> = $order;
            const NAME: &'static str = $label;
            const MESH_TYPE: MeshType = MeshType::$name;

            fn as_typed_mesh(mesh: &UnstructuredMesh<Self>) -> TypedMesh<'_> {
                TypedMesh::$name(mesh)
            }
        }
    )*}
);

element_types!(
    /// Trilinear hexahedron.
    HexP1 => (3, ElementShape::Tensor, Some(1), "hex-p1");
    /// Triquadratic hexahedron.
    HexP2 => (3, ElementShape::Tensor, Some(2), "hex-p2");
    /// Hexahedron of arbitrary order.
    HexPn => (3, ElementShape::Tensor, None, "hex-pn");
    /// Linear tetrahedron.
    TetP1 => (3, ElementShape::Simplex, Some(1), "tet-p1");
    /// Quadratic tetrahedron.
    TetP2 => (3, ElementShape::Simplex, Some(2), "tet-p2");
    /// Tetrahedron of arbitrary order.
    TetPn => (3, ElementShape::Simplex, None, "tet-pn");
    /// Quadrilateral of arbitrary order.
    QuadPn => (2, ElementShape::Tensor, None, "quad-pn");
    /// Triangle of arbitrary order.
    TriPn => (2, ElementShape::Simplex, None, "tri-pn");
);
