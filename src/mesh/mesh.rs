use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::mesh::{
    ElementShape, ElementType, GridFunction, HexP1, HexP2, HexPn, QuadPn, TetP1, TetP2, TetPn,
    TriPn,
};
use downcast_rs::{impl_downcast, DowncastSync};
use std::fmt::Debug;

/// Indicated an inconsistency while building a mesh or a field.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum MeshBuilderError {
    /// Elements must have at least one control point.
    #[error("elements must have at least one control point.")]
    EmptyElements,
    /// The connectivity array length isn't a multiple of the number of control points per element.
    #[error("the connectivity has {len} entries, which is not a multiple of {el_dofs}.")]
    RaggedConnectivity {
        /// Length of the connectivity array.
        len: usize,
        /// Control points per element.
        el_dofs: usize,
    },
    /// The connectivity references a control point that doesn't exist.
    #[error("the connectivity references the control point {index} but only {len} exist.")]
    DofOutOfBounds {
        /// The offending control-point index.
        index: u32,
        /// The number of control points.
        len: usize,
    },
    /// The element type doesn't accept the requested polynomial order.
    #[error("the element type {element} does not support the order {order}.")]
    UnsupportedOrder {
        /// Name of the element type.
        element: &'static str,
        /// The requested order.
        order: u32,
    },
    /// The number of control points per element doesn't match the element type and order.
    #[error("an element of type {element} needs {expected} control points, found {found}.")]
    WrongElementDofs {
        /// Name of the element type.
        element: &'static str,
        /// The control points per element implied by the type and order.
        expected: usize,
        /// The control points per element found in the connectivity.
        found: usize,
    },
    /// The builder only supports a subset of the element types.
    #[error("the element type {0} is not supported by this builder.")]
    UnsupportedElement(&'static str),
}

/// Enum representing the element type of a mesh.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MeshType {
    /// A trilinear hexahedral mesh.
    HexP1,
    /// A triquadratic hexahedral mesh.
    HexP2,
    /// A hexahedral mesh of arbitrary order.
    HexPn,
    /// A linear tetrahedral mesh.
    TetP1,
    /// A quadratic tetrahedral mesh.
    TetP2,
    /// A tetrahedral mesh of arbitrary order.
    TetPn,
    /// A quadrilateral surface mesh of arbitrary order.
    QuadPn,
    /// A triangular surface mesh of arbitrary order.
    TriPn,
    /// A custom user-defined mesh.
    Custom,
}

/// Enum representing the mesh with its actual element type.
#[derive(Copy, Clone, Debug)]
pub enum TypedMesh<'a> {
    /// A trilinear hexahedral mesh.
    HexP1(&'a UnstructuredMesh<HexP1>),
    /// A triquadratic hexahedral mesh.
    HexP2(&'a UnstructuredMesh<HexP2>),
    /// A hexahedral mesh of arbitrary order.
    HexPn(&'a UnstructuredMesh<HexPn>),
    /// A linear tetrahedral mesh.
    TetP1(&'a UnstructuredMesh<TetP1>),
    /// A quadratic tetrahedral mesh.
    TetP2(&'a UnstructuredMesh<TetP2>),
    /// A tetrahedral mesh of arbitrary order.
    TetPn(&'a UnstructuredMesh<TetPn>),
    /// A quadrilateral surface mesh of arbitrary order.
    QuadPn(&'a UnstructuredMesh<QuadPn>),
    /// A triangular surface mesh of arbitrary order.
    TriPn(&'a UnstructuredMesh<TriPn>),
    /// A custom user-defined mesh.
    Custom(&'a dyn Mesh),
}

/// Trait implemented by every mesh that can be stored in a [`crate::data_model::DataSet`].
///
/// Meshes are shared between domains through `Arc<dyn Mesh>` and are never
/// mutated once built.
pub trait Mesh: DowncastSync + Debug {
    /// The name of this mesh. Fields reference their mesh by name.
    fn name(&self) -> &str;

    /// The element type of this mesh.
    fn mesh_type(&self) -> MeshType;

    /// Converts this abstract mesh into its concrete element type.
    fn as_typed_mesh(&self) -> TypedMesh<'_>;

    /// The polynomial order of the elements.
    fn order(&self) -> u32;

    /// The number of elements.
    fn cells(&self) -> usize;

    /// The number of control points.
    fn dof_count(&self) -> usize;

    /// The bounding box of all the control points.
    ///
    /// Because high-order elements are contained in the convex hull of their
    /// control points, this box also bounds the curved geometry.
    fn bounds(&self) -> Aabb;
}

impl_downcast!(sync Mesh);

/// An unstructured mesh made of elements of type `E`.
#[derive(Clone, Debug, PartialEq)]
pub struct UnstructuredMesh<E: ElementType> {
    name: String,
    dof_data: GridFunction<3>,
    order: u32,
    _element: E,
}

impl<E: ElementType> UnstructuredMesh<E> {
    /// Creates a mesh, checking that the connectivity matches the element type and order.
    pub fn new(
        name: impl Into<String>,
        dof_data: GridFunction<3>,
        order: u32,
    ) -> Result<Self, MeshBuilderError> {
        check_element_layout::<E>(dof_data.el_dofs, order)?;
        Ok(Self {
            name: name.into(),
            dof_data,
            order,
            _element: E::default(),
        })
    }

    /// The control-point coordinates and connectivity of this mesh.
    #[inline]
    pub fn dof_data(&self) -> &GridFunction<3> {
        &self.dof_data
    }

    /// The coordinates of the `i`-th control point.
    #[inline]
    pub fn point(&self, i: usize) -> Point<Real> {
        Point::from(self.dof_data.values[i])
    }

    /// The coordinates of the geometric corners of the element `element`.
    pub fn element_corners(&self, element: usize) -> impl Iterator<Item = Point<Real>> + '_ {
        E::corner_dofs(self.order)
            .into_iter()
            .map(move |local| Point::from(*self.dof_data.element_value(element, local)))
    }

    /// The element shape of this mesh.
    #[inline]
    pub fn element_shape(&self) -> ElementShape {
        E::SHAPE
    }
}

pub(crate) fn check_element_layout<E: ElementType>(
    el_dofs: usize,
    order: u32,
) -> Result<(), MeshBuilderError> {
    if !E::supports_order(order) {
        return Err(MeshBuilderError::UnsupportedOrder {
            element: E::NAME,
            order,
        });
    }

    let expected = E::dofs_per_element(order);
    if expected != el_dofs {
        return Err(MeshBuilderError::WrongElementDofs {
            element: E::NAME,
            expected,
            found: el_dofs,
        });
    }

    Ok(())
}

impl<E: ElementType> Mesh for UnstructuredMesh<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn mesh_type(&self) -> MeshType {
        E::MESH_TYPE
    }

    fn as_typed_mesh(&self) -> TypedMesh<'_> {
        E::as_typed_mesh(self)
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn cells(&self) -> usize {
        self.dof_data.size_el
    }

    fn dof_count(&self) -> usize {
        self.dof_data.dof_count()
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.dof_data.values.iter().map(|v| Point::from(*v)))
    }
}
