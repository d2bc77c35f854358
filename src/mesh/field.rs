use crate::math::{Point, Real};
use crate::mesh::mesh::check_element_layout;
use crate::mesh::{ElementType, GridFunction, Mesh, MeshBuilderError, UnstructuredMesh};
use crate::utils;
use downcast_rs::{impl_downcast, DowncastSync};
use std::fmt::Debug;

/// Trait implemented by every scalar field that can be stored in a [`crate::data_model::DataSet`].
pub trait Field: DowncastSync + Debug {
    /// The name of this field.
    fn name(&self) -> &str;

    /// Renames this field.
    fn set_name(&mut self, name: String);

    /// The name of the mesh this field is defined on.
    fn mesh_name(&self) -> &str;

    /// Associates this field to the mesh named `mesh_name`.
    fn set_mesh_name(&mut self, mesh_name: String);

    /// The polynomial order of the field's elements.
    fn order(&self) -> u32;

    /// The name of the element type of this field.
    fn element_name(&self) -> &'static str;

    /// The per-control-point values and connectivity of this field.
    fn dof_data(&self) -> &GridFunction<1>;

    /// The smallest and largest control-point values, or `None` if the field is empty.
    fn range(&self) -> Option<(Real, Real)> {
        self.dof_data().values.iter().fold(None, |acc, [v]| match acc {
            None => Some((*v, *v)),
            Some((lo, hi)) => Some((lo.min(*v), hi.max(*v))),
        })
    }
}

impl_downcast!(sync Field);

/// A scalar field made of elements of type `E`.
///
/// The field elements have the same dimension, shape and order policy as the
/// elements of the mesh the field was built for.
#[derive(Clone, Debug, PartialEq)]
pub struct UnstructuredField<E: ElementType> {
    name: String,
    mesh_name: String,
    dof_data: GridFunction<1>,
    order: u32,
    _element: E,
}

impl<E: ElementType> UnstructuredField<E> {
    /// Creates an unnamed field from its control-point values.
    pub fn new(dof_data: GridFunction<1>, order: u32) -> Result<Self, MeshBuilderError> {
        check_element_layout::<E>(dof_data.el_dofs, order)?;
        Ok(Self {
            name: String::new(),
            mesh_name: String::new(),
            dof_data,
            order,
            _element: E::default(),
        })
    }

    /// Creates a field on `mesh` by evaluating `f` at each of its control points.
    ///
    /// The field shares the connectivity of the mesh coordinates.
    pub fn from_fn(
        name: impl Into<String>,
        mesh: &UnstructuredMesh<E>,
        f: impl Fn(&Point<Real>) -> Real + Sync + Send,
    ) -> Self {
        let mesh_dofs = mesh.dof_data();
        let mut dof_data = GridFunction::<1>::with_topology_of(mesh_dofs);
        utils::map_dofs(&mesh_dofs.values, &mut dof_data.values, |p| {
            [f(&Point::from(*p))]
        });

        Self {
            name: name.into(),
            mesh_name: mesh.name().to_string(),
            dof_data,
            order: mesh.order(),
            _element: E::default(),
        }
    }
}

impl<E: ElementType> Field for UnstructuredField<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn mesh_name(&self) -> &str {
        &self.mesh_name
    }

    fn set_mesh_name(&mut self, mesh_name: String) {
        self.mesh_name = mesh_name;
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn element_name(&self) -> &'static str {
        E::NAME
    }

    fn dof_data(&self) -> &GridFunction<1> {
        &self.dof_data
    }
}
