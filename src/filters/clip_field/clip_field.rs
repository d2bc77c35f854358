use crate::data_model::DataSet;
use crate::filters::clip_field::tet_clipper::{TetClipper, VertexSource};
use crate::math::Real;
use crate::mesh::builders::HEX_TO_TETS;
use crate::mesh::{
    dispatch_3d, ElementShape, ElementType, Field, GridFunction, Mesh, MeshBuilderError,
    MeshFunctor, TetP1, UnstructuredField, UnstructuredMesh, UnsupportedMesh,
};
use std::sync::Arc;

/// Errors raised by an [`ElementClipper`].
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ClipFieldError {
    /// The domain to clip has no mesh.
    #[error("the domain has no mesh to clip.")]
    MissingMesh,
    /// The domain has no field with the requested name.
    #[error("the domain has no field named `{0}`.")]
    MissingField(String),
    /// The clip field doesn't share the connectivity of the mesh coordinates.
    #[error("the field `{0}` does not share the control points of the mesh.")]
    FieldTopologyMismatch(String),
    /// The mesh element type isn't supported.
    #[error(transparent)]
    UnsupportedMesh(#[from] UnsupportedMesh),
    /// The clipped mesh could not be assembled.
    #[error("failed to assemble the clipped mesh: {0}")]
    InvalidOutput(#[from] MeshBuilderError),
}

/// Parameters of a single element-clip operation.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipFieldParams {
    /// The name of the scalar field thresholded to decide what is kept.
    pub field: String,
    /// The threshold.
    pub clip_value: Real,
    /// Don't copy the thresholded field to the output domain.
    pub exclude_clip_field: bool,
    /// Keep the values at or below the threshold instead of the values at or above it.
    pub invert: bool,
}

/// An algorithm cutting the elements of a domain along an iso-surface of one of its fields.
pub trait ElementClipper {
    /// Clips `input`, returning a new domain.
    ///
    /// With `params.invert == false`, the output covers the region where the
    /// field `params.field` is at or above `params.clip_value`. With
    /// `params.invert == true`, it covers the region where the field is at or
    /// below it. `input` is left untouched.
    fn clip(&self, input: &DataSet, params: &ClipFieldParams) -> Result<DataSet, ClipFieldError>;
}

/// Reference element clipper working on the linearized elements.
///
/// Every element is reduced to its geometric corners, hexahedra are split
/// into six tetrahedra, and every tetrahedron is cut by the linear
/// interpolation of the clip field. The output is a linear tetrahedral mesh
/// with the name of the input mesh. Every other field sharing the control
/// points of the mesh is interpolated onto the output.
#[derive(Copy, Clone, Debug, Default)]
pub struct ClipField;

impl ClipField {
    /// Creates a reference element clipper.
    pub fn new() -> Self {
        Self
    }
}

impl ElementClipper for ClipField {
    fn clip(&self, input: &DataSet, params: &ClipFieldParams) -> Result<DataSet, ClipFieldError> {
        let mesh = input.mesh().ok_or(ClipFieldError::MissingMesh)?;
        let field = input
            .field(&params.field)
            .ok_or_else(|| ClipFieldError::MissingField(params.field.clone()))?;

        let mut functor = ClipFunctor {
            input,
            field: &**field,
            params,
        };
        dispatch_3d(&**mesh, &mut functor)?
    }
}

struct ClipFunctor<'a> {
    input: &'a DataSet,
    field: &'a dyn Field,
    params: &'a ClipFieldParams,
}

impl MeshFunctor for ClipFunctor<'_> {
    type Output = Result<DataSet, ClipFieldError>;

    fn call<E: ElementType>(&mut self, mesh: &UnstructuredMesh<E>) -> Self::Output {
        let coords = mesh.dof_data();
        let scalars = self.field.dof_data();

        if !scalars.same_topology_as(coords) {
            return Err(ClipFieldError::FieldTopologyMismatch(
                self.field.name().to_string(),
            ));
        }

        let sign = if self.params.invert { -1.0 } else { 1.0 };
        let signs: Vec<Real> = scalars
            .values
            .iter()
            .map(|[v]| (v - self.params.clip_value) * sign)
            .collect();

        let corners = E::corner_dofs(mesh.order());
        let mut clipper = TetClipper::new(&signs);

        for e in 0..coords.size_el {
            let dofs = coords.element_dofs(e);
            let corner = |c: usize| dofs[corners[c]];

            match E::SHAPE {
                ElementShape::Tensor => {
                    for tet in HEX_TO_TETS {
                        clipper.clip_tet(tet.map(corner));
                    }
                }
                ElementShape::Simplex => clipper.clip_tet([0, 1, 2, 3].map(corner)),
            }
        }

        let (sources, ctrl_idx) = clipper.finish();
        log::trace!(
            "clipped {} elements into {} tetrahedra",
            coords.size_el,
            ctrl_idx.len() / 4
        );

        let points: Vec<[Real; 3]> = sources
            .iter()
            .map(|s| s.interpolate(&coords.values))
            .collect();
        let out_coords = GridFunction::new(points, ctrl_idx, 4)?;

        let mut output = DataSet::with_mesh(Arc::new(UnstructuredMesh::<TetP1>::new(
            mesh.name(),
            out_coords.clone(),
            1,
        )?));
        output.set_domain_id(self.input.domain_id());

        for field in self.input.fields() {
            if self.params.exclude_clip_field && field.name() == self.params.field {
                continue;
            }

            if !field.dof_data().same_topology_as(coords) {
                log::warn!(
                    "field `{}` does not share the control points of mesh `{}` and is dropped from the clipped domain",
                    field.name(),
                    mesh.name()
                );
                continue;
            }

            let _ = output.add_field(Arc::new(interpolate_field(
                &**field,
                &sources,
                &out_coords,
            )?));
        }

        Ok(output)
    }
}

fn interpolate_field(
    field: &dyn Field,
    sources: &[VertexSource],
    out_coords: &GridFunction<3>,
) -> Result<UnstructuredField<TetP1>, MeshBuilderError> {
    let mut values = GridFunction::<1>::with_topology_of(out_coords);
    for (out, source) in values.values.iter_mut().zip(sources) {
        *out = source.interpolate(&field.dof_data().values);
    }

    let mut result = UnstructuredField::new(values, 1)?;
    result.set_name(field.name().to_string());
    result.set_mesh_name(field.mesh_name().to_string());
    Ok(result)
}
