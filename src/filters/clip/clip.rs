use crate::bounding_volume::Aabb;
use crate::data_model::{Collection, DataSet};
use crate::filters::clip::distance::{
    BoxDistance, DistanceEvaluator, DistanceFunction, MultiPlaneDistance, SinglePlaneDistance,
    SphereDistance,
};
use crate::filters::clip::{
    ClipOptions, ClipPlane, ClipShape, ClipShapeError, MeshlessDomainPolicy, ScratchField,
    CLIP_FIELD_NAME,
};
use crate::filters::clip_field::{ClipField, ClipFieldError, ClipFieldParams, ElementClipper};
use crate::math::{Point, Real, Vector};
use crate::mesh::{Field, Mesh, UnsupportedMesh};
#[cfg(feature = "debug-dump")]
use std::path::PathBuf;

/// Errors raised while clipping a collection.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ClipError {
    /// The clip shape is misconfigured.
    #[error(transparent)]
    Shape(#[from] ClipShapeError),
    /// A domain mesh has an element type the distance evaluators can't handle.
    #[error(transparent)]
    UnsupportedMesh(#[from] UnsupportedMesh),
    /// The element clipper failed.
    #[error(transparent)]
    ClipField(#[from] ClipFieldError),
    /// A single-plane pass was requested for a plane the shape doesn't have.
    #[error("clip pass {pass} is out of range for a shape with {planes} planes.")]
    PassOutOfRange {
        /// The requested pass.
        pass: usize,
        /// The number of planes of the shape.
        planes: usize,
    },
    /// Distances were requested on a domain without mesh.
    #[error("the domain {domain_id} has no mesh.")]
    MissingMesh {
        /// The id of the domain.
        domain_id: i32,
    },
}

/// Clips every domain of a collection against an implicit shape.
///
/// Each domain is clipped in one or more passes. A pass evaluates the
/// distance to the clip surface at every control point of the domain mesh,
/// attaches it to the domain as a temporary field, and lets the element
/// clipper `C` cut the elements along the iso-surface at the shape's clip
/// value. The output of a pass is the input of the next one.
///
/// By default, the part of the mesh outside of a box, inside of a sphere, or
/// on the side a plane normal points to is kept. For multi-plane shapes, the
/// kept part is the intersection of the positive sides of every plane.
/// [`Clip::set_invert_clip`] keeps the other side.
#[derive(Clone, Debug)]
pub struct Clip<C = ClipField> {
    shape: ClipShape,
    options: ClipOptions,
    meshless_policy: MeshlessDomainPolicy,
    clipper: C,
    #[cfg(feature = "debug-dump")]
    debug_dump_dir: Option<PathBuf>,
}

impl Default for Clip<ClipField> {
    fn default() -> Self {
        Self::new()
    }
}

impl Clip<ClipField> {
    /// A clip filter using the reference element clipper and the default shape.
    ///
    /// The default shape is the plane through the origin with the normal `+x`.
    pub fn new() -> Self {
        Self::with_clipper(ClipField::new())
    }
}

impl<C: ElementClipper> Clip<C> {
    /// A clip filter cutting elements with `clipper`.
    pub fn with_clipper(clipper: C) -> Self {
        Self {
            shape: ClipShape::default(),
            options: ClipOptions::default(),
            meshless_policy: MeshlessDomainPolicy::default(),
            clipper,
            #[cfg(feature = "debug-dump")]
            debug_dump_dir: None,
        }
    }

    /// Clips against an axis-aligned box.
    pub fn set_box_clip(&mut self, aabb: Aabb) {
        self.shape = ClipShape::Box(aabb);
    }

    /// Clips against a sphere.
    pub fn set_sphere_clip(&mut self, center: Point<Real>, radius: Real) {
        self.shape = ClipShape::Sphere { center, radius };
    }

    /// Clips against a single plane.
    pub fn set_plane_clip(&mut self, origin: Point<Real>, normal: Vector<Real>) {
        self.shape = ClipShape::Plane(ClipPlane::new(origin, normal));
    }

    /// Clips against two planes.
    pub fn set_two_plane_clip(
        &mut self,
        origin1: Point<Real>,
        normal1: Vector<Real>,
        origin2: Point<Real>,
        normal2: Vector<Real>,
    ) {
        self.shape = ClipShape::TwoPlanes([
            ClipPlane::new(origin1, normal1),
            ClipPlane::new(origin2, normal2),
        ]);
    }

    /// Clips against three planes.
    #[allow(clippy::too_many_arguments)]
    pub fn set_three_plane_clip(
        &mut self,
        origin1: Point<Real>,
        normal1: Vector<Real>,
        origin2: Point<Real>,
        normal2: Vector<Real>,
        origin3: Point<Real>,
        normal3: Vector<Real>,
    ) {
        self.shape = ClipShape::ThreePlanes([
            ClipPlane::new(origin1, normal1),
            ClipPlane::new(origin2, normal2),
            ClipPlane::new(origin3, normal3),
        ]);
    }

    /// Clips against one to three planes.
    ///
    /// On error, the current shape is left unchanged.
    pub fn set_plane_clips(&mut self, planes: &[ClipPlane]) -> Result<(), ClipShapeError> {
        self.shape = ClipShape::from_planes(planes)?;
        Ok(())
    }

    /// Sets the clip shape.
    pub fn set_shape(&mut self, shape: ClipShape) {
        self.shape = shape;
    }

    /// The clip shape.
    #[inline]
    pub fn shape(&self) -> &ClipShape {
        &self.shape
    }

    /// Keeps the other side of the clip surface.
    pub fn set_invert_clip(&mut self, invert: bool) {
        self.options.invert = invert;
    }

    /// Is the other side of the clip surface kept?
    #[inline]
    pub fn invert_clip(&self) -> bool {
        self.options.invert
    }

    /// Clips multi-plane shapes one plane at a time instead of in a single fused pass.
    ///
    /// This has no effect on shapes with less than two planes.
    pub fn set_multi_plane(&mut self, multi_pass: bool) {
        self.options.multi_pass = multi_pass;
    }

    /// Are multi-plane shapes clipped one plane at a time?
    #[inline]
    pub fn multi_plane(&self) -> bool {
        self.options.multi_pass
    }

    /// Sets the invert and multi-pass flags at once.
    pub fn set_options(&mut self, options: ClipOptions) {
        self.options = options;
    }

    /// The invert and multi-pass flags.
    #[inline]
    pub fn options(&self) -> ClipOptions {
        self.options
    }

    /// Sets what happens to domains without mesh.
    pub fn set_meshless_domain_policy(&mut self, policy: MeshlessDomainPolicy) {
        self.meshless_policy = policy;
    }

    /// What happens to domains without mesh.
    #[inline]
    pub fn meshless_domain_policy(&self) -> MeshlessDomainPolicy {
        self.meshless_policy
    }

    /// The element clipper.
    #[inline]
    pub fn clipper(&self) -> &C {
        &self.clipper
    }

    /// Writes the input of every clip pass to `dir`, or disables the dump if `dir` is `None`.
    #[cfg(feature = "debug-dump")]
    pub fn set_debug_dump_dir(&mut self, dir: Option<PathBuf>) {
        self.debug_dump_dir = dir;
    }

    /// The number of passes each domain goes through.
    pub fn num_passes(&self) -> usize {
        self.shape.num_passes(self.options.multi_pass)
    }

    /// Whether the element clipper must keep the values at or below the clip value.
    pub fn effective_invert(&self) -> bool {
        self.options.invert != self.shape.inverts_clip_sense()
    }

    /// Evaluates the distance field of the pass `pass` on the mesh of `domain`.
    ///
    /// Returns the unnamed distance field and the clip value it must be
    /// thresholded at. `pass` only matters for multi-plane shapes clipped in
    /// multiple passes, where it selects the plane.
    pub fn make_distances(
        &self,
        domain: &DataSet,
        pass: usize,
    ) -> Result<(Box<dyn Field>, Real), ClipError> {
        let mesh = domain.mesh().ok_or(ClipError::MissingMesh {
            domain_id: domain.domain_id(),
        })?;

        match &self.shape {
            ClipShape::Box(aabb) => evaluate(&BoxDistance::new(aabb), &**mesh),
            ClipShape::Sphere { center, radius } => evaluate(
                &SphereDistance {
                    center: *center,
                    radius: *radius,
                },
                &**mesh,
            ),
            ClipShape::Plane(plane) => evaluate(&SinglePlaneDistance::new(plane), &**mesh),
            ClipShape::TwoPlanes(_) | ClipShape::ThreePlanes(_) => {
                let planes = self.shape.planes();

                if self.options.multi_pass {
                    let plane = planes.get(pass).ok_or(ClipError::PassOutOfRange {
                        pass,
                        planes: planes.len(),
                    })?;
                    evaluate(&SinglePlaneDistance::new(plane), &**mesh)
                } else {
                    evaluate(&MultiPlaneDistance::new(planes)?, &**mesh)
                }
            }
        }
    }

    /// Clips every domain of `collection`.
    ///
    /// The output holds one domain per input domain with a mesh, in the same
    /// order. Domains without mesh are handled according to the
    /// [`MeshlessDomainPolicy`]. The first error aborts the whole operation.
    pub fn execute(&self, collection: &Collection) -> Result<Collection, ClipError> {
        let mut output = Collection::new();

        for domain in collection {
            if !domain.has_mesh() {
                match self.meshless_policy {
                    MeshlessDomainPolicy::Drop => {
                        log::warn!(
                            "domain {} has no mesh and is left out of the clip output",
                            domain.domain_id()
                        );
                    }
                    MeshlessDomainPolicy::PassThrough => {
                        log::debug!(
                            "domain {} has no mesh and is passed through",
                            domain.domain_id()
                        );
                        output.add_domain(domain.clone());
                    }
                }
                continue;
            }

            output.add_domain(self.clip_domain(domain)?);
        }

        Ok(output)
    }

    fn clip_domain(&self, domain: &DataSet) -> Result<DataSet, ClipError> {
        let passes = self.num_passes();
        let invert = self.effective_invert();
        let mut input = domain.clone();

        log::debug!(
            "clipping domain {} against a {} in {} pass(es), effective invert: {}",
            domain.domain_id(),
            self.shape.kind_name(),
            passes,
            invert
        );

        for pass in 0..passes {
            let (field, clip_value) = self.make_distances(&input, pass)?;
            let mesh_name = match input.mesh() {
                Some(mesh) => mesh.name().to_string(),
                None => String::new(),
            };

            log::debug!(
                "domain {}, pass {}/{}: clip value {}",
                input.domain_id(),
                pass + 1,
                passes,
                clip_value
            );

            let mut output = {
                let scratch = ScratchField::attach(&mut input, field, &mesh_name);

                #[cfg(feature = "debug-dump")]
                self.dump_pass(&scratch, pass);

                let params = ClipFieldParams {
                    field: CLIP_FIELD_NAME.to_string(),
                    clip_value,
                    exclude_clip_field: true,
                    invert,
                };
                self.clipper.clip(&scratch, &params)?
            };

            let _ = output.remove_field(CLIP_FIELD_NAME);
            input = output;
        }

        Ok(input)
    }

    #[cfg(feature = "debug-dump")]
    fn dump_pass(&self, domain: &DataSet, pass: usize) {
        let Some(dir) = &self.debug_dump_dir else {
            return;
        };

        let path = dir.join(format!("clip_d{}_p{}.txt", domain.domain_id(), pass));
        let result = std::fs::File::create(&path)
            .and_then(|mut file| crate::debug::write_domain_tree(domain, &mut file));

        if let Err(err) = result {
            log::warn!("failed to write the clip dump {}: {}", path.display(), err);
        }
    }
}

fn evaluate<D: DistanceFunction>(
    distance: &D,
    mesh: &dyn Mesh,
) -> Result<(Box<dyn Field>, Real), ClipError> {
    let field = DistanceEvaluator::new(distance).evaluate(mesh)?;
    Ok((field, distance.clip_value()))
}
