//! Signed-distance fields evaluated at the control points of a mesh.

use crate::bounding_volume::Aabb;
use crate::filters::clip::{ClipPlane, ClipShapeError};
use crate::math::{Point, Real, UnitVector, Vector, TWO_DIM};
use crate::mesh::{
    dispatch_3d, ElementType, Field, Mesh, MeshFunctor, UnstructuredField, UnstructuredMesh,
    UnsupportedMesh,
};
use crate::utils;
use arrayvec::ArrayVec;

/// A scalar function of space whose level set at [`Self::clip_value`] is a clip surface.
pub trait DistanceFunction: Sync {
    /// The value of this function at `pt`.
    fn distance(&self, pt: &Point<Real>) -> Real;

    /// The threshold separating the two sides of the clip surface.
    fn clip_value(&self) -> Real {
        0.0
    }
}

/// Signed distance to the boundary of an axis-aligned box.
///
/// Computed as the largest of the six face distances, so it is negative
/// inside the box and zero on its faces.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxDistance {
    faces: ArrayVec<(Point<Real>, UnitVector<Real>), TWO_DIM>,
}

impl BoxDistance {
    /// The distance field of `aabb`.
    pub fn new(aabb: &Aabb) -> Self {
        Self {
            faces: aabb.faces(),
        }
    }
}

impl DistanceFunction for BoxDistance {
    #[inline]
    fn distance(&self, pt: &Point<Real>) -> Real {
        self.faces
            .iter()
            .map(|(origin, normal)| normal.dot(&(pt - origin)))
            .fold(-Real::MAX, Real::max)
    }
}

/// Distance to the center of a sphere.
///
/// The clip value is the sphere radius.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphereDistance {
    /// The sphere center.
    pub center: Point<Real>,
    /// The sphere radius.
    pub radius: Real,
}

impl DistanceFunction for SphereDistance {
    #[inline]
    fn distance(&self, pt: &Point<Real>) -> Real {
        na::distance(&self.center, pt)
    }

    fn clip_value(&self) -> Real {
        self.radius
    }
}

/// Signed distance to a plane, positive on the side its normal points to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SinglePlaneDistance {
    origin: Point<Real>,
    normal: Vector<Real>,
}

impl SinglePlaneDistance {
    /// The distance field of `plane`.
    pub fn new(plane: &ClipPlane) -> Self {
        Self {
            origin: plane.origin,
            normal: utils::normalize_or_keep(plane.normal),
        }
    }
}

impl DistanceFunction for SinglePlaneDistance {
    #[inline]
    fn distance(&self, pt: &Point<Real>) -> Real {
        (pt - self.origin).dot(&self.normal)
    }
}

/// The smallest signed distance to one, two or three planes.
///
/// Its non-negative region is the intersection of the positive sides of
/// every plane.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPlaneDistance {
    planes: ArrayVec<SinglePlaneDistance, 3>,
}

impl MultiPlaneDistance {
    /// The combined distance field of `planes`.
    ///
    /// Fails if `planes` doesn't contain one to three planes.
    pub fn new(planes: &[ClipPlane]) -> Result<Self, ClipShapeError> {
        if planes.is_empty() || planes.len() > 3 {
            return Err(ClipShapeError::PlaneCount(planes.len()));
        }

        Ok(Self {
            planes: planes.iter().map(SinglePlaneDistance::new).collect(),
        })
    }

    /// The number of planes combined by this field.
    pub fn num_planes(&self) -> usize {
        self.planes.len()
    }
}

impl DistanceFunction for MultiPlaneDistance {
    #[inline]
    fn distance(&self, pt: &Point<Real>) -> Real {
        self.planes
            .iter()
            .map(|plane| plane.distance(pt))
            .fold(Real::MAX, Real::min)
    }
}

/// Evaluates a [`DistanceFunction`] at every control point of a mesh.
///
/// The resulting field is unnamed and has the element type, order and
/// connectivity of the mesh coordinates.
pub struct DistanceEvaluator<'a, D: ?Sized> {
    distance: &'a D,
}

impl<'a, D: DistanceFunction + ?Sized> DistanceEvaluator<'a, D> {
    /// An evaluator of `distance`.
    pub fn new(distance: &'a D) -> Self {
        Self { distance }
    }

    /// Evaluates the distance on `mesh`.
    pub fn evaluate(&mut self, mesh: &dyn Mesh) -> Result<Box<dyn Field>, UnsupportedMesh> {
        dispatch_3d(mesh, self)
    }
}

impl<D: DistanceFunction + ?Sized> MeshFunctor for DistanceEvaluator<'_, D> {
    type Output = Box<dyn Field>;

    fn call<E: ElementType>(&mut self, mesh: &UnstructuredMesh<E>) -> Self::Output {
        let distance = self.distance;
        Box::new(UnstructuredField::from_fn("", mesh, |pt| distance.distance(pt)))
    }
}
