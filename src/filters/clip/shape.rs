use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::utils;

/// Error raised when a clip shape is built from an invalid number of planes.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum ClipShapeError {
    /// Multi-plane clipping requires between one and three planes.
    #[error("a multi-plane clip requires 1 to 3 planes, got {0}.")]
    PlaneCount(usize),
}

/// A clip plane given by a point and a normal.
///
/// The normal is normalized on construction. A zero normal is kept as-is.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ClipPlane {
    /// A point on the plane.
    pub origin: Point<Real>,
    /// The plane normal, pointing toward the positive distances.
    pub normal: Vector<Real>,
}

impl ClipPlane {
    /// Creates a clip plane, normalizing `normal` if it isn't zero.
    pub fn new(origin: Point<Real>, normal: Vector<Real>) -> Self {
        Self {
            origin,
            normal: utils::normalize_or_keep(normal),
        }
    }
}

impl Default for ClipPlane {
    fn default() -> Self {
        Self::new(Point::origin(), Vector::x())
    }
}

/// The implicit shape a mesh is clipped against.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ClipShape {
    /// An axis-aligned box.
    Box(Aabb),
    /// A sphere.
    Sphere {
        /// The sphere center.
        center: Point<Real>,
        /// The sphere radius.
        radius: Real,
    },
    /// A single plane.
    Plane(ClipPlane),
    /// Two planes.
    TwoPlanes([ClipPlane; 2]),
    /// Three planes.
    ThreePlanes([ClipPlane; 3]),
}

impl Default for ClipShape {
    fn default() -> Self {
        ClipShape::Plane(ClipPlane::default())
    }
}

impl ClipShape {
    /// Builds a single-, two- or three-plane shape from a slice of planes.
    pub fn from_planes(planes: &[ClipPlane]) -> Result<Self, ClipShapeError> {
        match *planes {
            [a] => Ok(ClipShape::Plane(a)),
            [a, b] => Ok(ClipShape::TwoPlanes([a, b])),
            [a, b, c] => Ok(ClipShape::ThreePlanes([a, b, c])),
            _ => Err(ClipShapeError::PlaneCount(planes.len())),
        }
    }

    /// The planes of this shape. Empty for boxes and spheres.
    pub fn planes(&self) -> &[ClipPlane] {
        match self {
            ClipShape::Box(_) | ClipShape::Sphere { .. } => &[],
            ClipShape::Plane(plane) => std::slice::from_ref(plane),
            ClipShape::TwoPlanes(planes) => planes,
            ClipShape::ThreePlanes(planes) => planes,
        }
    }

    /// The number of clip passes needed for this shape.
    ///
    /// Shapes made of several planes are clipped one plane at a time if
    /// `multi_pass` is `true`, and in a single fused pass otherwise.
    pub fn num_passes(&self, multi_pass: bool) -> usize {
        match self {
            ClipShape::TwoPlanes(_) | ClipShape::ThreePlanes(_) if multi_pass => {
                self.planes().len()
            }
            _ => 1,
        }
    }

    /// Does this shape swap which side of its surface is kept?
    ///
    /// The sphere distance is positive outside, so keeping the inside of a
    /// sphere means keeping the values below its radius.
    pub fn inverts_clip_sense(&self) -> bool {
        match self {
            ClipShape::Sphere { .. } => true,
            ClipShape::Box(_)
            | ClipShape::Plane(_)
            | ClipShape::TwoPlanes(_)
            | ClipShape::ThreePlanes(_) => false,
        }
    }

    /// A short name of this shape's kind, for logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ClipShape::Box(_) => "box",
            ClipShape::Sphere { .. } => "sphere",
            ClipShape::Plane(_) => "plane",
            ClipShape::TwoPlanes(_) => "two-planes",
            ClipShape::ThreePlanes(_) => "three-planes",
        }
    }
}

/// Flags controlling how a [`ClipShape`] is applied.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ClipOptions {
    /// Keep the other side of the clip surface.
    pub invert: bool,
    /// Clip against each plane of a multi-plane shape in its own pass.
    pub multi_pass: bool,
}

/// What to do with domains that have no mesh.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MeshlessDomainPolicy {
    /// Meshless domains are left out of the output.
    #[default]
    Drop,
    /// Meshless domains are copied to the output unchanged.
    PassThrough,
}
