//! Clipping of meshes against boxes, spheres, and planes.

pub use self::clip::{Clip, ClipError};
pub use self::distance::{
    BoxDistance, DistanceEvaluator, DistanceFunction, MultiPlaneDistance, SinglePlaneDistance,
    SphereDistance,
};
pub use self::scratch::{ScratchField, CLIP_FIELD_NAME};
pub use self::shape::{ClipOptions, ClipPlane, ClipShape, ClipShapeError, MeshlessDomainPolicy};

mod clip;
mod distance;
mod scratch;
mod shape;
