//! Mesh filters.

pub use self::clip::{
    BoxDistance, Clip, ClipError, ClipOptions, ClipPlane, ClipShape, ClipShapeError,
    DistanceEvaluator, DistanceFunction, MeshlessDomainPolicy, MultiPlaneDistance, ScratchField,
    SinglePlaneDistance, SphereDistance, CLIP_FIELD_NAME,
};
pub use self::clip_field::{ClipField, ClipFieldError, ClipFieldParams, ElementClipper};

pub mod clip;
pub mod clip_field;
