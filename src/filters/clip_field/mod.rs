//! Cutting of mesh elements along an iso-surface of a scalar field.

pub use self::clip_field::{ClipField, ClipFieldError, ClipFieldParams, ElementClipper};

mod clip_field;
mod tet_clipper;
