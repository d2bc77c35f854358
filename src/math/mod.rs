//! Compilation flags dependent aliases for mathematical types.

pub use na::{Point3, UnitVector3, Vector3};

/// The scalar type used throughout this crate.
#[cfg(feature = "f64")]
pub type Real = f64;

/// The scalar type used throughout this crate.
#[cfg(feature = "f32")]
pub type Real = f32;

/// The default tolerance used for geometric operations.
pub const DEFAULT_EPSILON: Real = Real::EPSILON;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The dimension of the space multiplied by two.
///
/// This is the number of faces of an axis-aligned box.
pub const TWO_DIM: usize = DIM * 2;

/// The point type.
pub use Point3 as Point;

/// The vector type.
pub use Vector3 as Vector;

/// The unit vector type.
pub use UnitVector3 as UnitVector;
