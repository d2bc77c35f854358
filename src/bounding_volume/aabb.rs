//! Axis Aligned Bounding Box.

use crate::math::{Point, Real, UnitVector, Vector, DIM, TWO_DIM};
use arrayvec::ArrayVec;

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is defined by its minimum and maximum corners. Its faces are
/// always orthogonal to the coordinate axes.
///
/// Within this crate an `Aabb` plays two roles: it is the region kept (or
/// removed) by a box clip, and it is the spatial extent reported by a mesh
/// through [`crate::mesh::Mesh::bounds`].
///
/// # Structure
///
/// - **mins**: the point with the smallest coordinates on each axis.
/// - **maxs**: the point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z`
///   for a valid AABB. [`Aabb::new_invalid`] breaks it on purpose, as the
///   starting point of [`Aabb::from_points`].
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use hoclip3d::bounding_volume::Aabb;
/// use hoclip3d::math::Point;
///
/// let aabb = Aabb::new(Point::new(-0.5, -0.5, -0.5), Point::new(0.5, 0.5, 0.5));
///
/// assert_eq!(aabb.center(), Point::origin());
/// assert_eq!(aabb.extents().x, 1.0);
///
/// // Every face lies half a unit away from the center.
/// for (origin, normal) in aabb.faces() {
///     assert_eq!(normal.dot(&(origin - aabb.center())), 0.5);
/// }
/// # }
/// ```
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB.
    ///
    /// # Arguments:
    ///   * `mins` - position of the point with the smallest coordinates.
    ///   * `maxs` - position of the point with the highest coordinates. Each component of `mins`
    ///     must be smaller than the related components of `maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates an invalid AABB with `mins` components set to `Real::MAX` and `maxs`components set to `-Real::MAX`.
    ///
    /// This is often used as the initial values of some AABB merging algorithms.
    #[inline]
    pub fn new_invalid() -> Self {
        Self::new(
            Vector::repeat(Real::MAX).into(),
            Vector::repeat(-Real::MAX).into(),
        )
    }

    /// Creates a new AABB that tightly encloses a set of points.
    ///
    /// Returns an invalid AABB (see [`Aabb::new_invalid`]) if `pts` is empty.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_invalid();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// The center of this AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The extents of this AABB.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// The six faces of this AABB, each given as a point on the face and the face's outward normal.
    ///
    /// Faces are ordered `-x`, `+x`, `-y`, `+y`, `-z`, `+z`.
    pub fn faces(&self) -> ArrayVec<(Point<Real>, UnitVector<Real>), TWO_DIM> {
        let mut faces = ArrayVec::new();

        for i in 0..DIM {
            let axis = Vector::ith_axis(i);
            faces.push((self.mins, -axis));
            faces.push((self.maxs, axis));
        }

        faces
    }

    /// Computes the vertices of this `Aabb`.
    ///
    /// The vertices are given in the following order, in a right-handed coordinate system:
    /// ```text
    ///    y             3 - 2
    ///    |           7 − 6 |
    ///    ___ x       |   | 1  (the zero is below 3 and on the left of 1,
    ///   /            4 - 5     hidden by the 4-5-6-7 face.)
    ///  z
    /// ```
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }
}
