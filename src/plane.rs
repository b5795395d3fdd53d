//! Representation of planes.

use crate::vector::Vector3;
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A plane in 3D, represented by a normal vector and an offset `w`.
///
/// The normal need not have unit length. Use [`Self::normalized`] to obtain
/// the equivalent plane with a unit normal.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Zeroable, Pod)]
pub struct Plane {
    normal: Vector3,
    w: f64,
}

impl Plane {
    /// Creates a new plane with normal `(x, y, z)` and offset `w`.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self::from_normal_and_offset(Vector3::new(x, y, z), w)
    }

    #[inline]
    pub const fn from_normal_and_offset(normal: Vector3, w: f64) -> Self {
        Self { normal, w }
    }

    /// Returns the normal vector of the plane.
    #[inline]
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Returns the offset of the plane.
    #[inline]
    pub fn w(&self) -> f64 {
        self.w
    }

    /// Returns the point whose components all equal the offset.
    #[inline]
    pub fn origin(&self) -> Vector3 {
        Vector3::same(self.w)
    }

    /// Returns the plane with the normal and offset negated.
    #[inline]
    pub fn flipped(&self) -> Self {
        Self::from_normal_and_offset(-self.normal, -self.w)
    }

    /// Whether the plane has a non-zero normal.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.normal != Vector3::zeros()
    }

    /// Returns the length of the normal vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.normal.length()
    }

    /// Returns the plane with the normal and offset divided by the length of
    /// the normal. A plane that is not valid is returned unchanged.
    pub fn normalized(&self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::trace!("Normalizing plane with zero normal");
            return *self;
        }
        Self::from_normal_and_offset(self.normal / magnitude, self.w / magnitude)
    }

    /// Returns the normal components followed by the offset.
    pub fn to_array(&self) -> [f64; 4] {
        [self.normal.x(), self.normal.y(), self.normal.z(), self.w]
    }
}

impl AbsDiffEq for Plane {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.normal.abs_diff_eq(&other.normal, epsilon) && self.w.abs_diff_eq(&other.w, epsilon)
    }
}

impl RelativeEq for Plane {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self.w.relative_eq(&other.w, epsilon, max_relative)
    }
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Plane({}, {}, {}, {})",
            self.normal.x(),
            self.normal.y(),
            self.normal.z(),
            self.w
        )
    }
}
