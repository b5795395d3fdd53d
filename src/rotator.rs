//! Rotations represented by three independent Euler angles.

use crate::{
    angle::{Angle, AngleUnit, Degrees, Radians},
    dynamic::AnyVector,
    error::{MathError, Result},
    vector::Vector3,
};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::fmt;

/// A rotation given by a roll angle about the x-axis, a pitch angle about the
/// y-axis and a yaw angle about the z-axis.
///
/// Each angle is stored in radians and kept within `[0, 2π)`. Degrees are
/// derived on access, so the two units can never disagree.
///
/// Vectors are rotated by applying the yaw first, then the pitch and finally
/// the roll, each as a rotation within the coordinate plane perpendicular to
/// the respective axis.
#[repr(C)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[Radians; 3]", from = "[Radians; 3]")
)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Zeroable, Pod)]
pub struct Rotator3 {
    x: Radians,
    y: Radians,
    z: Radians,
}

impl Rotator3 {
    /// Creates a new rotator from the given roll (`x`), pitch (`y`) and yaw
    /// (`z`) angles, which may be in any unit.
    pub fn new(x: impl Angle, y: impl Angle, z: impl Angle) -> Self {
        Self {
            x: canonical(x),
            y: canonical(y),
            z: canonical(z),
        }
    }

    /// Creates a new rotator from raw roll, pitch and yaw values in the given
    /// unit.
    pub fn from_values(x: f64, y: f64, z: f64, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => Self::from_degrees(x, y, z),
            AngleUnit::Radians => Self::from_radians(x, y, z),
        }
    }

    /// Creates a new rotator from roll, pitch and yaw in radians.
    pub fn from_radians(x: f64, y: f64, z: f64) -> Self {
        Self::new(Radians(x), Radians(y), Radians(z))
    }

    /// Creates a new rotator from roll, pitch and yaw in degrees.
    pub fn from_degrees(x: f64, y: f64, z: f64) -> Self {
        Self::new(Degrees(x), Degrees(y), Degrees(z))
    }

    /// Creates the rotator that leaves every vector unchanged.
    pub fn identity() -> Self {
        Self::default()
    }

    /// Creates a new rotator whose roll, pitch and yaw are the x-, y- and
    /// z-components of the given vector, interpreted in the given unit.
    pub fn from_vector(angles: &Vector3, unit: AngleUnit) -> Self {
        Self::from_values(angles.x(), angles.y(), angles.z(), unit)
    }

    /// Like [`Self::from_vector`], for a vector whose dimension is only known
    /// at runtime.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidDimension`] if the vector is not
    /// 3-dimensional.
    pub fn try_from_any_vector(angles: &AnyVector, unit: AngleUnit) -> Result<Self> {
        match angles {
            AnyVector::Three(angles) => Ok(Self::from_vector(angles, unit)),
            AnyVector::Two(_) => Err(MathError::invalid_dimension(3, angles.dimension())),
        }
    }

    /// The rotation angle about the x-axis.
    pub fn x(&self) -> Radians {
        self.x
    }

    /// The rotation angle about the x-axis, in degrees.
    pub fn x_degrees(&self) -> Degrees {
        self.x.as_degrees().wrapped()
    }

    /// The rotation angle about the y-axis.
    pub fn y(&self) -> Radians {
        self.y
    }

    /// The rotation angle about the y-axis, in degrees.
    pub fn y_degrees(&self) -> Degrees {
        self.y.as_degrees().wrapped()
    }

    /// The rotation angle about the z-axis.
    pub fn z(&self) -> Radians {
        self.z
    }

    /// The rotation angle about the z-axis, in degrees.
    pub fn z_degrees(&self) -> Degrees {
        self.z.as_degrees().wrapped()
    }

    /// Same as [`Self::x`].
    pub fn roll(&self) -> Radians {
        self.x
    }

    /// Same as [`Self::y`].
    pub fn pitch(&self) -> Radians {
        self.y
    }

    /// Same as [`Self::z`].
    pub fn yaw(&self) -> Radians {
        self.z
    }

    /// Sets the rotation angle about the x-axis.
    pub fn set_x(&mut self, x: impl Angle) -> &mut Self {
        self.x = canonical(x);
        self
    }

    /// Sets the rotation angle about the y-axis.
    pub fn set_y(&mut self, y: impl Angle) -> &mut Self {
        self.y = canonical(y);
        self
    }

    /// Sets the rotation angle about the z-axis.
    pub fn set_z(&mut self, z: impl Angle) -> &mut Self {
        self.z = canonical(z);
        self
    }

    /// Rotates the given vector by this rotator.
    pub fn rotate_vector(&self, vector: &Vector3) -> Vector3 {
        let (x, y) = rotate_in_plane(vector.x(), vector.y(), self.z);
        let (x, z) = rotate_in_plane(x, vector.z(), self.y);
        let (y, z) = rotate_in_plane(y, z, self.x);
        Vector3::new(x, y, z)
    }

    /// Applies the inverse of this rotator to the given vector, so that
    /// `unrotate_vector(rotate_vector(v)) == v` up to rounding.
    pub fn unrotate_vector(&self, vector: &Vector3) -> Vector3 {
        let (y, z) = rotate_in_plane(vector.y(), vector.z(), -self.x);
        let (x, z) = rotate_in_plane(vector.x(), z, -self.y);
        let (x, y) = rotate_in_plane(x, y, -self.z);
        Vector3::new(x, y, z)
    }

    /// Like [`Self::rotate_vector`], for a vector whose dimension is only
    /// known at runtime.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidDimension`] if the vector is not
    /// 3-dimensional.
    pub fn rotate_any_vector(&self, vector: &AnyVector) -> Result<Vector3> {
        match vector {
            AnyVector::Three(vector) => Ok(self.rotate_vector(vector)),
            AnyVector::Two(_) => Err(MathError::invalid_dimension(3, vector.dimension())),
        }
    }

    /// Computes the direction the x-axis points in after this rotation.
    pub fn rotation_x_vector(&self) -> Vector3 {
        self.rotate_vector(&Vector3::unit_x())
    }

    /// Returns the roll, pitch and yaw angles in the given unit.
    pub fn to_array(&self, unit: AngleUnit) -> [f64; 3] {
        match unit {
            AngleUnit::Degrees => [
                self.x_degrees().degrees(),
                self.y_degrees().degrees(),
                self.z_degrees().degrees(),
            ],
            AngleUnit::Radians => [self.x.radians(), self.y.radians(), self.z.radians()],
        }
    }

    /// Returns the roll, pitch and yaw angles in the given unit as the
    /// components of a vector.
    pub fn to_vector(&self, unit: AngleUnit) -> Vector3 {
        Vector3::from(self.to_array(unit))
    }
}

impl From<[Radians; 3]> for Rotator3 {
    fn from([x, y, z]: [Radians; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Rotator3> for [Radians; 3] {
    fn from(rotator: Rotator3) -> Self {
        [rotator.x, rotator.y, rotator.z]
    }
}

impl AbsDiffEq for Rotator3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Rotator3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl fmt::Display for Rotator3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rotator3({}, {}, {})",
            self.x_degrees(),
            self.y_degrees(),
            self.z_degrees()
        )
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Rotator3 {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::from_radians(
            u.arbitrary()?,
            u.arbitrary()?,
            u.arbitrary()?,
        ))
    }
}

/// Wraps in the angle's own unit before converting, so that whole turns given
/// in degrees are removed exactly.
fn canonical(angle: impl Angle) -> Radians {
    angle.wrapped().as_radians().wrapped()
}

fn rotate_in_plane(a: f64, b: f64, angle: Radians) -> (f64, f64) {
    let (sin, cos) = angle.radians().sin_cos();
    (a * cos - b * sin, a * sin + b * cos)
}
