//! Vectors and rotations whose dimension is only known at runtime, for
//! callers that receive components from untyped sources.
//!
//! Every operation here checks that its operands agree in dimension and
//! returns [`MathError::InvalidDimension`] otherwise, before delegating to the
//! statically typed counterpart.

use crate::{
    angle::Radians,
    error::{MathError, Result},
    look_at::find_look_at_rotation,
    query,
    rotator::Rotator3,
    vector::{Vector2, Vector3},
};
use std::fmt;

/// Either a [`Vector2`] or a [`Vector3`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyVector {
    Two(Vector2),
    Three(Vector3),
}

/// A rotation matching the dimension of an [`AnyVector`]: a single angle in
/// 2D or a [`Rotator3`] in 3D.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnyRotation {
    Planar(Radians),
    Spatial(Rotator3),
}

impl AnyVector {
    /// Creates a vector from a slice of two or three components.
    ///
    /// # Errors
    /// Returns [`MathError::InvalidDimension`] for any other number of
    /// components.
    pub fn from_components(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y] => Ok(Self::Two(Vector2::new(x, y))),
            [x, y, z] => Ok(Self::Three(Vector3::new(x, y, z))),
            _ => Err(MathError::invalid_dimension(
                if components.len() < Vector2::DIMENSION {
                    Vector2::DIMENSION
                } else {
                    Vector3::DIMENSION
                },
                components.len(),
            )),
        }
    }

    /// The number of components.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Two(_) => Vector2::DIMENSION,
            Self::Three(_) => Vector3::DIMENSION,
        }
    }

    /// Returns the components in order.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Self::Two(v) => v.to_array().to_vec(),
            Self::Three(v) => v.to_array().to_vec(),
        }
    }
}

impl AnyRotation {
    /// The dimension of the vectors this rotation applies to.
    pub fn dimension(&self) -> usize {
        match self {
            Self::Planar(_) => Vector2::DIMENSION,
            Self::Spatial(_) => Vector3::DIMENSION,
        }
    }
}

impl From<Vector2> for AnyVector {
    fn from(vector: Vector2) -> Self {
        Self::Two(vector)
    }
}

impl From<Vector3> for AnyVector {
    fn from(vector: Vector3) -> Self {
        Self::Three(vector)
    }
}

impl From<Radians> for AnyRotation {
    fn from(angle: Radians) -> Self {
        Self::Planar(angle)
    }
}

impl From<Rotator3> for AnyRotation {
    fn from(rotator: Rotator3) -> Self {
        Self::Spatial(rotator)
    }
}

impl fmt::Display for AnyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Two(v) => fmt::Display::fmt(v, f),
            Self::Three(v) => fmt::Display::fmt(v, f),
        }
    }
}

/// See [`find_look_at_rotation`].
///
/// # Errors
/// Returns [`MathError::InvalidDimension`] if the points differ in dimension.
pub fn find_any_look_at_rotation(start: &AnyVector, target: &AnyVector) -> Result<AnyRotation> {
    match (start, target) {
        (AnyVector::Two(start), AnyVector::Two(target)) => {
            Ok(AnyRotation::Planar(find_look_at_rotation(start, target)))
        }
        (AnyVector::Three(start), AnyVector::Three(target)) => {
            Ok(AnyRotation::Spatial(find_look_at_rotation(start, target)))
        }
        _ => Err(dimension_mismatch(start.dimension(), &[target.dimension()])),
    }
}

/// See [`query::distance`].
///
/// # Errors
/// Returns [`MathError::InvalidDimension`] if the points differ in dimension.
pub fn any_distance(a: &AnyVector, b: &AnyVector) -> Result<f64> {
    match (a, b) {
        (AnyVector::Two(a), AnyVector::Two(b)) => Ok(query::distance(a, b)),
        (AnyVector::Three(a), AnyVector::Three(b)) => Ok(query::distance(a, b)),
        _ => Err(dimension_mismatch(a.dimension(), &[b.dimension()])),
    }
}

/// See [`query::angle_between_vectors`].
///
/// # Errors
/// Returns [`MathError::InvalidDimension`] if the vectors differ in dimension.
pub fn any_angle_between_vectors(a: &AnyVector, b: &AnyVector) -> Result<Radians> {
    match (a, b) {
        (AnyVector::Two(a), AnyVector::Two(b)) => Ok(query::angle_between_vectors(a, b)),
        (AnyVector::Three(a), AnyVector::Three(b)) => Ok(query::angle_between_vectors(a, b)),
        _ => Err(dimension_mismatch(a.dimension(), &[b.dimension()])),
    }
}

/// See [`query::is_point_in_box`].
///
/// # Errors
/// Returns [`MathError::InvalidDimension`] if the operands differ in
/// dimension.
pub fn is_point_in_any_box(
    point: &AnyVector,
    box_origin: &AnyVector,
    box_extent: &AnyVector,
) -> Result<bool> {
    match (point, box_origin, box_extent) {
        (AnyVector::Two(point), AnyVector::Two(origin), AnyVector::Two(extent)) => {
            Ok(query::is_point_in_box(point, origin, extent))
        }
        (AnyVector::Three(point), AnyVector::Three(origin), AnyVector::Three(extent)) => {
            Ok(query::is_point_in_box(point, origin, extent))
        }
        _ => Err(dimension_mismatch(
            point.dimension(),
            &[box_origin.dimension(), box_extent.dimension()],
        )),
    }
}

/// See [`query::is_point_in_rotated_box`].
///
/// # Errors
/// Returns [`MathError::InvalidDimension`] if the vectors differ in dimension
/// or the rotation does not apply to vectors of their dimension.
pub fn is_point_in_any_rotated_box(
    point: &AnyVector,
    box_origin: &AnyVector,
    box_extent: &AnyVector,
    box_rotation: &AnyRotation,
) -> Result<bool> {
    match (point, box_origin, box_extent, box_rotation) {
        (
            AnyVector::Two(point),
            AnyVector::Two(origin),
            AnyVector::Two(extent),
            AnyRotation::Planar(angle),
        ) => Ok(query::is_point_in_rotated_box(point, origin, extent, angle)),
        (
            AnyVector::Three(point),
            AnyVector::Three(origin),
            AnyVector::Three(extent),
            AnyRotation::Spatial(rotator),
        ) => Ok(query::is_point_in_rotated_box(point, origin, extent, rotator)),
        _ => Err(dimension_mismatch(
            point.dimension(),
            &[
                box_origin.dimension(),
                box_extent.dimension(),
                box_rotation.dimension(),
            ],
        )),
    }
}

/// See [`query::vector_bounded_to_cube`].
pub fn any_vector_bounded_to_cube(vector: &AnyVector, radius: f64) -> AnyVector {
    match vector {
        AnyVector::Two(v) => query::vector_bounded_to_cube(v, radius).into(),
        AnyVector::Three(v) => query::vector_bounded_to_cube(v, radius).into(),
    }
}

/// See [`query::vector_bounded_to_sphere`].
pub fn any_vector_bounded_to_sphere(vector: &AnyVector, radius: f64) -> AnyVector {
    match vector {
        AnyVector::Two(v) => query::vector_bounded_to_sphere(v, radius).into(),
        AnyVector::Three(v) => query::vector_bounded_to_sphere(v, radius).into(),
    }
}

/// Reports the first dimension in `others` that disagrees with `expected`.
fn dimension_mismatch(expected: usize, others: &[usize]) -> MathError {
    let found = others
        .iter()
        .copied()
        .find(|&dimension| dimension != expected)
        .unwrap_or(expected);
    MathError::invalid_dimension(expected, found)
}
