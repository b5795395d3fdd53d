//! Vectors.

use crate::error::{MathError, Result};
use bytemuck::{Pod, Zeroable};
use std::{
    fmt,
    ops::{Add, Index, IndexMut, Mul, Sub},
};

/// Behavior shared by [`Vector2`] and [`Vector3`], so that queries can be
/// written once for both dimensions and mixing dimensions is a compile error.
pub trait Vector:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Index<usize, Output = f64>
{
    /// The number of components.
    const DIMENSION: usize;

    /// Creates a vector whose `i`th component is `f(i)`.
    fn from_fn(f: impl FnMut(usize) -> f64) -> Self;

    /// Returns the components as a slice.
    fn components(&self) -> &[f64];

    /// Computes the dot product of this vector with another.
    fn dot(&self, other: &Self) -> f64;

    /// Computes the length of the vector.
    fn length(&self) -> f64;

    /// Computes the normalized version of the vector, or the zero vector if
    /// the length is zero.
    fn normalized(&self) -> Self;

    /// Creates a new vector with all zeros.
    fn zeros() -> Self {
        Self::from_fn(|_| 0.0)
    }

    /// Returns a vector with the given closure applied to each component.
    fn mapped(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        Self::from_fn(|i| f(self[i]))
    }
}

/// A 2-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 2]", from = "[f64; 2]")
)]
#[derive(Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Vector2 {
    inner: nalgebra::Vector2<f64>,
}

/// A 3-dimensional vector.
#[repr(transparent)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "[f64; 3]", from = "[f64; 3]")
)]
#[derive(Clone, Copy, PartialEq, Zeroable, Pod)]
pub struct Vector3 {
    inner: nalgebra::Vector3<f64>,
}

/// A factor to scale a vector by, either the same for every component or
/// separately per component.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scale<V> {
    Uniform(f64),
    Componentwise(V),
}

impl<V> From<f64> for Scale<V> {
    fn from(factor: f64) -> Self {
        Self::Uniform(factor)
    }
}

impl From<Vector2> for Scale<Vector2> {
    fn from(factors: Vector2) -> Self {
        Self::Componentwise(factors)
    }
}

impl From<Vector3> for Scale<Vector3> {
    fn from(factors: Vector3) -> Self {
        Self::Componentwise(factors)
    }
}

impl Vector2 {
    pub const DIMENSION: usize = 2;

    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self::wrap(nalgebra::Vector2::new(x, y))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: f64) -> Self {
        Self::new(value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// Returns the component at the given index.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfBounds`] if `index` is not 0 or 1.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.inner
            .get(index)
            .copied()
            .ok_or_else(|| MathError::index_out_of_bounds(index, Self::DIMENSION))
    }

    /// Sets the component at the given index.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfBounds`] if `index` is not 0 or 1.
    pub fn set(&mut self, index: usize, value: f64) -> Result<&mut Self> {
        let component = self
            .inner
            .get_mut(index)
            .ok_or_else(|| MathError::index_out_of_bounds(index, Self::DIMENSION))?;
        *component = value;
        Ok(self)
    }

    /// Returns the sum of this vector and all the given vectors.
    pub fn plus(&self, others: &[Self]) -> Self {
        others.iter().fold(*self, |sum, other| sum + other)
    }

    /// Adds all the given vectors to this vector.
    pub fn add_in_place(&mut self, others: &[Self]) -> &mut Self {
        *self = self.plus(others);
        self
    }

    /// Returns this vector with all the given vectors subtracted.
    pub fn minus(&self, others: &[Self]) -> Self {
        others.iter().fold(*self, |difference, other| difference - other)
    }

    /// Subtracts all the given vectors from this vector.
    pub fn subtract(&mut self, others: &[Self]) -> &mut Self {
        *self = self.minus(others);
        self
    }

    /// Returns this vector scaled by a scalar or, componentwise, by a vector.
    pub fn multiplied_by(&self, factor: impl Into<Scale<Self>>) -> Self {
        match factor.into() {
            Scale::Uniform(factor) => self * factor,
            Scale::Componentwise(factors) => self.component_mul(&factors),
        }
    }

    /// Scales this vector by a scalar or, componentwise, by a vector.
    pub fn multiply(&mut self, factor: impl Into<Scale<Self>>) -> &mut Self {
        *self = self.multiplied_by(factor);
        self
    }

    /// Returns this vector divided by a scalar or, componentwise, by a vector.
    pub fn divided_by(&self, divisor: impl Into<Scale<Self>>) -> Self {
        match divisor.into() {
            Scale::Uniform(divisor) => self / divisor,
            Scale::Componentwise(divisors) => {
                Self::wrap(self.inner.component_div(&divisors.inner))
            }
        }
    }

    /// Divides this vector by a scalar or, componentwise, by a vector.
    pub fn divide(&mut self, divisor: impl Into<Scale<Self>>) -> &mut Self {
        *self = self.divided_by(divisor);
        self
    }

    /// Whether this vector equals another, exactly if no tolerance is given,
    /// otherwise with every component differing by at most `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: Option<f64>) -> bool {
        match tolerance {
            Some(tolerance) => (self - other).inner.amax() <= tolerance,
            None => self == other,
        }
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.inner.norm()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.inner.norm_squared()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(&other.inner)
    }

    /// Computes the dot product of two vectors.
    #[inline]
    pub fn dot_product(a: &Self, b: &Self) -> f64 {
        a.dot(b)
    }

    /// Computes the z-component of the cross product of the two vectors
    /// embedded in the xy-plane.
    #[inline]
    pub fn cross(&self, other: &Self) -> f64 {
        self.inner.perp(&other.inner)
    }

    /// Computes the normalized version of the vector. The zero vector stays
    /// zero.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            log::trace!("Normalizing zero-length 2D vector");
            return Self::zeros();
        }
        self / length
    }

    /// Normalizes this vector in place. The zero vector stays zero.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Computes the unit vector perpendicular to this one, rotated a quarter
    /// turn counterclockwise.
    pub fn normal(&self) -> Self {
        Self::new(-self.y(), self.x()).normalized()
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::wrap(self.inner.component_mul(&other.inner))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self::wrap(self.inner.map(f))
    }

    /// Returns the components in order.
    #[inline]
    pub fn to_array(&self) -> [f64; 2] {
        (*self).into()
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.inner.iter().copied()
    }

    #[inline]
    const fn wrap(inner: nalgebra::Vector2<f64>) -> Self {
        Self { inner }
    }
}

impl Vector for Vector2 {
    const DIMENSION: usize = 2;

    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        Self::wrap(nalgebra::Vector2::from_fn(|i, _| f(i)))
    }

    fn components(&self) -> &[f64] {
        self.inner.as_slice()
    }

    fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(&other.inner)
    }

    fn length(&self) -> f64 {
        self.inner.norm()
    }

    fn normalized(&self) -> Self {
        Vector2::normalized(self)
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; 2]> for Vector2 {
    #[inline]
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2> for [f64; 2] {
    #[inline]
    fn from(vector: Vector2) -> Self {
        [vector.x(), vector.y()]
    }
}

impl_binop!(Add, add, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector2, Vector2, Vector2, |a, b| {
    Vector2::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector2, f64, Vector2, |a, b| {
    Vector2::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f64, Vector2, Vector2, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector2, f64, Vector2, |a, b| {
    Vector2::wrap(a.inner / *b)
});

impl_binop_assign!(AddAssign, add_assign, Vector2, Vector2, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector2, Vector2, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector2, f64, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector2, f64, |a, b| {
    a.inner /= *b;
});

impl_unary_op!(Neg, neg, Vector2, Vector2, |val| {
    Vector2::wrap(-val.inner)
});

impl Index<usize> for Vector2 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector2 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl_abs_diff_eq!(Vector2, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

impl_relative_eq!(Vector2, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl fmt::Debug for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector2")
            .field("x", &self.x())
            .field("y", &self.y())
            .finish()
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Vector2 {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?))
    }
}

impl Vector3 {
    pub const DIMENSION: usize = 3;

    /// Creates a new vector with the given components.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self::wrap(nalgebra::Vector3::new(x, y, z))
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub fn zeros() -> Self {
        Self::same(0.0)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub fn same(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub fn unit_x() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    /// The y-axis unit vector.
    #[inline]
    pub fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// The z-axis unit vector.
    #[inline]
    pub fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// The x-component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.inner.x
    }

    /// The y-component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.inner.y
    }

    /// The z-component.
    #[inline]
    pub fn z(&self) -> f64 {
        self.inner.z
    }

    /// Returns the component at the given index.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfBounds`] if `index` is not 0, 1 or 2.
    pub fn get(&self, index: usize) -> Result<f64> {
        self.inner
            .get(index)
            .copied()
            .ok_or_else(|| MathError::index_out_of_bounds(index, Self::DIMENSION))
    }

    /// Sets the component at the given index.
    ///
    /// # Errors
    /// Returns [`MathError::IndexOutOfBounds`] if `index` is not 0, 1 or 2.
    pub fn set(&mut self, index: usize, value: f64) -> Result<&mut Self> {
        let component = self
            .inner
            .get_mut(index)
            .ok_or_else(|| MathError::index_out_of_bounds(index, Self::DIMENSION))?;
        *component = value;
        Ok(self)
    }

    /// Returns the sum of this vector and all the given vectors.
    pub fn plus(&self, others: &[Self]) -> Self {
        others.iter().fold(*self, |sum, other| sum + other)
    }

    /// Adds all the given vectors to this vector.
    pub fn add_in_place(&mut self, others: &[Self]) -> &mut Self {
        *self = self.plus(others);
        self
    }

    /// Returns this vector with all the given vectors subtracted.
    pub fn minus(&self, others: &[Self]) -> Self {
        others.iter().fold(*self, |difference, other| difference - other)
    }

    /// Subtracts all the given vectors from this vector.
    pub fn subtract(&mut self, others: &[Self]) -> &mut Self {
        *self = self.minus(others);
        self
    }

    /// Returns this vector scaled by a scalar or, componentwise, by a vector.
    pub fn multiplied_by(&self, factor: impl Into<Scale<Self>>) -> Self {
        match factor.into() {
            Scale::Uniform(factor) => self * factor,
            Scale::Componentwise(factors) => self.component_mul(&factors),
        }
    }

    /// Scales this vector by a scalar or, componentwise, by a vector.
    pub fn multiply(&mut self, factor: impl Into<Scale<Self>>) -> &mut Self {
        *self = self.multiplied_by(factor);
        self
    }

    /// Returns this vector divided by a scalar or, componentwise, by a vector.
    pub fn divided_by(&self, divisor: impl Into<Scale<Self>>) -> Self {
        match divisor.into() {
            Scale::Uniform(divisor) => self / divisor,
            Scale::Componentwise(divisors) => {
                Self::wrap(self.inner.component_div(&divisors.inner))
            }
        }
    }

    /// Divides this vector by a scalar or, componentwise, by a vector.
    pub fn divide(&mut self, divisor: impl Into<Scale<Self>>) -> &mut Self {
        *self = self.divided_by(divisor);
        self
    }

    /// Whether this vector equals another, exactly if no tolerance is given,
    /// otherwise with every component differing by at most `tolerance`.
    pub fn equals(&self, other: &Self, tolerance: Option<f64>) -> bool {
        match tolerance {
            Some(tolerance) => (self - other).inner.amax() <= tolerance,
            None => self == other,
        }
    }

    /// Computes the length of the vector.
    #[inline]
    pub fn length(&self) -> f64 {
        self.inner.norm()
    }

    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.inner.norm_squared()
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(&other.inner)
    }

    /// Computes the dot product of two vectors.
    #[inline]
    pub fn dot_product(a: &Self, b: &Self) -> f64 {
        a.dot(b)
    }

    /// Computes the cross product of this vector with another.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::wrap(self.inner.cross(&other.inner))
    }

    /// Computes the normalized version of the vector. The zero vector stays
    /// zero.
    pub fn normalized(&self) -> Self {
        let length = self.length();
        if length == 0.0 {
            log::trace!("Normalizing zero-length 3D vector");
            return Self::zeros();
        }
        self / length
    }

    /// Normalizes this vector in place. The zero vector stays zero.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Same as [`Self::normalized`]; a 3D direction is its own normal.
    pub fn normal(&self) -> Self {
        self.normalized()
    }

    /// Multiplies each component by the corresponding component in another
    /// vector.
    #[inline]
    pub fn component_mul(&self, other: &Self) -> Self {
        Self::wrap(self.inner.component_mul(&other.inner))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, f: impl FnMut(f64) -> f64) -> Self {
        Self::wrap(self.inner.map(f))
    }

    /// Returns the x- and y-components.
    #[inline]
    pub fn xy(&self) -> Vector2 {
        Vector2::new(self.x(), self.y())
    }

    /// Returns the components in order.
    #[inline]
    pub fn to_array(&self) -> [f64; 3] {
        (*self).into()
    }

    /// Iterates over the components in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.inner.iter().copied()
    }

    #[inline]
    const fn wrap(inner: nalgebra::Vector3<f64>) -> Self {
        Self { inner }
    }
}

impl Vector for Vector3 {
    const DIMENSION: usize = 3;

    fn from_fn(mut f: impl FnMut(usize) -> f64) -> Self {
        Self::wrap(nalgebra::Vector3::from_fn(|i, _| f(i)))
    }

    fn components(&self) -> &[f64] {
        self.inner.as_slice()
    }

    fn dot(&self, other: &Self) -> f64 {
        self.inner.dot(&other.inner)
    }

    fn length(&self) -> f64 {
        self.inner.norm()
    }

    fn normalized(&self) -> Self {
        Vector3::normalized(self)
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::zeros()
    }
}

impl From<[f64; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    #[inline]
    fn from(vector: Vector3) -> Self {
        [vector.x(), vector.y(), vector.z()]
    }
}

impl_binop!(Add, add, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner + b.inner)
});

impl_binop!(Sub, sub, Vector3, Vector3, Vector3, |a, b| {
    Vector3::wrap(a.inner - b.inner)
});

impl_binop!(Mul, mul, Vector3, f64, Vector3, |a, b| {
    Vector3::wrap(a.inner * *b)
});

impl_binop!(Mul, mul, f64, Vector3, Vector3, |a, b| { b.mul(*a) });

impl_binop!(Div, div, Vector3, f64, Vector3, |a, b| {
    Vector3::wrap(a.inner / *b)
});

impl_binop_assign!(AddAssign, add_assign, Vector3, Vector3, |a, b| {
    a.inner += b.inner;
});

impl_binop_assign!(SubAssign, sub_assign, Vector3, Vector3, |a, b| {
    a.inner -= b.inner;
});

impl_binop_assign!(MulAssign, mul_assign, Vector3, f64, |a, b| {
    a.inner *= *b;
});

impl_binop_assign!(DivAssign, div_assign, Vector3, f64, |a, b| {
    a.inner /= *b;
});

impl_unary_op!(Neg, neg, Vector3, Vector3, |val| {
    Vector3::wrap(-val.inner)
});

impl Index<usize> for Vector3 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl IndexMut<usize> for Vector3 {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl_abs_diff_eq!(Vector3, |a, b, epsilon| {
    a.inner.abs_diff_eq(&b.inner, epsilon)
});

impl_relative_eq!(Vector3, |a, b, epsilon, max_relative| {
    a.inner.relative_eq(&b.inner, epsilon, max_relative)
});

impl fmt::Debug for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector3")
            .field("x", &self.x())
            .field("y", &self.y())
            .field("z", &self.z())
            .finish()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Vector3 {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(Self::new(u.arbitrary()?, u.arbitrary()?, u.arbitrary()?))
    }
}
