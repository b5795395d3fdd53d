//! Different units for angles.

use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use std::{
    cmp::Ordering,
    f64::consts::{PI, TAU},
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Represents an angle.
pub trait Angle: Copy {
    /// Creates a zero angle.
    fn zero() -> Self;

    /// Returns the angle as degrees.
    fn as_degrees(self) -> Degrees;

    /// Returns the angle as radians.
    fn as_radians(self) -> Radians;

    /// Returns the value of the angle in degrees.
    fn degrees(self) -> f64;

    /// Returns the value of the angle in radians.
    fn radians(self) -> f64;

    /// Returns the equivalent angle within one full turn, starting at zero
    /// (`[0, 360)` degrees or `[0, 2π)` radians).
    fn wrapped(self) -> Self;
}

/// An angle in degrees.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Degrees(pub f64);

/// An angle in radians.
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Zeroable, Pod)]
pub struct Radians(pub f64);

/// The unit that raw angle values are given or requested in.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degrees,
    #[default]
    Radians,
}

impl Degrees {
    const FULL_TURN: f64 = 360.0;

    fn value(self) -> f64 {
        self.0
    }
}

impl Radians {
    const FULL_TURN: f64 = TAU;

    fn value(self) -> f64 {
        self.0
    }
}

impl AngleUnit {
    /// Interprets the given raw value as an angle in this unit.
    pub fn to_radians(self, value: f64) -> Radians {
        match self {
            Self::Degrees => Degrees(value).as_radians(),
            Self::Radians => Radians(value),
        }
    }

    /// Returns the raw value of the given angle expressed in this unit.
    pub fn value_of(self, angle: impl Angle) -> f64 {
        match self {
            Self::Degrees => angle.degrees(),
            Self::Radians => angle.radians(),
        }
    }
}

impl Angle for Degrees {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        self
    }

    fn as_radians(self) -> Radians {
        Radians::from(self)
    }

    fn degrees(self) -> f64 {
        self.value()
    }

    fn radians(self) -> f64 {
        Radians::from(self).value()
    }

    fn wrapped(self) -> Self {
        Self(wrap_to_full_turn(self.value(), Self::FULL_TURN))
    }
}

impl Angle for Radians {
    fn zero() -> Self {
        Self(0.0)
    }

    fn as_degrees(self) -> Degrees {
        Degrees::from(self)
    }

    fn as_radians(self) -> Radians {
        self
    }

    fn degrees(self) -> f64 {
        Degrees::from(self).value()
    }

    fn radians(self) -> f64 {
        self.value()
    }

    fn wrapped(self) -> Self {
        Self(wrap_to_full_turn(self.value(), Self::FULL_TURN))
    }
}

impl From<Radians> for Degrees {
    fn from(rad: Radians) -> Self {
        Self(radians_to_degrees(rad.value()))
    }
}

impl From<Degrees> for Radians {
    fn from(deg: Degrees) -> Self {
        Self(degrees_to_radians(deg.value()))
    }
}

impl Add for Degrees {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Add for Radians {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.value() + rhs.value())
    }
}

impl Add<Radians> for Degrees {
    type Output = Self;
    fn add(self, rhs: Radians) -> Self {
        Self(self.value() + Self::from(rhs).value())
    }
}

impl Add<Degrees> for Radians {
    type Output = Self;
    fn add(self, rhs: Degrees) -> Self {
        Self(self.value() + Self::from(rhs).value())
    }
}

impl Sub for Degrees {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Sub for Radians {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.value() - rhs.value())
    }
}

impl Sub<Radians> for Degrees {
    type Output = Self;
    fn sub(self, rhs: Radians) -> Self {
        Self(self.value() - Self::from(rhs).value())
    }
}

impl Sub<Degrees> for Radians {
    type Output = Self;
    fn sub(self, rhs: Degrees) -> Self {
        Self(self.value() - Self::from(rhs).value())
    }
}

impl Mul<f64> for Degrees {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.value() * rhs)
    }
}

impl Mul<f64> for Radians {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self(self.value() * rhs)
    }
}

impl Div<f64> for Degrees {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.value() / rhs)
    }
}

impl Div<f64> for Radians {
    type Output = Self;
    fn div(self, rhs: f64) -> Self {
        Self(self.value() / rhs)
    }
}

impl Neg for Degrees {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.value())
    }
}

impl Neg for Radians {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.value())
    }
}

impl PartialEq<Radians> for Degrees {
    fn eq(&self, rhs: &Radians) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl PartialEq<Degrees> for Radians {
    fn eq(&self, rhs: &Degrees) -> bool {
        self.value() == Self::from(*rhs).value()
    }
}

impl PartialOrd<Radians> for Degrees {
    fn partial_cmp(&self, rhs: &Radians) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl PartialOrd<Degrees> for Radians {
    fn partial_cmp(&self, rhs: &Degrees) -> Option<Ordering> {
        self.value().partial_cmp(&Self::from(*rhs).value())
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.value())
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} rad", self.value())
    }
}

impl AbsDiffEq for Degrees {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}

impl AbsDiffEq for Radians {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.value(), &other.value(), epsilon)
    }
}

impl AbsDiffEq<Radians> for Degrees {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Radians, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.value(), &other.degrees(), epsilon)
    }
}

impl AbsDiffEq<Degrees> for Radians {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Degrees, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.value(), &other.radians(), epsilon)
    }
}

impl RelativeEq for Degrees {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.value(), &other.value(), epsilon, max_relative)
    }
}

impl RelativeEq for Radians {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.value(), &other.value(), epsilon, max_relative)
    }
}

pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

fn wrap_to_full_turn(value: f64, full_turn: f64) -> f64 {
    let wrapped = value.rem_euclid(full_turn);
    // Tiny negative values round up to exactly one full turn
    if wrapped >= full_turn { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn degrees_to_radians_for_special_angles_work() {
        assert_abs_diff_eq!(Degrees(0.0).radians(), 0.0, epsilon = EPSILON);

        assert_abs_diff_eq!(Degrees(90.0).radians(), PI / 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(180.0).radians(), PI, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(270.0).radians(), 3.0 * PI / 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(360.0).radians(), 2.0 * PI, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(720.0).radians(), 4.0 * PI, epsilon = EPSILON);

        assert_abs_diff_eq!(Degrees(-90.0).radians(), -PI / 2.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Degrees(-180.0).radians(), -PI, epsilon = EPSILON);
    }

    #[test]
    fn radians_to_degrees_for_special_angles_work() {
        assert_abs_diff_eq!(Radians(0.0).degrees(), 0.0, epsilon = EPSILON);

        assert_abs_diff_eq!(Radians(PI / 4.0).degrees(), 45.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(PI / 2.0).degrees(), 90.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(PI).degrees(), 180.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(3.0 * PI / 2.0).degrees(), 270.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(2.0 * PI).degrees(), 360.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(3.0 * PI).degrees(), 540.0, epsilon = EPSILON);
        assert_abs_diff_eq!(Radians(4.0 * PI).degrees(), 720.0, epsilon = EPSILON);

        assert_abs_diff_eq!(Radians(-PI / 2.0).degrees(), -90.0, epsilon = EPSILON);
    }

    #[test]
    fn degree_ops_work() {
        assert_abs_diff_eq!(Degrees(42.0) + Degrees(30.0), Degrees(72.0));
        assert_abs_diff_eq!(Degrees(42.0) - Degrees(30.0), Degrees(12.0));
        assert_abs_diff_eq!(Degrees(42.0) * 2.5, Degrees(105.0));
        assert_abs_diff_eq!(Degrees(42.0) / 4.0, Degrees(10.5));
        assert_abs_diff_eq!(-Degrees(42.0), Degrees(-42.0));
    }

    #[test]
    fn mixed_degree_radian_ops_work() {
        assert_abs_diff_eq!(
            Degrees(45.0) + Radians(PI / 2.0),
            Degrees(135.0),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            Radians(PI / 2.0) - Degrees(45.0),
            Radians(PI / 4.0),
            epsilon = EPSILON
        );

        assert_eq!(Degrees(0.0), Radians(0.0));
        assert!(Degrees(42.0) > Radians(0.0));
        assert!(Radians(PI) < Degrees(360.0));
    }

    #[test]
    fn wrapping_maps_negative_angles_into_first_turn() {
        assert_abs_diff_eq!(Degrees(-10.0).wrapped(), Degrees(350.0));
        assert_abs_diff_eq!(Degrees(-370.0).wrapped(), Degrees(350.0));
        assert_abs_diff_eq!(Degrees(-36_000.0 - 90.0).wrapped(), Degrees(270.0));
        assert_abs_diff_eq!(
            Radians(-PI / 2.0).wrapped(),
            Radians(3.0 * PI / 2.0),
            epsilon = EPSILON
        );
    }

    #[test]
    fn wrapping_maps_full_turns_to_zero() {
        assert_eq!(Degrees(360.0).wrapped(), Degrees(0.0));
        assert_eq!(Degrees(720.0).wrapped(), Degrees(0.0));
        assert_eq!(Radians(TAU).wrapped(), Radians(0.0));
        assert_eq!(Degrees(-1e-300).wrapped(), Degrees(0.0));
    }

    #[test]
    fn angle_unit_defaults_to_radians() {
        assert_eq!(AngleUnit::default(), AngleUnit::Radians);
        assert_abs_diff_eq!(
            AngleUnit::Degrees.to_radians(180.0),
            Radians(PI),
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(AngleUnit::Radians.to_radians(1.5), Radians(1.5));
        assert_abs_diff_eq!(
            AngleUnit::Degrees.value_of(Radians(PI)),
            180.0,
            epsilon = EPSILON
        );
    }

    proptest! {
        #[test]
        fn degree_radian_conversion_round_trips(deg in 0.0..36_000.0_f64) {
            prop_assert!((radians_to_degrees(degrees_to_radians(deg)) - deg).abs() < 1e-5);
        }

        #[test]
        fn radian_degree_conversion_round_trips(rad in 0.0..(100.0 * TAU)) {
            prop_assert!((degrees_to_radians(radians_to_degrees(rad)) - rad).abs() < 1e-5);
        }

        #[test]
        fn wrapped_angles_lie_in_first_turn(value in -1e7..1e7_f64) {
            let degrees = Degrees(value).wrapped().degrees();
            prop_assert!((0.0..360.0).contains(&degrees));
            let radians = Radians(value).wrapped().radians();
            prop_assert!((0.0..TAU).contains(&radians));
        }
    }
}
