//! Rotations that make an object face a target.

use crate::{
    angle::{Angle, Radians},
    rotator::Rotator3,
    vector::{Vector, Vector2, Vector3},
};
use std::fmt;

/// Vectors that a look-at rotation can be derived for. The kind of rotation
/// depends on the dimension: a single angle in 2D and a [`Rotator3`] in 3D.
pub trait LookAt: Vector {
    type Rotation: Copy + fmt::Debug + PartialEq;

    /// Computes the rotation that makes an object at `start` face `target`.
    fn look_at_rotation(start: &Self, target: &Self) -> Self::Rotation;
}

impl LookAt for Vector2 {
    type Rotation = Radians;

    /// Returns the polar angle of the direction from `start` to `target`, in
    /// `(-π, π]`. Coinciding points give zero.
    fn look_at_rotation(start: &Self, target: &Self) -> Radians {
        let direction = (target - start).normalized();
        Radians(direction.y().atan2(direction.x()))
    }
}

impl LookAt for Vector3 {
    type Rotation = Rotator3;

    /// Returns a rotator whose yaw is the azimuth and whose pitch is the
    /// elevation of the direction from `start` to `target`. The roll is not
    /// determined by a direction and is left at zero.
    fn look_at_rotation(start: &Self, target: &Self) -> Rotator3 {
        let direction = (target - start).normalized();

        let yaw = Radians(direction.y().atan2(direction.x()));

        let pitch = if direction.z() == 0.0 {
            Radians::zero()
        } else {
            // Normalization may overshoot the unit range by an ulp
            Radians(direction.z().clamp(-1.0, 1.0).asin())
        };

        Rotator3::new(Radians::zero(), pitch, yaw)
    }
}

/// Computes the rotation that makes an object at `start` face `target`.
///
/// For 2D points this is an angle in radians measured counterclockwise from
/// the x-axis. For 3D points it is a [`Rotator3`] with zero roll.
pub fn find_look_at_rotation<V: LookAt>(start: &V, target: &V) -> V::Rotation {
    V::look_at_rotation(start, target)
}
