//! Vectors, Euler-angle rotations and spatial queries in 2D and 3D.

#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(clippy::cast_lossless)]

#[macro_use]
mod macros;

pub mod angle;
pub mod dynamic;
pub mod error;
pub mod look_at;
pub mod plane;
pub mod query;
pub mod rotator;
pub mod vector;

pub use angle::{Angle, AngleUnit, Degrees, Radians, degrees_to_radians, radians_to_degrees};
pub use dynamic::{AnyRotation, AnyVector};
pub use error::{MathError, Result};
pub use look_at::{LookAt, find_look_at_rotation};
pub use plane::Plane;
pub use query::{
    BoxFrame, angle_between_vectors, distance, forward_vector, is_point_in_box,
    is_point_in_rotated_box, right_vector, up_vector, vector_bounded_to_cube,
    vector_bounded_to_sphere,
};
pub use rotator::Rotator3;
pub use vector::{Scale, Vector, Vector2, Vector3};
