//! Distances, angles, containment tests and clamping for vectors, and the
//! basis directions of a rotation.

use crate::{
    angle::{Angle, AngleUnit, Radians},
    look_at::{LookAt, find_look_at_rotation},
    rotator::Rotator3,
    vector::{Vector, Vector2, Vector3},
};

/// Vectors that can be expressed in the local frame of a rotated box.
pub trait BoxFrame: LookAt {
    /// Expresses `point` relative to the origin of a box rotated by
    /// `box_rotation` about `box_origin`, with the rotation undone so that the
    /// box is axis-aligned in the result.
    fn to_box_frame(point: &Self, box_origin: &Self, box_rotation: &Self::Rotation) -> Self;
}

impl BoxFrame for Vector2 {
    fn to_box_frame(point: &Self, box_origin: &Self, box_rotation: &Radians) -> Self {
        let distance = (point - box_origin).length();
        let local_angle = find_look_at_rotation(box_origin, point) - *box_rotation;
        Vector2::new(
            distance * local_angle.radians().cos(),
            distance * local_angle.radians().sin(),
        )
    }
}

impl BoxFrame for Vector3 {
    fn to_box_frame(point: &Self, box_origin: &Self, box_rotation: &Rotator3) -> Self {
        box_rotation.unrotate_vector(&(point - box_origin))
    }
}

/// Computes the Euclidean distance between two points.
pub fn distance<V: Vector>(a: &V, b: &V) -> f64 {
    (*a - *b).length()
}

/// Computes the unsigned angle between two vectors, in `[0, π]`.
///
/// The result is NaN if either vector has zero length.
pub fn angle_between_vectors<V: Vector>(a: &V, b: &V) -> Radians {
    let cosine = a.dot(b) / (a.length() * b.length());
    if cosine.is_nan() {
        log::trace!("Angle between {a} and {b} is undefined");
        return Radians(f64::NAN);
    }
    // Rounding can push parallel vectors just outside the domain of acos
    Radians(cosine.clamp(-1.0, 1.0).acos())
}

/// Whether `point` lies within the axis-aligned box centered at `box_origin`
/// with the given half-extents. Points on the boundary are inside.
pub fn is_point_in_box<V: Vector>(point: &V, box_origin: &V, box_extent: &V) -> bool {
    (0..V::DIMENSION).all(|i| {
        box_origin[i] - box_extent[i] <= point[i] && point[i] <= box_origin[i] + box_extent[i]
    })
}

/// Whether `point` lies within the box centered at `box_origin` with the
/// given half-extents, after the box has been rotated by `box_rotation` about
/// its origin. The rotation is an angle in 2D and a [`Rotator3`] in 3D.
pub fn is_point_in_rotated_box<V: BoxFrame>(
    point: &V,
    box_origin: &V,
    box_extent: &V,
    box_rotation: &V::Rotation,
) -> bool {
    let local_point = V::to_box_frame(point, box_origin, box_rotation);
    is_point_in_box(&local_point, &V::zeros(), box_extent)
}

/// Rotated-box containment using the componentwise transform of earlier
/// releases: the point is scaled by the rotation angles in radians before the
/// axis-aligned test. This only agrees with [`is_point_in_rotated_box`] for
/// special configurations and is kept for callers that depend on its results.
pub fn is_point_in_rotated_box_componentwise(
    point: &Vector3,
    box_origin: &Vector3,
    box_extent: &Vector3,
    box_rotation: &Rotator3,
) -> bool {
    let transformed = point.component_mul(&box_rotation.to_vector(AngleUnit::Radians));
    is_point_in_box(&transformed, box_origin, box_extent)
}

/// Clamps each component of the vector to `[-radius, radius]`.
pub fn vector_bounded_to_cube<V: Vector>(vector: &V, radius: f64) -> V {
    // Not `f64::clamp`, which panics for a negative radius
    vector.mapped(|component| component.max(-radius).min(radius))
}

/// Scales the vector down to length `radius` if it is longer, otherwise
/// returns it unchanged.
pub fn vector_bounded_to_sphere<V: Vector>(vector: &V, radius: f64) -> V {
    if vector.length() > radius {
        vector.normalized() * radius
    } else {
        *vector
    }
}

/// The direction of the x-axis after the given rotation.
pub fn forward_vector(rotation: &Rotator3) -> Vector3 {
    rotation.rotate_vector(&Vector3::unit_x())
}

/// The direction of the y-axis after the given rotation.
pub fn right_vector(rotation: &Rotator3) -> Vector3 {
    rotation.rotate_vector(&Vector3::unit_y())
}

/// The direction of the z-axis after the given rotation.
pub fn up_vector(rotation: &Rotator3) -> Vector3 {
    rotation.rotate_vector(&Vector3::unit_z())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::Degrees;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPSILON: f64 = 1e-9;

    prop_compose! {
        fn rotator_strategy()(
            roll in -1e3..1e3,
            pitch in -1e3..1e3,
            yaw in -1e3..1e3,
        ) -> Rotator3 {
            Rotator3::from_radians(roll, pitch, yaw)
        }
    }

    prop_compose! {
        fn vector3_strategy()(
            x in -1e2..1e2,
            y in -1e2..1e2,
            z in -1e2..1e2,
        ) -> Vector3 {
            Vector3::new(x, y, z)
        }
    }

    #[test]
    fn distance_between_points_works() {
        assert_abs_diff_eq!(
            distance(&Vector2::new(1.0, 1.0), &Vector2::new(4.0, 5.0)),
            5.0,
            epsilon = EPSILON
        );
        assert_abs_diff_eq!(
            distance(&Vector3::new(1.0, 2.0, 3.0), &Vector3::new(1.0, 2.0, 3.0)),
            0.0
        );
    }

    #[test]
    fn angle_between_perpendicular_vectors_is_quarter_turn() {
        let angle = angle_between_vectors(&Vector2::new(2.0, 0.0), &Vector2::new(0.0, 3.0));
        assert_abs_diff_eq!(angle, Radians(FRAC_PI_2), epsilon = EPSILON);
    }

    #[test]
    fn angle_between_opposite_vectors_is_half_turn() {
        let angle = angle_between_vectors(&Vector3::new(1.0, 1.0, 1.0), &Vector3::same(-2.0));
        assert_abs_diff_eq!(angle, Radians(PI), epsilon = 1e-6);
    }

    #[test]
    fn angle_between_parallel_vectors_is_zero() {
        let v = Vector3::new(0.1, 0.7, 0.3);
        assert_abs_diff_eq!(angle_between_vectors(&v, &(v * 3.0)), Radians(0.0), epsilon = 1e-6);
    }

    #[test]
    fn angle_with_zero_vector_is_nan() {
        let angle = angle_between_vectors(&Vector2::zeros(), &Vector2::unit_x());
        assert!(angle.radians().is_nan());
    }

    #[test]
    fn points_inside_axis_aligned_2d_box_are_detected() {
        assert!(is_point_in_box(
            &Vector2::new(5.0, 5.0),
            &Vector2::zeros(),
            &Vector2::new(10.0, 10.0)
        ));
        assert!(is_point_in_box(
            &Vector2::new(5.0, 5.0),
            &Vector2::new(10.0, 10.0),
            &Vector2::new(5.0, 10.0)
        ));
        assert!(is_point_in_box(
            &Vector2::new(5.0, -5.0),
            &Vector2::zeros(),
            &Vector2::new(5.0, 5.0)
        ));
        assert!(!is_point_in_box(
            &Vector2::new(5.0, 20.0),
            &Vector2::zeros(),
            &Vector2::new(5.0, 5.0)
        ));
    }

    #[test]
    fn points_inside_axis_aligned_3d_box_are_detected() {
        assert!(is_point_in_box(
            &Vector3::same(5.0),
            &Vector3::zeros(),
            &Vector3::same(10.0)
        ));
        assert!(!is_point_in_box(
            &Vector3::new(10.0, 10.0, -10.0),
            &Vector3::new(20.0, 20.0, 10.0),
            &Vector3::same(10.0)
        ));
        assert!(is_point_in_box(
            &Vector3::new(10.0, 10.0, -10.0),
            &Vector3::new(20.0, 20.0, 10.0),
            &Vector3::new(10.0, 10.0, 30.0)
        ));
    }

    #[test]
    fn box_boundary_counts_as_inside() {
        assert!(is_point_in_box(
            &Vector2::new(-5.0, 5.0),
            &Vector2::zeros(),
            &Vector2::same(5.0)
        ));
    }

    #[test]
    fn unrotated_2d_box_contains_point_near_corner() {
        let point = Vector2::new(9.0, 9.0);
        let extent = Vector2::same(10.0);
        assert!(is_point_in_rotated_box(&Vector2::new(5.0, 5.0), &Vector2::zeros(), &extent, &Radians(0.0)));
        assert!(is_point_in_rotated_box(&point, &Vector2::zeros(), &extent, &Radians(0.0)));
    }

    #[test]
    fn rotating_2d_box_moves_corner_point_outside() {
        let point = Vector2::new(9.0, 9.0);
        let rotation = Degrees(30.0).as_radians();
        assert!(!is_point_in_rotated_box(
            &point,
            &Vector2::zeros(),
            &Vector2::same(10.0),
            &rotation
        ));
    }

    #[test]
    fn rotating_2d_box_brings_point_inside() {
        // A long thin box along the diagonal
        let extent = Vector2::new(10.0, 1.0);
        let point = Vector2::new(6.0, 6.0);
        assert!(!is_point_in_rotated_box(&point, &Vector2::zeros(), &extent, &Radians(0.0)));
        assert!(is_point_in_rotated_box(
            &point,
            &Vector2::zeros(),
            &extent,
            &Degrees(45.0).as_radians()
        ));
    }

    #[test]
    fn rotated_2d_box_uses_its_own_origin() {
        let origin = Vector2::new(100.0, -50.0);
        let point = &origin + Vector2::new(0.0, 8.0);
        let extent = Vector2::new(10.0, 2.0);
        assert!(!is_point_in_rotated_box(&point, &origin, &extent, &Radians(0.0)));
        assert!(is_point_in_rotated_box(&point, &origin, &extent, &Radians(FRAC_PI_2)));
    }

    #[test]
    fn yawed_3d_box_agrees_with_2d_box() {
        let extent = Vector3::new(10.0, 1.0, 1.0);
        let point = Vector3::new(6.0, 6.0, 0.5);
        let yaw = Rotator3::from_degrees(0.0, 0.0, 45.0);
        assert!(!is_point_in_rotated_box(&point, &Vector3::zeros(), &extent, &Rotator3::identity()));
        assert!(is_point_in_rotated_box(&point, &Vector3::zeros(), &extent, &yaw));
    }

    #[test]
    fn pitched_3d_box_contains_point_along_tilted_axis() {
        let extent = Vector3::new(10.0, 1.0, 1.0);
        let point = Vector3::new(5.0, 0.0, 5.0);
        let pitch = Rotator3::from_degrees(0.0, 45.0, 0.0);
        assert!(is_point_in_rotated_box(&point, &Vector3::zeros(), &extent, &pitch));
        assert!(!is_point_in_rotated_box(&point, &Vector3::zeros(), &extent, &Rotator3::identity()));
    }

    #[test]
    fn componentwise_rotated_box_scales_point_by_angles() {
        let rotation = Rotator3::from_radians(1.0, 2.0, 0.5);
        let extent = Vector3::same(4.0);
        assert!(is_point_in_rotated_box_componentwise(
            &Vector3::new(3.0, 2.0, 6.0),
            &Vector3::zeros(),
            &extent,
            &rotation
        ));
        assert!(!is_point_in_rotated_box_componentwise(
            &Vector3::new(3.0, 2.5, 6.0),
            &Vector3::zeros(),
            &extent,
            &rotation
        ));
    }

    #[test]
    fn bounding_to_cube_clamps_each_component() {
        let bounded = vector_bounded_to_cube(&Vector3::new(12.0, -3.0, -40.0), 5.0);
        assert_eq!(bounded, Vector3::new(5.0, -3.0, -5.0));
        let bounded = vector_bounded_to_cube(&Vector2::new(0.5, 7.0), 1.0);
        assert_eq!(bounded, Vector2::new(0.5, 1.0));
    }

    #[test]
    fn bounding_to_sphere_shortens_long_vectors_only() {
        let bounded = vector_bounded_to_sphere(&Vector2::new(30.0, 40.0), 10.0);
        assert_abs_diff_eq!(bounded, Vector2::new(6.0, 8.0), epsilon = EPSILON);

        let short = Vector3::new(1.0, 2.0, 2.0);
        assert_eq!(vector_bounded_to_sphere(&short, 3.0), short);
        assert_eq!(vector_bounded_to_sphere(&short, 10.0), short);
    }

    #[test]
    fn basis_vectors_of_identity_are_world_axes() {
        let identity = Rotator3::identity();
        assert_abs_diff_eq!(forward_vector(&identity), Vector3::unit_x());
        assert_abs_diff_eq!(right_vector(&identity), Vector3::unit_y());
        assert_abs_diff_eq!(up_vector(&identity), Vector3::unit_z());
    }

    #[test]
    fn yawing_quarter_turn_turns_forward_into_y_axis() {
        let rotation = Rotator3::from_degrees(0.0, 0.0, 90.0);
        assert_abs_diff_eq!(forward_vector(&rotation), Vector3::unit_y(), epsilon = EPSILON);
        assert_abs_diff_eq!(right_vector(&rotation), -Vector3::unit_x(), epsilon = EPSILON);
        assert_abs_diff_eq!(up_vector(&rotation), Vector3::unit_z(), epsilon = EPSILON);
    }

    proptest! {
        #[test]
        fn basis_vectors_stay_orthonormal(rotation in rotator_strategy()) {
            let forward = forward_vector(&rotation);
            let right = right_vector(&rotation);
            let up = up_vector(&rotation);
            prop_assert!((forward.length() - 1.0).abs() < 1e-9);
            prop_assert!((right.length() - 1.0).abs() < 1e-9);
            prop_assert!((up.length() - 1.0).abs() < 1e-9);
            prop_assert!(forward.dot(&right).abs() < 1e-9);
            prop_assert!(forward.dot(&up).abs() < 1e-9);
            prop_assert!(right.dot(&up).abs() < 1e-9);
            prop_assert!(forward.cross(&right).equals(&up, Some(1e-9)));
        }

        #[test]
        fn rotated_box_contains_rotated_interior_points(
            rotation in rotator_strategy(),
            origin in vector3_strategy(),
            fractions in prop::array::uniform3(-0.99..0.99_f64),
        ) {
            let extent = Vector3::new(3.0, 2.0, 1.0);
            let local = extent.component_mul(&Vector3::from(fractions));
            let point = origin + rotation.rotate_vector(&local);
            prop_assert!(is_point_in_rotated_box(&point, &origin, &extent, &rotation));
        }

        #[test]
        fn bounded_vectors_stay_within_bounds(v in vector3_strategy(), radius in 0.0..50.0_f64) {
            let cube = vector_bounded_to_cube(&v, radius);
            prop_assert!(cube.iter().all(|c| c.abs() <= radius));
            let sphere = vector_bounded_to_sphere(&v, radius);
            prop_assert!(sphere.length() <= radius + 1e-9 || sphere == v);
        }
    }
}
