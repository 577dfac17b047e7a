//! Ray direction table construction.

use crate::math::{FORWARD, Quat, Vec3};
use std::f32::consts::TAU;

/// Builds the fixed table of unit sampling directions.
///
/// The table holds `ray_count * rotation_steps` horizontal directions: each of
/// the `rotation_steps` rings spaces `ray_count` rays evenly over a full turn
/// about the vertical axis, and ring `k` is additionally rotated by
/// `k / rotation_steps` of a turn so the rings interleave. The table is
/// deterministic in the two counts and built once at estimator construction.
pub fn ray_directions(ray_count: usize, rotation_steps: usize) -> Vec<Vec3> {
    debug_assert!(ray_count >= 1 && rotation_steps >= 1);

    let mut directions = Vec::with_capacity(ray_count * rotation_steps);
    let angle_increment = TAU / ray_count as f32;
    let ring_increment = TAU / rotation_steps as f32;

    for step in 0..rotation_steps {
        let ring_offset = step as f32 * ring_increment;
        for i in 0..ray_count {
            let rotation = Quat::from_rotation_y(ring_offset + i as f32 * angle_increment);
            directions.push(rotation * FORWARD);
        }
    }
    directions
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_table_length() {
        assert_eq!(ray_directions(8, 3).len(), 24);
        assert_eq!(ray_directions(1, 1).len(), 1);
    }

    #[test]
    fn test_directions_are_unit_and_horizontal() {
        for direction in ray_directions(7, 4) {
            assert!((direction.length() - 1.0).abs() < EPSILON);
            assert!(direction.y.abs() < EPSILON);
        }
    }

    #[test]
    fn test_four_rays_quarter_turns() {
        let directions = ray_directions(4, 1);
        assert_eq!(directions.len(), 4);
        assert!(approx_eq(directions[0], Vec3::new(0.0, 0.0, -1.0)));
        assert!(approx_eq(directions[1], Vec3::new(-1.0, 0.0, 0.0)));
        assert!(approx_eq(directions[2], Vec3::new(0.0, 0.0, 1.0)));
        assert!(approx_eq(directions[3], Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_rings_are_rotations_of_each_other() {
        let ray_count = 5;
        let rotation_steps = 3;
        let directions = ray_directions(ray_count, rotation_steps);

        let ring_rotation = Quat::from_rotation_y(TAU / rotation_steps as f32);
        for step in 1..rotation_steps {
            let step_rotation = Quat::from_rotation_y(step as f32 * TAU / rotation_steps as f32);
            for i in 0..ray_count {
                let expected = step_rotation * directions[i];
                assert!(approx_eq(directions[step * ray_count + i], expected));
            }
        }

        // Adjacent rings differ by exactly one ring increment.
        for i in 0..ray_count {
            let expected = ring_rotation * directions[i];
            assert!(approx_eq(directions[ray_count + i], expected));
        }
    }
}
