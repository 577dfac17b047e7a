//! Synthetic scene for the demo: a single axis-aligned room.

use roomtone::Vec3;
use roomtone::scene::{RayHit, RayTracer};

/// Axis-aligned room interior. Rays are expected to start inside the box and
/// hit its walls, floor or ceiling from within.
pub struct BoxRoomTracer {
    min: Vec3,
    max: Vec3,
}

impl BoxRoomTracer {
    /// Builds a room of the given size whose floor center sits at `floor_center`.
    pub fn new(floor_center: Vec3, size: Vec3) -> Self {
        let half = Vec3::new(size.x * 0.5, 0.0, size.z * 0.5);
        Self {
            min: floor_center - half,
            max: floor_center + Vec3::new(half.x, size.y, half.z),
        }
    }
}

impl RayTracer for BoxRoomTracer {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
        // Exit distance of a ray starting inside the slab volume.
        let mut t_exit = f32::INFINITY;
        for axis in 0..3 {
            let d = direction[axis];
            if d.abs() < 1e-6 {
                continue;
            }
            let bound = if d > 0.0 {
                self.max[axis]
            } else {
                self.min[axis]
            };
            t_exit = t_exit.min((bound - origin[axis]) / d);
        }

        (t_exit.is_finite() && t_exit >= 0.0 && t_exit <= max_distance)
            .then(|| RayHit::along(origin, direction, t_exit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walls_seen_from_center() {
        let room = BoxRoomTracer::new(Vec3::ZERO, Vec3::new(10.0, 3.0, 6.0));

        let east = room.cast_ray(Vec3::new(0.0, 1.5, 0.0), Vec3::X, 50.0).unwrap();
        assert!((east.distance - 5.0).abs() < 1e-5);

        let up = room.cast_ray(Vec3::new(0.0, 1.5, 0.0), Vec3::Y, 50.0).unwrap();
        assert!((up.distance - 1.5).abs() < 1e-5);
        assert!((up.point.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_far_wall_beyond_cap_is_a_miss() {
        let room = BoxRoomTracer::new(Vec3::ZERO, Vec3::new(200.0, 3.0, 6.0));
        assert!(room.cast_ray(Vec3::new(0.0, 1.5, 0.0), Vec3::X, 50.0).is_none());
    }
}
