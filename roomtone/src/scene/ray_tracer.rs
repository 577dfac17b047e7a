//! Ray tracing callback trait for space sampling.
//!
//! This module provides the interface through which the estimator queries the
//! host scene for obstructions. Implement it over whatever geometry backend the
//! host already has (a physics engine, a BVH, a voxel grid, ...).

use crate::math::Vec3;

/// Closest-hit record returned by [`RayTracer::cast_ray`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance from the ray origin to the hit point (in meters)
    pub distance: f32,

    /// Hit point in world space
    pub point: Vec3,
}

impl RayHit {
    pub fn new(distance: f32, point: Vec3) -> Self {
        Self { distance, point }
    }

    /// Builds the hit record for a known parametric distance along a ray.
    pub fn along(origin: Vec3, direction: Vec3, distance: f32) -> Self {
        Self {
            distance,
            point: origin + direction * distance,
        }
    }
}

/// Trait for providing scene geometry queries to the space estimator.
///
/// The estimator issues `2 * ray_count * rotation_steps` queries per sampling
/// cycle while the carrier is moving, so implementations should be cheap to
/// call in a tight loop. Queries within one cycle must be answered against the
/// same snapshot of the scene.
///
/// # Example
///
/// ```
/// use roomtone::math::Vec3;
/// use roomtone::scene::{RayHit, RayTracer};
///
/// /// Infinite flat ceiling at a fixed height, nothing else.
/// struct FlatCeiling {
///     height: f32,
/// }
///
/// impl RayTracer for FlatCeiling {
///     fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit> {
///         if direction.y <= 0.0 || origin.y >= self.height {
///             return None;
///         }
///         let t = (self.height - origin.y) / direction.y;
///         (t <= max_distance).then(|| RayHit::along(origin, direction, t))
///     }
/// }
/// ```
pub trait RayTracer: Send + Sync {
    /// Finds the nearest obstruction along a ray.
    ///
    /// # Parameters
    ///
    /// * `origin` - Ray starting position in world space (meters)
    /// * `direction` - Ray direction (unit length)
    /// * `max_distance` - Maximum ray length to test (meters)
    ///
    /// # Returns
    ///
    /// The **closest** hit within `max_distance`, or `None` if the ray reaches
    /// its full length unobstructed. A miss is an expected outcome, not an
    /// error; the estimator substitutes its configured caps.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<RayHit>;

    /// Called once before each batch of ray casts (optional).
    ///
    /// Use this to snapshot or refit acceleration structures so the whole
    /// batch sees a consistent scene. Default implementation does nothing.
    fn begin_frame(&mut self) {}

    /// Called once after each batch of ray casts (optional).
    ///
    /// Default implementation does nothing.
    fn end_frame(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_hit_along() {
        let origin = Vec3::new(1.0, 0.0, 0.0);
        let hit = RayHit::along(origin, Vec3::Y, 3.0);
        assert_eq!(hit.distance, 3.0);
        assert_eq!(hit.point, Vec3::new(1.0, 3.0, 0.0));
    }

    struct NoopTracer;

    impl RayTracer for NoopTracer {
        fn cast_ray(&self, _origin: Vec3, _direction: Vec3, _max_distance: f32) -> Option<RayHit> {
            None
        }
    }

    #[test]
    fn test_noop_tracer_misses() {
        let tracer = NoopTracer;
        assert_eq!(tracer.cast_ray(Vec3::ZERO, Vec3::Z, 100.0), None);
    }
}
