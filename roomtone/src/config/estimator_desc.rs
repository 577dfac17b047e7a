use crate::error::{Result, RoomToneError};

/// Configuration descriptor for a space estimator
#[derive(Debug, Clone)]
pub struct SpaceEstimatorDesc {
    /// Number of horizontal ray directions per ring
    pub ray_count: usize,
    /// Number of rings; each ring is offset about the vertical axis by an
    /// additional fraction of a full turn, interleaving the fans of the other rings
    pub rotation_steps: usize,
    /// Maximum ray length in meters; a ray that hits nothing reads as this distance
    pub max_distance: f32,
    /// Maximum detected ceiling height above the carrier, in meters
    pub max_height: f32,
    /// Divisor picking the ceiling-ray origin along each horizontal ray
    /// (2.0 starts the ceiling ray at the midpoint of the sampled distance)
    pub ceiling_ray_offset: f32,
    /// Number of host ticks that must elapse between sampling cycles
    pub frames_per_update: u32,
    /// Carrier speed (m/s) above which the rays are re-cast; at or below it,
    /// the previous samples are reused
    pub velocity_threshold: f32,
    /// Emit ray and bounding-box lines to the debug sink, if one is attached
    pub draw_debug_lines: bool,
    /// Route the room size to the inside reverb send instead of the outside one
    pub is_inside: bool,
}

impl Default for SpaceEstimatorDesc {
    fn default() -> Self {
        Self {
            ray_count: 8,
            rotation_steps: 1,
            max_distance: 50.0,
            max_height: 100.0,
            ceiling_ray_offset: 2.0,
            frames_per_update: 3,
            velocity_threshold: 0.1,
            draw_debug_lines: false,
            is_inside: false,
        }
    }
}

impl SpaceEstimatorDesc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ray_count(mut self, count: usize) -> Self {
        self.ray_count = count;
        self
    }

    pub fn rotation_steps(mut self, steps: usize) -> Self {
        self.rotation_steps = steps;
        self
    }

    pub fn max_distance(mut self, distance: f32) -> Self {
        self.max_distance = distance;
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = height;
        self
    }

    pub fn ceiling_ray_offset(mut self, offset: f32) -> Self {
        self.ceiling_ray_offset = offset;
        self
    }

    pub fn frames_per_update(mut self, frames: u32) -> Self {
        self.frames_per_update = frames;
        self
    }

    pub fn velocity_threshold(mut self, threshold: f32) -> Self {
        self.velocity_threshold = threshold;
        self
    }

    pub fn draw_debug_lines(mut self, enable: bool) -> Self {
        self.draw_debug_lines = enable;
        self
    }

    pub fn is_inside(mut self, inside: bool) -> Self {
        self.is_inside = inside;
        self
    }

    /// Rejects degenerate configurations at construction time.
    ///
    /// `ray_count` and `rotation_steps` both divide a full turn when spacing
    /// the rays, and `ceiling_ray_offset` divides the sampled distances; none
    /// of them may be zero (nor, for the offset, non-finite or negative).
    pub fn validate(&self) -> Result<()> {
        if self.ray_count == 0 {
            return Err(RoomToneError::Configuration(
                "ray_count must be at least 1".to_string(),
            ));
        }
        if self.rotation_steps == 0 {
            return Err(RoomToneError::Configuration(
                "rotation_steps must be at least 1".to_string(),
            ));
        }
        if !self.ceiling_ray_offset.is_finite() || self.ceiling_ray_offset <= 0.0 {
            return Err(RoomToneError::Configuration(format!(
                "ceiling_ray_offset must be finite and positive, got {}",
                self.ceiling_ray_offset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_desc_is_valid() {
        assert!(SpaceEstimatorDesc::default().validate().is_ok());
    }

    #[test]
    fn test_zero_ray_count_rejected() {
        let desc = SpaceEstimatorDesc::default().ray_count(0);
        assert!(desc.validate().is_err());
    }

    #[test]
    fn test_zero_rotation_steps_rejected() {
        let desc = SpaceEstimatorDesc::default().rotation_steps(0);
        assert!(desc.validate().is_err());
    }

    #[test]
    fn test_bad_ceiling_offset_rejected() {
        assert!(
            SpaceEstimatorDesc::default()
                .ceiling_ray_offset(0.0)
                .validate()
                .is_err()
        );
        assert!(
            SpaceEstimatorDesc::default()
                .ceiling_ray_offset(f32::NAN)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_builder_chains() {
        let desc = SpaceEstimatorDesc::new()
            .ray_count(4)
            .rotation_steps(2)
            .max_distance(25.0)
            .is_inside(true);
        assert_eq!(desc.ray_count, 4);
        assert_eq!(desc.rotation_steps, 2);
        assert_eq!(desc.max_distance, 25.0);
        assert!(desc.is_inside);
    }
}
