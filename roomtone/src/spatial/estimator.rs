//! The space estimator: samples the enclosing geometry around a moving carrier
//! and feeds the resulting room-size scalar to the reverb sends.

use crate::config::SpaceEstimatorDesc;
use crate::error::Result;
use crate::math::{UP, Vec3};
use crate::reverb::{PARAM_INACTIVE, ReverbParams};
use crate::scene::debug_draw::{self, DebugDraw};
use crate::scene::ray_tracer::RayTracer;
use crate::spatial::directions::ray_directions;

/// Per-tick sample of the carrier's motion, provided by the host each
/// [`SpaceEstimator::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarrierMotion {
    /// Carrier position in world space
    pub position: Vec3,
    /// Scalar speed of the carrier (m/s)
    pub velocity: f32,
}

impl CarrierMotion {
    pub fn new(position: Vec3, velocity: f32) -> Self {
        Self { position, velocity }
    }

    pub fn stationary(position: Vec3) -> Self {
        Self {
            position,
            velocity: 0.0,
        }
    }
}

/// Estimates the dimensions of the space enclosing a carrier entity.
///
/// On a fixed tick cadence the estimator casts a fan of horizontal rays plus
/// one upward ceiling ray per direction, averages the sampled distances and
/// heights, derives the room-size scalar and a rough bounding box, and pushes
/// the scalar to the active reverb send (the inactive send receives the
/// [`PARAM_INACTIVE`] sentinel).
///
/// The estimator is a plain owned value driven entirely by the host loop:
/// call [`advance`](Self::advance) once per simulation tick and read the
/// derived values back through the accessors. Rays are only re-cast while the
/// carrier moves faster than the configured threshold; between refreshes the
/// derived values are recomputed from the retained samples.
pub struct SpaceEstimator {
    desc: SpaceEstimatorDesc,
    directions: Vec<Vec3>,
    distances: Vec<f32>,
    ceiling_heights: Vec<f32>,

    average_distance: f32,
    average_height: f32,
    room_size: f32,
    space_dimensions: Vec3,
    ceiling_bounds: (f32, f32),

    tick_counter: u32,
    tracer: Box<dyn RayTracer>,
    params: Box<dyn ReverbParams>,
    debug: Option<Box<dyn DebugDraw>>,
}

impl SpaceEstimator {
    /// Creates an estimator with its two collaborators: the scene geometry
    /// query and the reverb parameter port.
    ///
    /// The ray direction table and both sample buffers are allocated here,
    /// sized `ray_count * rotation_steps`, and never resized afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`RoomToneError::Configuration`](crate::RoomToneError) if the
    /// descriptor fails validation.
    pub fn new(
        desc: SpaceEstimatorDesc,
        tracer: Box<dyn RayTracer>,
        params: Box<dyn ReverbParams>,
    ) -> Result<Self> {
        desc.validate()?;
        let directions = ray_directions(desc.ray_count, desc.rotation_steps);
        let ray_total = directions.len();
        log::debug!(
            "space estimator ready: {} rays ({} x {} rings), max distance {} m",
            ray_total,
            desc.ray_count,
            desc.rotation_steps,
            desc.max_distance
        );

        Ok(Self {
            desc,
            directions,
            distances: vec![0.0; ray_total],
            ceiling_heights: vec![0.0; ray_total],
            average_distance: 0.0,
            average_height: 0.0,
            room_size: 0.0,
            space_dimensions: Vec3::ZERO,
            ceiling_bounds: (0.0, 0.0),
            tick_counter: 0,
            tracer,
            params,
            debug: None,
        })
    }

    /// Attaches a debug line sink. Lines are only emitted when the descriptor's
    /// `draw_debug_lines` flag is also set.
    pub fn with_debug_draw(mut self, sink: Box<dyn DebugDraw>) -> Self {
        self.debug = Some(sink);
        self
    }

    /// Advances the estimator by `delta_ticks` host ticks.
    ///
    /// Once the accumulated ticks exceed `frames_per_update`, exactly one
    /// sampling cycle runs and the counter resets. Returns `true` if a cycle
    /// ran. A cycle always recomputes the derived values and pushes the reverb
    /// sends; whether the raw samples are refreshed depends on the carrier
    /// speed.
    pub fn advance(&mut self, delta_ticks: u32, motion: CarrierMotion) -> bool {
        self.tick_counter += delta_ticks;
        if self.tick_counter <= self.desc.frames_per_update {
            return false;
        }
        self.run_cycle(motion);
        self.tick_counter = 0;
        true
    }

    fn run_cycle(&mut self, motion: CarrierMotion) {
        if motion.velocity > self.desc.velocity_threshold {
            self.resample(motion.position);
        }

        self.average_distance = average(&self.distances);
        self.average_height = average(&self.ceiling_heights);
        self.recompute_dimensions(motion.position);
        // Full average height here; the halved value only enters the
        // dimension vector.
        self.room_size = self.average_height * self.average_distance;
        self.push_room_size();

        log::trace!(
            "cycle: room size {:.2}, avg distance {:.2}, avg height {:.2}",
            self.room_size,
            self.average_distance,
            self.average_height
        );
    }

    /// Re-casts every distance and ceiling ray from the given position.
    fn resample(&mut self, position: Vec3) {
        self.tracer.begin_frame();
        for index in 0..self.directions.len() {
            self.sample_distance(index, position);
            self.sample_ceiling(index, position);
        }
        self.tracer.end_frame();
    }

    fn sample_distance(&mut self, index: usize, position: Vec3) {
        let direction = self.directions[index];
        let max_distance = self.desc.max_distance;

        // A miss reads as the full ray length; capped and true readings are
        // not distinguished downstream.
        self.distances[index] = match self.tracer.cast_ray(position, direction, max_distance) {
            Some(hit) => hit.distance,
            None => max_distance,
        };

        if self.desc.draw_debug_lines {
            if let Some(debug) = self.debug.as_mut() {
                debug.line(
                    position,
                    position + direction * max_distance,
                    debug_draw::RED,
                );
            }
        }
    }

    fn sample_ceiling(&mut self, index: usize, position: Vec3) {
        // The origin sits partway along the horizontal ray, using the distance
        // just sampled for it. When that reading was capped the origin shifts
        // with it; the compounded approximation is intentional.
        let origin =
            position + self.directions[index] * (self.distances[index] / self.desc.ceiling_ray_offset);
        let ceiling_cap = position.y + self.desc.max_height;

        self.ceiling_heights[index] =
            match self.tracer.cast_ray(origin, UP, self.desc.max_distance) {
                Some(hit) if hit.point.y - position.y <= self.desc.max_height => hit.point.y,
                _ => ceiling_cap,
            };

        if self.desc.draw_debug_lines {
            if let Some(debug) = self.debug.as_mut() {
                debug.line(
                    origin,
                    origin + UP * self.desc.max_distance,
                    debug_draw::BLUE,
                );
            }
        }
    }

    /// Derives the space dimensions from the current samples: width and depth
    /// from the horizontal bounding box of the ray endpoints, height from half
    /// the average ceiling height.
    fn recompute_dimensions(&mut self, position: Vec3) {
        let mut min_x = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        let mut min_z = f32::INFINITY;
        let mut max_z = f32::NEG_INFINITY;

        for (index, direction) in self.directions.iter().enumerate() {
            let endpoint = position + *direction * self.distances[index];
            min_x = min_x.min(endpoint.x);
            max_x = max_x.max(endpoint.x);
            min_z = min_z.min(endpoint.z);
            max_z = max_z.max(endpoint.z);

            min_y = min_y.min(self.ceiling_heights[index]);
            max_y = max_y.max(self.ceiling_heights[index]);
        }

        self.ceiling_bounds = (min_y, max_y);
        self.space_dimensions =
            Vec3::new(max_x - min_x, self.average_height / 2.0, max_z - min_z);

        if self.desc.draw_debug_lines {
            if let Some(debug) = self.debug.as_mut() {
                debug_draw::draw_box(
                    debug.as_mut(),
                    position,
                    self.space_dimensions,
                    debug_draw::GREEN,
                );
            }
        }
    }

    /// Routes the room size to the active send and parks the other one.
    fn push_room_size(&mut self) {
        if self.desc.is_inside {
            self.params.set_inside(self.room_size);
            self.params.set_outside(PARAM_INACTIVE);
        } else {
            self.params.set_outside(self.room_size);
            self.params.set_inside(PARAM_INACTIVE);
        }
    }

    /// Room-size scalar from the latest cycle: average ceiling height times
    /// average obstruction distance.
    pub fn room_size(&self) -> f32 {
        self.room_size
    }

    /// Estimated space dimensions (width, half average height, depth).
    pub fn space_dimensions(&self) -> Vec3 {
        self.space_dimensions
    }

    /// Mean sampled obstruction distance.
    pub fn average_distance(&self) -> f32 {
        self.average_distance
    }

    /// Mean sampled ceiling height (world-space Y).
    pub fn average_height(&self) -> f32 {
        self.average_height
    }

    /// Lowest and highest ceiling sample (world-space Y) from the latest cycle.
    pub fn ceiling_bounds(&self) -> (f32, f32) {
        self.ceiling_bounds
    }

    /// The fixed sampling direction table.
    pub fn directions(&self) -> &[Vec3] {
        &self.directions
    }

    pub fn desc(&self) -> &SpaceEstimatorDesc {
        &self.desc
    }
}

/// Arithmetic mean; the empty sequence averages to 0.
fn average(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f32>() / samples.len() as f32
}
