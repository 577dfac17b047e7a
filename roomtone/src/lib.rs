//! # roomtone
//!
//! Ray-sampled room-size estimation for driving dynamic reverb sends.
//!
//! roomtone watches a carrier entity (the player, the camera, an AI ear) and,
//! on a fixed tick cadence, casts a fan of horizontal rays plus one upward
//! ceiling ray per direction into the host scene. The sampled distances and
//! heights are averaged into a room-size scalar and a rough bounding box of
//! the enclosing space, and the scalar is pushed to one of two reverb-send
//! parameters (inside/outside) on the audio middleware.
//!
//! The crate owns no scene and no audio device: both sides are narrow traits
//! the host implements — [`RayTracer`] over its geometry queries and
//! [`ReverbParams`] (or a named [`ParameterSink`] behind [`ReverbSendBridge`])
//! over its middleware calls.
//!
//! ## Quick Start
//!
//! ```no_run
//! use roomtone::reverb::ReverbParams;
//! use roomtone::scene::{RayHit, RayTracer};
//! use roomtone::{CarrierMotion, SpaceEstimator, SpaceEstimatorDesc, Vec3};
//!
//! // Bridge to the host scene: answer ray queries from your physics engine.
//! struct OpenField;
//!
//! impl RayTracer for OpenField {
//!     fn cast_ray(&self, _origin: Vec3, _direction: Vec3, _max_distance: f32) -> Option<RayHit> {
//!         None // nothing around: every reading caps out
//!     }
//! }
//!
//! // Bridge to the audio middleware: apply the two reverb sends.
//! struct Console;
//!
//! impl ReverbParams for Console {
//!     fn set_inside(&mut self, value: f32) {
//!         println!("inside send: {value}");
//!     }
//!     fn set_outside(&mut self, value: f32) {
//!         println!("outside send: {value}");
//!     }
//! }
//!
//! let desc = SpaceEstimatorDesc::default().rotation_steps(2);
//! let mut estimator = SpaceEstimator::new(desc, Box::new(OpenField), Box::new(Console))?;
//!
//! // Host loop: one tick per simulation frame.
//! for frame in 0..8 {
//!     let position = Vec3::new(frame as f32 * 0.1, 1.7, 0.0);
//!     if estimator.advance(1, CarrierMotion::new(position, 1.2)) {
//!         println!("room size: {}", estimator.room_size());
//!     }
//! }
//! # Ok::<(), roomtone::RoomToneError>(())
//! ```
//!
//! ## Key Components
//!
//! - **[`SpaceEstimator`]**: owns the direction table and sample buffers,
//!   driven by [`advance`](SpaceEstimator::advance) once per host tick
//! - **[`SpaceEstimatorDesc`]**: ray counts, caps, cadence and routing settings
//! - **[`RayTracer`]**: geometry query seam toward the host scene
//! - **[`ReverbParams`]** / **[`ReverbSendBridge`]**: output port toward the
//!   audio middleware
//! - **[`DebugDraw`]**: optional line sink for visualizing rays and the
//!   estimated space
//!
//! ## Cost model
//!
//! Sampling is throttled twice: a cycle only runs every `frames_per_update`
//! ticks, and rays are only re-cast while the carrier moves faster than
//! `velocity_threshold`. Raise `frames_per_update` or lower `ray_count` and
//! `rotation_steps` to trade freshness for fewer scene queries.

pub mod config;
pub mod error;
pub mod math;
pub mod reverb;
pub mod scene;
pub mod spatial;

pub use config::SpaceEstimatorDesc;
pub use error::RoomToneError;
pub use math::{Quat, Vec3};
pub use reverb::{ParameterSink, ReverbParams, ReverbSendBridge};
pub use scene::{DebugDraw, RayHit, RayTracer};
pub use spatial::{CarrierMotion, SpaceEstimator};
