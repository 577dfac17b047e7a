//! Collaborator seams toward the host scene: geometry queries and debug lines.

pub mod debug_draw;
pub mod ray_tracer;

pub use debug_draw::{Color, DebugDraw};
pub use ray_tracer::{RayHit, RayTracer};
