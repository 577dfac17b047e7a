//! Math types for roomtone

pub use glam::{Quat, Vec3};

/// World-space forward direction (listener convention: -Z).
pub const FORWARD: Vec3 = Vec3::NEG_Z;

/// World-space up direction.
pub const UP: Vec3 = Vec3::Y;
