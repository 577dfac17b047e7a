//! Space sampling: the ray direction table and the estimator that owns it.

pub mod directions;
pub mod estimator;

pub use estimator::{CarrierMotion, SpaceEstimator};
