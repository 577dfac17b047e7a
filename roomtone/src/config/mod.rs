//! Configuration for roomtone

mod estimator_desc;

pub use estimator_desc::SpaceEstimatorDesc;
