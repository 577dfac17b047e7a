mod scene;

use anyhow::Result;
use roomtone::reverb::{ParameterSink, ReverbSendBridge};
use roomtone::{CarrierMotion, SpaceEstimator, SpaceEstimatorDesc, Vec3};
use scene::BoxRoomTracer;

/// Stand-in for the audio middleware: logs every parameter application.
struct LoggingSink;

impl ParameterSink for LoggingSink {
    fn set_parameter(&mut self, name: &str, value: f32) {
        log::debug!("{name} <- {value:.1}");
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    walk_through_room("small study", Vec3::new(4.0, 2.6, 3.0))?;
    walk_through_room("concert hall", Vec3::new(40.0, 18.0, 25.0))?;
    Ok(())
}

/// Walks the carrier through a synthetic room and logs what the estimator
/// makes of it.
fn walk_through_room(label: &str, size: Vec3) -> Result<()> {
    log::info!(
        "=== {label}: {} x {} x {} m ===",
        size.x,
        size.y,
        size.z
    );

    let desc = SpaceEstimatorDesc::default()
        .rotation_steps(2)
        .is_inside(true);
    let tracer = BoxRoomTracer::new(Vec3::ZERO, size);
    let params = ReverbSendBridge::new(LoggingSink);
    let mut estimator = SpaceEstimator::new(desc, Box::new(tracer), Box::new(params))?;
    log::info!("sampling with {} rays", estimator.directions().len());

    let mut position = Vec3::new(-size.x * 0.25, 1.7, 0.0);
    let step = Vec3::new(size.x * 0.01, 0.0, 0.0);
    let speed = step.length() * 60.0; // 60 ticks per second

    for _ in 0..40 {
        position += step;
        if estimator.advance(1, CarrierMotion::new(position, speed)) {
            let dims = estimator.space_dimensions();
            log::info!(
                "room size {:>8.1} | estimated space {:.1} x {:.1} x {:.1} m | avg distance {:.1} m",
                estimator.room_size(),
                dims.x,
                dims.y,
                dims.z,
                estimator.average_distance()
            );
        }
    }
    Ok(())
}
