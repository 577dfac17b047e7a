//! Debug line sink for visualizing the sampling rays and the estimated space.
//!
//! Purely observational: nothing drawn here feeds back into the estimate.

use crate::math::Vec3;

/// RGB line color, each channel in `0.0..=1.0`.
pub type Color = [f32; 3];

/// Color used for horizontal distance rays.
pub const RED: Color = [1.0, 0.0, 0.0];
/// Color used for vertical ceiling rays.
pub const BLUE: Color = [0.0, 0.0, 1.0];
/// Color used for the estimated space bounds.
pub const GREEN: Color = [0.0, 1.0, 0.0];

/// Trait for receiving debug line segments from the estimator.
///
/// Hook this up to whatever immediate-mode line renderer the host engine
/// provides. Lines are emitted only while `draw_debug_lines` is enabled in the
/// estimator's descriptor.
pub trait DebugDraw: Send {
    fn line(&mut self, from: Vec3, to: Vec3, color: Color);
}

/// Draws the 12 edges of an axis-aligned box given its center and dimensions.
pub fn draw_box(sink: &mut dyn DebugDraw, center: Vec3, dimensions: Vec3, color: Color) {
    let half = dimensions * 0.5;
    let corner =
        |sx: f32, sy: f32, sz: f32| center + Vec3::new(sx * half.x, sy * half.y, sz * half.z);

    let front_top_left = corner(-1.0, 1.0, -1.0);
    let front_top_right = corner(1.0, 1.0, -1.0);
    let front_bottom_left = corner(-1.0, -1.0, -1.0);
    let front_bottom_right = corner(1.0, -1.0, -1.0);

    let back_top_left = corner(-1.0, 1.0, 1.0);
    let back_top_right = corner(1.0, 1.0, 1.0);
    let back_bottom_left = corner(-1.0, -1.0, 1.0);
    let back_bottom_right = corner(1.0, -1.0, 1.0);

    let edges = [
        (front_top_left, front_top_right),
        (front_top_right, front_bottom_right),
        (front_bottom_right, front_bottom_left),
        (front_bottom_left, front_top_left),
        (back_top_left, back_top_right),
        (back_top_right, back_bottom_right),
        (back_bottom_right, back_bottom_left),
        (back_bottom_left, back_top_left),
        (front_top_left, back_top_left),
        (front_top_right, back_top_right),
        (front_bottom_right, back_bottom_right),
        (front_bottom_left, back_bottom_left),
    ];
    for (from, to) in edges {
        sink.line(from, to, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CollectingSink {
        lines: Vec<(Vec3, Vec3)>,
    }

    impl DebugDraw for CollectingSink {
        fn line(&mut self, from: Vec3, to: Vec3, _color: Color) {
            self.lines.push((from, to));
        }
    }

    #[test]
    fn test_box_has_twelve_edges() {
        let mut sink = CollectingSink::default();
        draw_box(&mut sink, Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0), GREEN);
        assert_eq!(sink.lines.len(), 12);

        // Every endpoint lies on the box surface.
        for (from, to) in &sink.lines {
            for point in [from, to] {
                assert!(point.x.abs() == 1.0);
                assert!(point.y.abs() == 2.0);
                assert!(point.z.abs() == 3.0);
            }
        }
    }
}
