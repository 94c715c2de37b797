// Point-versus-body hit tests
//
// Everything here is pure: callers own the decision of what a hit means.

use glam::Vec2;

use super::skeleton::{Segment, Side, StickSkeleton};

/// Strictly inside a circle of the given radius
pub fn circle_contains(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance_squared(point) < radius * radius
}

/// Whether `point` touches a limb segment thickened by the hand size
///
/// Past either end the squared distance to that endpoint is compared with
/// `hand_diameter / 4`; alongside the segment the perpendicular distance is
/// compared with `hand_diameter / 2`. A zero-length segment never collides.
pub fn segment_contains(segment: &Segment, point: Vec2, hand_diameter: f32) -> bool {
    let axis = segment.end - segment.start;
    let length_squared = axis.length_squared();
    if length_squared <= f32::EPSILON {
        return false;
    }

    let offset = point - segment.start;
    let alpha = offset.dot(axis) / length_squared;

    if alpha < 0.0 {
        offset.length_squared() < hand_diameter / 4.0
    } else if alpha > 1.0 {
        point.distance_squared(segment.end) < hand_diameter / 4.0
    } else {
        let beta = axis.perp_dot(offset).abs() / length_squared.sqrt();
        beta < hand_diameter / 2.0
    }
}

/// Head, then hands, then every limb segment
pub fn stick_figure_contains(skeleton: &StickSkeleton, point: Vec2) -> bool {
    let dims = skeleton.dims();
    let hand = dims.hand_diameter();

    if circle_contains(
        skeleton.head_center(),
        (dims.head_diameter + hand) / 2.0,
        point,
    ) {
        return true;
    }

    if [Side::Left, Side::Right]
        .into_iter()
        .any(|side| circle_contains(skeleton.hand_center(side), hand, point))
    {
        return true;
    }

    skeleton
        .segments()
        .iter()
        .any(|segment| segment_contains(segment, point, hand))
}

/// Normalized quadratic form `dx²/a² + dy²/b² <= 1` around `center`
pub fn ellipse_contains(center: Vec2, half_width: f32, half_height: f32, point: Vec2) -> bool {
    if half_width <= 0.0 || half_height <= 0.0 {
        return false;
    }
    let d = (point - center) / Vec2::new(half_width, half_height);
    d.length_squared() <= 1.0
}
