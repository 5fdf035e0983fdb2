//! Generic separating-axis test over one shape's edge normals.
//!
//! Each call scans only the subject shape's edges; the axes contributed by
//! the other shape are found by the reciprocal call with the arguments
//! swapped, so polygon-polygon dispatch runs the routine twice.

use crate::math::vec2::Vec2;

/// Axes shorter than this contribute no separating evidence and are
/// skipped (degenerate edge from duplicate consecutive points).
pub(crate) const AXIS_EPSILON: f64 = 1e-10;

/// The shape projected against the subject's axes: a world-space point list
/// or a world-space circle.
pub(crate) enum SatTarget<'a> {
    Polygon(&'a [Vec2]),
    Circle { center: Vec2, radius: f64 },
}

/// Outcome of a one-directional SAT scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SatResult {
    /// Unit minimum-translation axis scaled by the signed overlap; its
    /// magnitude is the penetration depth along that axis.
    pub normal: Vec2,
    /// Raw signed overlap on the minimum-translation axis.
    pub overlap: f64,
}

fn project_points(points: &[Vec2], axis: Vec2, axis_magnitude: f64) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &point in points {
        // Axes are not pre-normalized; dividing by the axis magnitude here
        // keeps the projections comparable across axes.
        let projection = point.dot(axis) / axis_magnitude;
        min = min.min(projection);
        max = max.max(projection);
    }
    (min, max)
}

fn project_target(target: &SatTarget<'_>, axis: Vec2, axis_magnitude: f64) -> (f64, f64) {
    match target {
        SatTarget::Polygon(points) => project_points(points, axis, axis_magnitude),
        SatTarget::Circle { center, radius } => {
            let center_projection = center.dot(axis) / axis_magnitude;
            (center_projection - radius, center_projection + radius)
        }
    }
}

/// Signed 1-D overlap of the subject interval `[a_min, a_max]` and the
/// target interval `[b_min, b_max]`. `None` when the intervals are
/// disjoint; otherwise whichever of the two interval differences has the
/// smaller magnitude, so the magnitude is the penetration depth and the
/// sign records which end of the subject interval is penetrated.
fn interval_overlap(a_min: f64, a_max: f64, b_min: f64, b_max: f64) -> Option<f64> {
    let d1 = b_max - a_min;
    let d2 = b_min - a_max;
    if d1 < 0.0 || d2 > 0.0 {
        return None;
    }
    Some(if d1 < -d2 { d1 } else { d2 })
}

/// Signed overlap of subject and target projected on one candidate axis, or
/// `None` when the axis separates them. The axis must be non-degenerate
/// (callers check against [`AXIS_EPSILON`]); it need not be normalized.
pub(crate) fn overlap_on_axis(axis: Vec2, subject: &[Vec2], target: &SatTarget<'_>) -> Option<f64> {
    let axis_magnitude = axis.magnitude();
    let (a_min, a_max) = project_points(subject, axis, axis_magnitude);
    let (b_min, b_max) = project_target(target, axis, axis_magnitude);
    interval_overlap(a_min, a_max, b_min, b_max)
}

/// Tests `target` against every edge-normal axis of `subject`.
///
/// Returns `None` as soon as any axis separates the projections. Otherwise
/// returns the normal of the smallest-magnitude-overlap axis, scaled by the
/// signed overlap (the product is invariant under winding direction, so the
/// subject's point order does not matter). Subjects with fewer than 2
/// points, or whose edges are all degenerate, yield `None`.
pub(crate) fn check_sat(subject: &[Vec2], target: &SatTarget<'_>) -> Option<SatResult> {
    let count = subject.len();
    if count < 2 {
        return None;
    }

    let mut best: Option<SatResult> = None;
    for i in 0..count {
        let edge = subject[(i + 1) % count] - subject[i];
        let axis = edge.perpendicular();
        if axis.magnitude() < AXIS_EPSILON {
            continue;
        }

        let overlap = overlap_on_axis(axis, subject, target)?;
        let is_smaller = match best {
            Some(result) => overlap.abs() < result.overlap.abs(),
            None => true,
        };
        if is_smaller {
            best = Some(SatResult {
                normal: axis.normalize() * overlap,
                overlap,
            });
        }
    }
    best
}
