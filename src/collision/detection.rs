use crate::collision::info::CollisionInfo;
use crate::collision::sat::{self, SatTarget, AXIS_EPSILON};
use crate::math::vec2::Vec2;
use crate::shapes::{Circle, Hitbox, Polygon};

/// Exact narrow-phase test between two placed, rotated hitboxes.
///
/// Dispatches on shape kind. Degenerate polygons (fewer than 2 points) are
/// treated as never colliding rather than as an error.
pub fn check_narrow(
    pos_a: Vec2,
    rot_a: f64,
    hitbox_a: &Hitbox,
    pos_b: Vec2,
    rot_b: f64,
    hitbox_b: &Hitbox,
) -> CollisionInfo {
    match (hitbox_a, hitbox_b) {
        (Hitbox::Circle(a), Hitbox::Circle(b)) => {
            check_circle_circle(pos_a, rot_a, a, pos_b, rot_b, b)
        }
        (Hitbox::Polygon(a), Hitbox::Circle(b)) => {
            check_polygon_circle(pos_a, rot_a, a, pos_b, rot_b, b)
        }
        (Hitbox::Circle(a), Hitbox::Polygon(b)) => {
            check_polygon_circle(pos_b, rot_b, b, pos_a, rot_a, a).swapped()
        }
        (Hitbox::Polygon(a), Hitbox::Polygon(b)) => {
            check_polygon_polygon(pos_a, rot_a, a, pos_b, rot_b, b)
        }
    }
}

/// Circles collide iff the center distance is at most the radius sum
/// (boundary-inclusive). No normals are produced: callers that need one for
/// circle-circle response derive it from the center-to-center vector.
fn check_circle_circle(
    pos_a: Vec2,
    rot_a: f64,
    a: &Circle,
    pos_b: Vec2,
    rot_b: f64,
    b: &Circle,
) -> CollisionInfo {
    let center_a = a.world_center(pos_a, rot_a);
    let center_b = b.world_center(pos_b, rot_b);
    if center_a.distance(center_b) <= a.radius + b.radius {
        CollisionInfo {
            does_collide: true,
            normal_into_a: None,
            normal_into_b: None,
        }
    } else {
        CollisionInfo::none()
    }
}

/// Polygon (body A) against circle (body B).
///
/// The circle is tested against every edge-normal axis of the polygon, and
/// against the axis through the polygon vertex closest to the circle center
/// (the closest boundary point may lie on an edge; the vertex stands in for
/// it). Both checks must agree for a collision. The single resulting normal
/// is reported to the circle body.
fn check_polygon_circle(
    poly_pos: Vec2,
    poly_rot: f64,
    polygon: &Polygon,
    circle_pos: Vec2,
    circle_rot: f64,
    circle: &Circle,
) -> CollisionInfo {
    if polygon.len() < 2 {
        return CollisionInfo::none();
    }
    let points = polygon.world_points(poly_pos, poly_rot);
    let center = circle.world_center(circle_pos, circle_rot);
    let target = SatTarget::Circle {
        center,
        radius: circle.radius,
    };

    let edge_result = match sat::check_sat(&points, &target) {
        Some(result) => result,
        None => return CollisionInfo::none(),
    };

    let mut closest = points[0];
    let mut closest_distance = closest.distance_squared(center);
    for &point in &points[1..] {
        let distance = point.distance_squared(center);
        if distance < closest_distance {
            closest_distance = distance;
            closest = point;
        }
    }

    let vertex_axis = closest - center;
    let vertex_result = if vertex_axis.magnitude() < AXIS_EPSILON {
        // Center sits exactly on a vertex: the axis carries no evidence.
        None
    } else {
        match sat::overlap_on_axis(vertex_axis, &points, &target) {
            Some(overlap) => Some((vertex_axis.normalize() * overlap, overlap)),
            None => return CollisionInfo::none(),
        }
    };

    // The edge axes and the closest-vertex axis compete for the
    // minimum-translation normal.
    let normal = match vertex_result {
        Some((normal, overlap)) if overlap.abs() < edge_result.overlap.abs() => normal,
        _ => edge_result.normal,
    };

    CollisionInfo {
        does_collide: true,
        normal_into_a: None,
        normal_into_b: Some(normal),
    }
}

/// Polygon-polygon: the SAT scan runs once per direction, each discovering
/// the separating axes contributed by its own subject's edges. Both
/// directions must overlap; each direction's normal is reported to the
/// other body.
fn check_polygon_polygon(
    pos_a: Vec2,
    rot_a: f64,
    a: &Polygon,
    pos_b: Vec2,
    rot_b: f64,
    b: &Polygon,
) -> CollisionInfo {
    if a.len() < 2 || b.len() < 2 {
        return CollisionInfo::none();
    }
    let points_a = a.world_points(pos_a, rot_a);
    let points_b = b.world_points(pos_b, rot_b);

    let from_a = match sat::check_sat(&points_a, &SatTarget::Polygon(&points_b)) {
        Some(result) => result,
        None => return CollisionInfo::none(),
    };
    let from_b = match sat::check_sat(&points_b, &SatTarget::Polygon(&points_a)) {
        Some(result) => result,
        None => return CollisionInfo::none(),
    };

    CollisionInfo {
        does_collide: true,
        normal_into_a: Some(from_b.normal),
        normal_into_b: Some(from_a.normal),
    }
}
