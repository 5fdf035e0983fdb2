use crate::math::vec2::Vec2;

/// Convex polygon hitbox defined by an ordered point list in body-local
/// space (unrotated, untranslated).
///
/// Construction is permissive: any point count is accepted, including 0 and
/// 1. Degenerate polygons (fewer than 2 points) are never reported as
/// colliding by the narrow phase.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polygon {
    points: Vec<Vec2>,
    broad_radius: f64,
}

impl Polygon {
    /// Creates a polygon and precomputes its bounding radius (maximum point
    /// distance from the local origin). Shapes are immutable after
    /// construction, so the radius is computed once.
    pub fn new(points: Vec<Vec2>) -> Self {
        let broad_radius = points
            .iter()
            .map(|p| p.magnitude())
            .fold(0.0, f64::max);
        Self { points, broad_radius }
    }

    /// The four corners of a `width` x `height` rectangle centered on the
    /// local origin, counter-clockwise from the bottom-left.
    pub fn rect(width: f64, height: f64) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        Self::new(vec![
            Vec2::new(-hw, -hh),
            Vec2::new(hw, -hh),
            Vec2::new(hw, hh),
            Vec2::new(-hw, hh),
        ])
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn broad_radius(&self) -> f64 {
        self.broad_radius
    }

    /// Points transformed into world space for a body at `position` rotated
    /// by `rotation`.
    pub fn world_points(&self, position: Vec2, rotation: f64) -> Vec<Vec2> {
        self.points
            .iter()
            .map(|&p| position + p.rotate(rotation))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_polygon_new_computes_broad_radius() {
        let poly = Polygon::new(vec![
            Vec2::new(1.0, 0.0),
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.0, -2.0),
        ]);
        assert!((poly.broad_radius() - 5.0).abs() < EPSILON);
        assert_eq!(poly.len(), 3);
    }

    #[test]
    fn test_degenerate_polygons_allowed() {
        let empty = Polygon::new(vec![]);
        assert!(empty.is_empty());
        assert_eq!(empty.broad_radius(), 0.0);

        let point = Polygon::new(vec![Vec2::new(2.0, 0.0)]);
        assert_eq!(point.len(), 1);
        assert!((point.broad_radius() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_rect_corners() {
        let rect = Polygon::rect(20.0, 10.0);
        assert_eq!(
            rect.points(),
            &[
                Vec2::new(-10.0, -5.0),
                Vec2::new(10.0, -5.0),
                Vec2::new(10.0, 5.0),
                Vec2::new(-10.0, 5.0),
            ]
        );
        let expected_radius = (125.0f64).sqrt();
        assert!((rect.broad_radius() - expected_radius).abs() < EPSILON);
    }

    #[test]
    fn test_world_points_rotate_then_translate() {
        let poly = Polygon::new(vec![Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)]);
        let world = poly.world_points(Vec2::new(5.0, 5.0), FRAC_PI_2);
        assert!((world[0].x - 5.0).abs() < EPSILON);
        assert!((world[0].y - 6.0).abs() < EPSILON);
        assert!((world[1].x - 4.0).abs() < EPSILON);
        assert!((world[1].y - 5.0).abs() < EPSILON);
    }
}
