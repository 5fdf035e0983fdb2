use crate::math::vec2::Vec2;

/// Result of one pairwise narrow-phase test.
///
/// Each normal is the outward normal of the struck side of that body,
/// scaled by the signed penetration overlap, so its magnitude is the
/// penetration depth. Circle sides carry no normal: a circle has no edges
/// to derive one from, so circle-circle contacts report only the boolean
/// and a circle paired with a polygon receives the single polygon-derived
/// normal while its own slot stays `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    pub does_collide: bool,
    /// Normal reported to body A, or `None` when not colliding or when no
    /// polygon geometry produced one.
    pub normal_into_a: Option<Vec2>,
    /// Normal reported to body B; symmetric to `normal_into_a`.
    pub normal_into_b: Option<Vec2>,
}

impl CollisionInfo {
    /// The non-colliding result.
    pub fn none() -> Self {
        Self {
            does_collide: false,
            normal_into_a: None,
            normal_into_b: None,
        }
    }

    /// The same contact seen from the other body's perspective.
    pub fn swapped(self) -> Self {
        Self {
            does_collide: self.does_collide,
            normal_into_a: self.normal_into_b,
            normal_into_b: self.normal_into_a,
        }
    }
}
