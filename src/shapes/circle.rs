use crate::math::vec2::Vec2;

/// Circular hitbox: a radius plus an offset of the circle center from the
/// owning body's logical position, expressed in body-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle {
    pub radius: f64,
    pub offset: Vec2,
}

impl Circle {
    pub fn new(radius: f64, offset: Vec2) -> Self {
        assert!(radius >= 0.0, "Circle radius cannot be negative");
        Self { radius, offset }
    }

    /// Radius of the bounding circle centered at the body's logical
    /// position. Includes the offset so the bound still encloses the shape
    /// when the circle is not centered on the body.
    pub fn broad_radius(&self) -> f64 {
        self.radius + self.offset.magnitude()
    }

    /// Circle center in world space for a body at `position` rotated by
    /// `rotation`.
    pub fn world_center(&self, position: Vec2, rotation: f64) -> Vec2 {
        position + self.offset.rotate(rotation)
    }
}
