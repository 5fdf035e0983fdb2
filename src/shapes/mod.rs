pub mod circle;
pub mod polygon;

pub use circle::Circle;
pub use polygon::Polygon;

use crate::math::vec2::Vec2;

/// Geometric shape of a rigid body, in body-local space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hitbox {
    Circle(Circle),
    Polygon(Polygon),
}

impl Hitbox {
    pub fn circle(radius: f64, offset: Vec2) -> Self {
        Hitbox::Circle(Circle::new(radius, offset))
    }

    pub fn polygon(points: Vec<Vec2>) -> Self {
        Hitbox::Polygon(Polygon::new(points))
    }

    /// Rectangle convenience: expands into the 4 corner points of a
    /// `width` x `height` rectangle centered on the local origin.
    pub fn rect(width: f64, height: f64) -> Self {
        Hitbox::Polygon(Polygon::rect(width, height))
    }

    /// Radius of the bounding circle centered at the owning body's logical
    /// position. Fixed for the lifetime of the hitbox.
    pub fn broad_radius(&self) -> f64 {
        match self {
            Hitbox::Circle(circle) => circle.broad_radius(),
            Hitbox::Polygon(polygon) => polygon.broad_radius(),
        }
    }
}
