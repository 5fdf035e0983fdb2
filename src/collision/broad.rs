use crate::math::vec2::Vec2;
use crate::shapes::Hitbox;

/// Cheap bounding-circle reject test run before the exact narrow phase.
///
/// True iff the distance between the two body positions is at most the sum
/// of the hitboxes' bounding radii (boundary-inclusive). A missing hitbox on
/// either side yields `false`. May report false positives, which the narrow
/// phase resolves, but never a false negative: each shape is fully enclosed
/// by its bounding circle centered at the body's logical position.
pub fn check_broad(
    pos_a: Vec2,
    hitbox_a: Option<&Hitbox>,
    pos_b: Vec2,
    hitbox_b: Option<&Hitbox>,
) -> bool {
    match (hitbox_a, hitbox_b) {
        (Some(a), Some(b)) => pos_a.distance(pos_b) <= a.broad_radius() + b.broad_radius(),
        _ => false,
    }
}
