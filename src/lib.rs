//! 2D rigid-body collision detection and fixed-timestep motion integration.
//!
//! The crate provides the geometric hitbox model (circles and convex
//! polygons), a broad-phase bounding-circle reject, the separating-axis
//! narrow phase, a rigid [`Body`] with damped velocity integration, and the
//! [`Simulation`] driver that splits each frame into fixed substeps and runs
//! an O(n^2) pairwise collision pass. Rendering, input, and gameplay
//! response live outside the crate and plug in through [`SimulationHooks`].

pub mod collision;
pub mod integration;
pub mod math;
pub mod objects;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{check_broad, check_narrow, CollisionInfo};
pub use integration::integrate;
pub use math::Vec2;
pub use objects::Body;
pub use shapes::{Circle, Hitbox, Polygon};
pub use world::{Simulation, SimulationConfig, SimulationHooks};
